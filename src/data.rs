//! Mock display records. Everything here is literal; nothing is computed from
//! anything else.

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Blue,
    Purple,
    Orange,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Emerald => "tone-emerald",
            Tone::Blue => "tone-blue",
            Tone::Purple => "tone-purple",
            Tone::Orange => "tone-orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Sale,
    Return,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Sale => "Venta",
            TransactionKind::Return => "Devolución",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: &'static str,
    pub time: &'static str,
    pub kind: TransactionKind,
    pub customer: &'static str,
    pub items: &'static str,
    /// Signed, in cents. Returns are negative.
    pub amount_cents: i64,
}

impl Transaction {
    /// Sales get a leading `+`; returns show the bare magnitude.
    pub fn amount_label(&self) -> String {
        let abs = self.amount_cents.unsigned_abs();
        let sign = match self.kind {
            TransactionKind::Sale => "+",
            TransactionKind::Return => "",
        };
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDay {
    pub label: &'static str,
    pub loans: u32,
    pub returns: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyVisits {
    pub day: &'static str,
    pub visits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularBook {
    pub title: &'static str,
    pub author: &'static str,
    pub loans: u32,
}

pub const HOME_STATS: &[StatCard] = &[
    StatCard { title: "Ventas del Día", value: "$177.04", change: "+12%", icon: Icon::Dollar, tone: Tone::Emerald },
    StatCard { title: "Transacciones", value: "5", change: "+8%", icon: Icon::Cart, tone: Tone::Blue },
    StatCard { title: "Total Neto", value: "$145.04", change: "+23%", icon: Icon::Book, tone: Tone::Purple },
    StatCard { title: "Devoluciones", value: "1", change: "-32%", icon: Icon::Return, tone: Tone::Orange },
];

pub const TODAY_TRANSACTIONS: &[Transaction] = &[
    Transaction { id: "T001", time: "2:30 PM", kind: TransactionKind::Sale, customer: "María González", items: "El Principito, 1984", amount_cents: 4125 },
    Transaction { id: "T002", time: "1:15 PM", kind: TransactionKind::Sale, customer: "Carlos Ruiz", items: "Cien Años de Soledad", amount_cents: 2599 },
    Transaction { id: "T003", time: "12:45 PM", kind: TransactionKind::Return, customer: "Ana López", items: "Don Quijote", amount_cents: -3200 },
    Transaction { id: "T004", time: "11:30 AM", kind: TransactionKind::Sale, customer: "Pedro Martín", items: "Harry Potter (3 libros)", amount_cents: 6750 },
    Transaction { id: "T005", time: "10:20 AM", kind: TransactionKind::Sale, customer: "Laura Vega", items: "Orgullo y Prejuicio", amount_cents: 1975 },
    Transaction { id: "T006", time: "9:45 AM", kind: TransactionKind::Sale, customer: "Roberto Silva", items: "El Hobbit, El Señor de los Anillos", amount_cents: 5480 },
];

pub const DASHBOARD_STATS: &[StatCard] = &[
    StatCard { title: "Total de Libros", value: "2,847", change: "+12%", icon: Icon::Book, tone: Tone::Emerald },
    StatCard { title: "Usuarios Activos", value: "1,234", change: "+8%", icon: Icon::Users, tone: Tone::Blue },
    StatCard { title: "Préstamos del Mes", value: "456", change: "+23%", icon: Icon::TrendingUp, tone: Tone::Purple },
    StatCard { title: "Eventos Programados", value: "12", change: "+3%", icon: Icon::Calendar, tone: Tone::Orange },
];

pub const WEEKLY_LOANS: &[LoanDay] = &[
    LoanDay { label: "Lun", loans: 45, returns: 38 },
    LoanDay { label: "Mar", loans: 52, returns: 41 },
    LoanDay { label: "Mié", loans: 48, returns: 45 },
    LoanDay { label: "Jue", loans: 61, returns: 52 },
    LoanDay { label: "Vie", loans: 55, returns: 48 },
    LoanDay { label: "Sáb", loans: 67, returns: 58 },
    LoanDay { label: "Dom", loans: 43, returns: 39 },
];

pub const CATEGORIES: &[Category] = &[
    Category { name: "Ficción", percent: 35, color: "#10b981" },
    Category { name: "Ciencia", percent: 25, color: "#3b82f6" },
    Category { name: "Historia", percent: 20, color: "#8b5cf6" },
    Category { name: "Arte", percent: 12, color: "#f59e0b" },
    Category { name: "Otros", percent: 8, color: "#ef4444" },
];

pub const WEEKLY_VISITS: &[DailyVisits] = &[
    DailyVisits { day: "L", visits: 120 },
    DailyVisits { day: "M", visits: 145 },
    DailyVisits { day: "X", visits: 132 },
    DailyVisits { day: "J", visits: 168 },
    DailyVisits { day: "V", visits: 155 },
    DailyVisits { day: "S", visits: 189 },
    DailyVisits { day: "D", visits: 98 },
];

pub const POPULAR_BOOKS: &[PopularBook] = &[
    PopularBook { title: "El Quijote", author: "Cervantes", loans: 45 },
    PopularBook { title: "Cien Años de Soledad", author: "García Márquez", loans: 38 },
    PopularBook { title: "1984", author: "George Orwell", loans: 35 },
    PopularBook { title: "El Principito", author: "Saint-Exupéry", loans: 32 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_labels() {
        let labels: Vec<_> = TODAY_TRANSACTIONS.iter().map(Transaction::amount_label).collect();
        assert_eq!(
            labels,
            ["+$41.25", "+$25.99", "$32.00", "+$67.50", "+$19.75", "+$54.80"]
        );
    }

    #[test]
    fn returns_are_negative() {
        for t in TODAY_TRANSACTIONS {
            match t.kind {
                TransactionKind::Sale => assert!(t.amount_cents > 0, "{}", t.id),
                TransactionKind::Return => assert!(t.amount_cents < 0, "{}", t.id),
            }
        }
    }

    #[test]
    fn categories_cover_everything() {
        assert_eq!(CATEGORIES.iter().map(|c| c.percent).sum::<u32>(), 100);
    }

    #[test]
    fn one_stat_card_per_tone() {
        for stats in [HOME_STATS, DASHBOARD_STATS] {
            let tones: Vec<_> = stats.iter().map(|s| s.tone).collect();
            assert_eq!(tones, [Tone::Emerald, Tone::Blue, Tone::Purple, Tone::Orange]);
        }
    }
}
