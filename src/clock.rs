//! Wall-clock reading for the home view, formatted the way es-ES does it.

const WEEKDAYS: [&str; 7] = [
    "domingo",
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub day: u32,
    /// 0 = Sunday, like JS `Date.getDay()`.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockReading {
    /// Local time from the browser.
    pub fn now() -> Self {
        let d = js_sys::Date::new_0();
        Self {
            year: d.get_full_year() as i32,
            month: d.get_month() + 1,
            day: d.get_date(),
            weekday: d.get_day(),
            hour: d.get_hours(),
            minute: d.get_minutes(),
        }
    }

    /// "02:30 p. m."
    pub fn time_label(&self) -> String {
        let suffix = if self.hour < 12 { "a. m." } else { "p. m." };
        let h12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", h12, self.minute, suffix)
    }

    /// "viernes, 16 de octubre de 2026"
    pub fn date_label(&self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("");
        format!("{weekday}, {} de {month} de {}", self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> ClockReading {
        ClockReading {
            year: 2026,
            month: 10,
            day: 16,
            weekday: 5,
            hour,
            minute,
        }
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(at(0, 5).time_label(), "12:05 a. m.");
        assert_eq!(at(9, 45).time_label(), "09:45 a. m.");
        assert_eq!(at(12, 0).time_label(), "12:00 p. m.");
        assert_eq!(at(14, 30).time_label(), "02:30 p. m.");
        assert_eq!(at(23, 59).time_label(), "11:59 p. m.");
    }

    #[test]
    fn long_date() {
        assert_eq!(at(10, 0).date_label(), "viernes, 16 de octubre de 2026");

        let new_year = ClockReading {
            year: 2027,
            month: 1,
            day: 1,
            weekday: 5,
            hour: 0,
            minute: 0,
        };
        assert_eq!(new_year.date_label(), "viernes, 1 de enero de 2027");
    }

    #[test]
    fn out_of_range_fields_do_not_panic() {
        let odd = ClockReading {
            year: 2026,
            month: 0,
            day: 3,
            weekday: 9,
            hour: 1,
            minute: 2,
        };
        assert_eq!(odd.date_label(), ", 3 de enero de 2026");
    }
}
