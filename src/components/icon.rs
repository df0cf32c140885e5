use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    BarChart,
    Info,
    LogOut,
    Bell,
    Search,
    PanelClose,
    PanelOpen,
    User,
    Lock,
    Eye,
    EyeOff,
    Loader,
    Alert,
    Book,
    Users,
    TrendingUp,
    Calendar,
    Dollar,
    Cart,
    Return,
    Clock,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::BarChart => "📊",
            Icon::Info => "ℹ",
            Icon::LogOut => "⎋",
            Icon::Bell => "🔔",
            Icon::Search => "🔍",
            Icon::PanelClose => "«",
            Icon::PanelOpen => "»",
            Icon::User => "👤",
            Icon::Lock => "🔒",
            Icon::Eye => "👁",
            Icon::EyeOff => "🙈",
            Icon::Loader => "⟳",
            Icon::Alert => "⚠",
            Icon::Book => "📚",
            Icon::Users => "👥",
            Icon::TrendingUp => "📈",
            Icon::Calendar => "📅",
            Icon::Dollar => "💲",
            Icon::Cart => "🛒",
            Icon::Return => "↺",
            Icon::Clock => "🕒",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            { props.icon.glyph() }
        </span>
    }
}
