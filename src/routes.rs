use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AboutPage, DashboardPage, HomePage};

/// Header title for paths the router does not know.
pub const FALLBACK_TITLE: &str = "Dashboard";

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Dashboard => "Dashboard de Estadísticas",
            Route::NotFound => FALLBACK_TITLE,
        }
    }
}

// Rendered inside the shell; unknown paths bounce back to the home view.
pub fn switch(route: Route, clock_tick_ms: u32) -> Html {
    match route {
        Route::Home => html! { <HomePage tick_ms={clock_tick_ms} /> },
        Route::About => html! { <AboutPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_literal_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));

        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::About.to_path(), "/about");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    }

    #[test]
    fn unknown_paths_have_a_fallback_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::recognize("/settings"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/dashboard/extra"), Some(Route::NotFound));
    }

    #[test]
    fn titles() {
        assert_eq!(Route::Home.title(), "Home");
        assert_eq!(Route::Dashboard.title(), "Dashboard de Estadísticas");
        assert_eq!(Route::About.title(), "About");
        assert_eq!(Route::NotFound.title(), FALLBACK_TITLE);
    }
}
