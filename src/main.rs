//! Mundo Escolar admin front end.
//!
//! Login screen, navigation shell, daily home view and a statistics dashboard,
//! all on mock data. The only state that outlives a page load is the
//! logged-in flag in localStorage.

use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod clock;
mod components;
mod config;
mod data;
mod gate;
mod nav;
mod pages;
mod routes;
mod session;

use components::LoginGate;
use config::AppConfig;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());

    html! {
        <BrowserRouter>
            <LoginGate {config} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<App>::new().render();
}
