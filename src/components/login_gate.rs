use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::login::LoginView;
use crate::components::shell::Shell;
use crate::config::AppConfig;
use crate::gate::GateState;
use crate::routes::{switch, Route};
use crate::session::{BrowserStorage, SessionStore};

#[derive(Properties, PartialEq)]
pub struct LoginGateProps {
    pub config: Rc<AppConfig>,
}

/// Root layout: the login form while logged out, the shell + routed page
/// while logged in.
#[function_component(LoginGate)]
pub fn login_gate(props: &LoginGateProps) -> Html {
    let store = SessionStore::new(BrowserStorage, props.config.storage_key.clone());
    let state = {
        let store = store.clone();
        use_state(move || GateState::restore(&store))
    };

    let on_login = {
        let state = state.clone();
        let store = store.clone();
        Callback::from(move |()| state.set(state.login(&store)))
    };

    let on_logout = {
        let state = state.clone();
        Callback::from(move |()| state.set(state.logout(&store)))
    };

    let tick_ms = props.config.clock_tick_ms;

    match *state {
        GateState::LoggedOut => html! {
            <LoginView
                credentials={props.config.credentials.clone()}
                check_delay_ms={props.config.check_delay_ms}
                {on_login}
            />
        },
        GateState::LoggedIn => html! {
            <Shell
                brand_initials={props.config.brand_initials.clone()}
                brand_name={props.config.brand_name.clone()}
                on_logout={Some(on_logout)}
            >
                <Switch<Route> render={move |route: Route| switch(route, tick_ms)} />
            </Shell>
        },
    }
}
