use gloo::timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::{self, FixedCredentials, LoginForm};
use crate::components::icon::{Icon, IconGlyph};

const SOCIAL_PROVIDERS: [&str; 3] = ["Google", "Apple", "Meta"];

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub credentials: FixedCredentials,
    pub check_delay_ms: u32,
    /// Fired once the pair has been accepted.
    pub on_login: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let form = use_state(LoginForm::default);
    let show_password = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let form = form.clone();
        let credentials = props.credentials.clone();
        let delay = props.check_delay_ms;
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let user = (*username).clone();
            let pass = (*password).clone();
            let mut next = *form;
            let started = next.begin(&user, &pass);
            form.set(next);
            if !started {
                return;
            }

            let form = form.clone();
            let credentials = credentials.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let accepted = next.finish(auth::verify(&credentials, &user, &pass));
                form.set(next);
                if accepted {
                    info!("login accepted for {user}");
                    on_login.emit(());
                } else if let Some(err) = next.error {
                    info!("login rejected: {err}");
                }
            });
        })
    };

    let social_buttons = SOCIAL_PROVIDERS.into_iter().map(|provider| {
        let onclick = Callback::from(move |_: MouseEvent| {
            info!("social login requested: {provider}");
        });
        html! {
            <button type="button" class="btn-social" {onclick}>
                { format!("Continuar con {provider}") }
            </button>
        }
    });

    let on_forgot = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-head">
                    <h1>{ "Bienvenido" }</h1>
                    <p>{ "Inicia sesión en tu cuenta para continuar" }</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <label for="username">{ "Usuario" }</label>
                    <div class="field">
                        <IconGlyph icon={Icon::User} class="field-icon" />
                        <input
                            id="username"
                            type="text"
                            placeholder="admin"
                            value={(*username).clone()}
                            oninput={on_username}
                        />
                    </div>

                    <label for="password">{ "Contraseña" }</label>
                    <div class="field">
                        <IconGlyph icon={Icon::Lock} class="field-icon" />
                        <input
                            id="password"
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="1234"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                        <button type="button" class="field-toggle" onclick={on_toggle_password}>
                            <IconGlyph icon={if *show_password { Icon::EyeOff } else { Icon::Eye }} />
                        </button>
                    </div>

                    <button type="submit" class="btn-primary" disabled={form.busy}>
                        if form.busy {
                            <IconGlyph icon={Icon::Loader} class="spin" />
                            <span>{ "Ingresando..." }</span>
                        } else {
                            { "Iniciar Sesión" }
                        }
                    </button>

                    if let Some(err) = form.error {
                        <div class="login-error" role="alert">
                            <IconGlyph icon={Icon::Alert} />
                            <span>{ err.to_string() }</span>
                        </div>
                    }
                </form>

                <div class="divider"><span>{ "O continúa con" }</span></div>

                <div class="social">
                    { for social_buttons }
                </div>

                <div class="forgot">
                    <a href="#" onclick={on_forgot}>{ "¿Olvidaste tu contraseña?" }</a>
                </div>
            </div>
        </div>
    }
}
