use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::nav::{self, SidebarState};
use crate::routes::{Route, FALLBACK_TITLE};

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub brand_initials: AttrValue,
    pub brand_name: AttrValue,
    /// No logout button when absent.
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let sidebar = use_state(SidebarState::default);
    let query = use_state(String::new);
    let route = use_route::<Route>();

    let expanded = sidebar.expanded();
    let title = route.as_ref().map_or(FALLBACK_TITLE, Route::title);

    let on_enter = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.set(sidebar.with_hover(true)))
    };
    let on_leave = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.set(sidebar.with_hover(false)))
    };
    let on_pin = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| sidebar.set(sidebar.toggle_pin()))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let fade = if expanded { "reveal" } else { "reveal hidden" };

    let entries = nav::filter_entries(&query).into_iter().map(|entry| {
        let active = entry.is_active(route.as_ref());
        html! {
            <Link<Route>
                to={entry.route.clone()}
                classes={classes!("nav-link", active.then_some("active"))}
            >
                <IconGlyph icon={entry.icon} class="nav-icon" />
                <span class={fade}>{ entry.label }</span>
            </Link<Route>>
        }
    });

    let logout = props.on_logout.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
        html! {
            <div class="sidebar-foot">
                <button class="nav-link logout" {onclick}>
                    <IconGlyph icon={Icon::LogOut} class="nav-icon" />
                    <span class={fade}>{ "Logout" }</span>
                </button>
            </div>
        }
    });

    html! {
        <div class="shell">
            <aside
                class={classes!("sidebar", if expanded { "expanded" } else { "collapsed" })}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <div class="brand">
                    <div class="brand-mark">{ props.brand_initials.clone() }</div>
                    <span class={fade}>{ props.brand_name.clone() }</span>
                </div>

                <button
                    class={classes!("pin", sidebar.pinned.then_some("pinned"))}
                    title={if sidebar.pinned { "Desanclar" } else { "Anclar" }}
                    onclick={on_pin}
                >
                    <IconGlyph icon={if sidebar.pinned { Icon::PanelClose } else { Icon::PanelOpen }} />
                </button>

                if expanded {
                    <div class="search">
                        <IconGlyph icon={Icon::Search} class="field-icon" />
                        <input
                            type="text"
                            placeholder="Search..."
                            value={(*query).clone()}
                            oninput={on_search}
                        />
                    </div>
                }

                <nav class="nav">
                    { for entries }
                </nav>

                { logout.unwrap_or_default() }
            </aside>

            <div class="main">
                <header class="topbar">
                    <h1>{ title }</h1>
                    <div class="topbar-actions">
                        <button class="icon-btn" title="Notificaciones">
                            <IconGlyph icon={Icon::Bell} />
                        </button>
                        <div class="avatar"></div>
                    </div>
                </header>
                <main class="content">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
