//! Fixed site header with session-aware actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session from context and renders either sign-in actions or the
//! signed-in user's badge, dashboard link and logout control. The header
//! compacts once the window scrolls past the threshold, and on narrow
//! screens the same actions move into a toggled vertical panel.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};
use crate::components::user_badge::UserBadge;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::state::header::HeaderState;
use crate::state::logout::request_logout;
use crate::state::session::{AuthState, SessionSource, SessionView};
use crate::state::toast::ToastState;
use crate::util::mount::MountGuard;
use crate::util::scroll;

/// Served outside this app; links to these use `rel="external"` so the
/// router hands them to the browser.
pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// In-page anchors, shared by the desktop bar and the mobile panel.
pub const NAV_ANCHORS: [(&str, &str); 3] = [
    ("#features", "Características"),
    ("#about", "Acerca de"),
    ("#contact", "Contacto"),
];

/// Where the header sits; only affects layout classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Desktop,
    Mobile,
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiClient::new(expect_context::<ApiConfig>());
    let header = RwSignal::new(HeaderState::default());

    let mounted = MountGuard::new();
    {
        let mounted = mounted.clone();
        on_cleanup(move || mounted.release());
    }

    // Pick up an offset restored by the browser before the first scroll event.
    Effect::new(move || {
        header.maybe_update(|h| h.observe_scroll(scroll::scroll_y()));
    });
    scroll::on_window_scroll(move |offset| {
        header.maybe_update(|h| h.observe_scroll(offset));
    });

    let on_logout = Callback::new(move |()| {
        let api = api.clone();
        let mounted = mounted.clone();
        leptos::task::spawn_local(async move {
            request_logout(&api, &auth, &toasts, &mounted).await;
        });
    });

    view! {
        <header class=move || header.get().header_class()>
            <div class="w-[90%] max-w-7xl mx-auto flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <Icon glyph=Glyph::Building class="w-8 h-8 text-blue-400"/>
                    <h1 class="text-3xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 to-blue-600">
                        "IPCE"
                    </h1>
                </a>

                <div class="hidden md:flex items-center gap-8">
                    <nav>
                        <ul class="flex gap-6">
                            {NAV_ANCHORS
                                .iter()
                                .map(|(href, label)| view! {
                                    <li>
                                        <a href=*href class="font-medium text-blue-100 hover:text-blue-400 transition-colors">
                                            {*label}
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <SessionActions placement=Placement::Desktop on_logout=on_logout/>
                </div>

                <button
                    class="md:hidden block text-gray-300"
                    aria-label="Abrir menú"
                    aria-expanded=move || header.get().menu_open.to_string()
                    on:click=move |_| header.update(HeaderState::toggle_menu)
                >
                    {move || {
                        let glyph = if header.get().menu_open { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph=glyph class="w-6 h-6"/> }
                    }}
                </button>
            </div>

            <Show when=move || header.get().menu_open>
                <div class="md:hidden bg-gray-800 absolute w-full shadow-lg">
                    <div class="w-[90%] mx-auto py-4">
                        <nav class="mb-6">
                            <ul class="flex flex-col gap-4">
                                {NAV_ANCHORS
                                    .iter()
                                    .map(|(href, label)| view! {
                                        <li>
                                            <a href=*href class="font-medium text-blue-100 block py-2">{*label}</a>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </nav>
                        <SessionActions placement=Placement::Mobile on_logout=on_logout/>
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// Sign-in links for anonymous visitors, account controls otherwise.
#[component]
fn SessionActions(placement: Placement, on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match SessionView::from(auth.current_session()) {
        SessionView::Anonymous => view! { <SignInLinks placement=placement/> }.into_any(),
        SessionView::Authenticated(session) => match placement {
            Placement::Desktop => view! {
                <div class="flex items-center gap-4">
                    <UserBadge session=session/>
                    <a
                        href=DASHBOARD_PATH
                        rel="external"
                        class="cursor-pointer bg-gradient-to-r from-blue-500 to-blue-700 hover:from-blue-600 \
                               hover:to-blue-800 transition-all duration-300 rounded-md flex items-center gap-1 \
                               px-4 py-2 shadow-md hover:shadow-lg"
                    >
                        "Panel"
                        <Icon glyph=Glyph::ChevronRight class="w-4 h-4"/>
                    </a>
                    <button
                        class="cursor-pointer p-2 rounded-md text-gray-400 hover:text-red-400 hover:bg-red-900/20 transition-colors"
                        title="Cerrar Sesión"
                        aria-label="Cerrar Sesión"
                        on:click=move |_| on_logout.run(())
                    >
                        <Icon glyph=Glyph::LogOut class="w-5 h-5"/>
                    </button>
                </div>
            }
            .into_any(),
            Placement::Mobile => view! {
                <div class="flex flex-col gap-4">
                    <div class="py-2">
                        <UserBadge session=session plain=true/>
                    </div>
                    <a
                        href=DASHBOARD_PATH
                        rel="external"
                        class="w-full text-center cursor-pointer bg-gradient-to-r from-blue-500 to-blue-700 \
                               hover:from-blue-600 hover:to-blue-800 transition-all duration-300 rounded-md py-2"
                    >
                        "Panel"
                    </a>
                    <button
                        class="w-full flex items-center justify-center cursor-pointer rounded-md border border-red-900 \
                               text-red-400 hover:bg-red-900/20 transition-colors py-2"
                        on:click=move |_| on_logout.run(())
                    >
                        <Icon glyph=Glyph::LogOut class="w-5 h-5 mr-2"/>
                        "Cerrar Sesión"
                    </button>
                </div>
            }
            .into_any(),
        },
    }
}

#[component]
fn SignInLinks(placement: Placement) -> impl IntoView {
    let (wrapper, width) = match placement {
        Placement::Desktop => ("flex items-center gap-3", "px-6"),
        Placement::Mobile => ("flex flex-col gap-3", "w-full text-center"),
    };

    view! {
        <div class=wrapper>
            <a
                href=LOGIN_PATH
                rel="external"
                class=format!(
                    "{width} py-2 cursor-pointer border-2 border-blue-400 text-blue-400 hover:bg-blue-900/30 \
                     transition-all duration-300 rounded-md",
                )
            >
                "Iniciar Sesión"
            </a>
            <a
                href=SIGNUP_PATH
                rel="external"
                class=format!(
                    "{width} py-2 cursor-pointer bg-gradient-to-r from-blue-500 to-blue-700 hover:from-blue-600 \
                     hover:to-blue-800 transition-all duration-300 rounded-md shadow-md hover:shadow-lg",
                )
            >
                "Registrarse"
            </a>
        </div>
    }
}
