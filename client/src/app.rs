//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::{API_URL_META, ApiConfig};
use crate::pages::home::HomePage;
use crate::state::session::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the API base URL so the hydrated client talks to the same service
/// the server was configured with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api = ApiConfig::resolve();

    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api.base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast and API contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(ApiConfig::resolve());

    // The server always renders anonymous; apply the stored session once
    // running in the browser.
    Effect::new(move || {
        let persisted = AuthState::load_persisted();
        if persisted.session.is_some() {
            auth.set(persisted);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ipce.css"/>
        <Title text="IPCE | Gestión de Edificios"/>
        <Meta
            name="description"
            content="El sistema de gestión de edificios más avanzado para las necesidades de infraestructura moderna."
        />

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
