//! Inline stroke icons used across the landing page.

use leptos::prelude::*;

/// Icons available to [`Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Building,
    Menu,
    Close,
    LogOut,
    ChevronRight,
    ArrowRight,
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(into)] class: String) -> impl IntoView {
    let paths = match glyph {
        Glyph::Building => view! {
            <rect width="16" height="20" x="4" y="2" rx="2" ry="2"/>
            <path d="M9 22v-4h6v4"/>
            <path d="M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01"/>
        }
        .into_any(),
        Glyph::Menu => view! {
            <path d="M4 6h16M4 12h16M4 18h16"/>
        }
        .into_any(),
        Glyph::Close => view! {
            <path d="M18 6 6 18M6 6l12 12"/>
        }
        .into_any(),
        Glyph::LogOut => view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="m16 17 5-5-5-5M21 12H9"/>
        }
        .into_any(),
        Glyph::ChevronRight => view! {
            <path d="m9 18 6-6-6-6"/>
        }
        .into_any(),
        Glyph::ArrowRight => view! {
            <path d="M5 12h14M12 5l7 7-7 7"/>
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
