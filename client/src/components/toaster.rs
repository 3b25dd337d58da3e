//! Renders the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast border-green-700 bg-green-950 text-green-100",
        ToastKind::Error => "toast border-red-700 bg-red-950 text-red-100",
    }
}

/// Bottom-right stack of the most recent toasts. Mount once, near the root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="fixed bottom-4 right-4 z-[100] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.with(|state| state.visible().to_vec())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let role = match toast.kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    };

    view! {
        <li
            class=format!(
                "{} flex items-center justify-between gap-4 min-w-64 rounded-md border px-4 py-3 shadow-lg",
                toast_class(toast.kind),
            )
            role=role
        >
            <span class="text-sm">{toast.message}</span>
            <button
                class="text-xs opacity-70 hover:opacity-100"
                aria-label="Cerrar"
                on:click=move |_| toasts.update(|state| state.dismiss(id))
            >
                "✕"
            </button>
        </li>
    }
}
