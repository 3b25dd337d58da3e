//! Avatar, username and verification indicator for a signed-in user.

use leptos::prelude::*;

use crate::state::session::{Session, Verification, avatar_initial};

/// Identity block shown in the header when a session is present.
///
/// `plain` drops the colored status dot, as used in the stacked mobile panel.
#[component]
pub fn UserBadge(session: Session, #[prop(optional)] plain: bool) -> impl IntoView {
    let verification = Verification::from(session.is_verified);
    let initial = avatar_initial(&session.username);

    let status = if plain {
        view! { <span class="text-xs text-gray-400">{verification.label()}</span> }.into_any()
    } else {
        view! {
            <span class="text-xs text-gray-400">
                <span class=format!("flex items-center {}", verification.tone_class())>
                    <span class=format!("w-2 h-2 rounded-full mr-1 {}", verification.dot_class())></span>
                    {verification.label()}
                </span>
            </span>
        }
        .into_any()
    };

    view! {
        <div class="flex items-center gap-2" data-verified=session.is_verified.to_string()>
            <span
                class="flex items-center justify-center w-10 h-10 rounded-full cursor-pointer border-2 border-blue-900 \
                       font-bold uppercase bg-gradient-to-br from-blue-500 to-blue-700 text-white"
                title=session.username.clone()
            >
                {initial}
            </span>
            <div class="flex flex-col">
                <span class="text-sm font-medium">{session.username}</span>
                {status}
            </div>
        </div>
    }
}
