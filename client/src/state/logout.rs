//! Logout coordination between the API, the session store and the toaster.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoked from the header's logout controls as a spawned local task. One
//! call sends exactly one request; there is no retry and no deduplication of
//! rapid repeated clicks.
//!
//! The session is cleared only after the server confirms. A failure leaves it
//! untouched and surfaces either the server's message or a generic one. If
//! the header was torn down while the request was in flight the outcome is
//! dropped.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::future::Future;

use crate::net::api::{ApiClient, LogoutError};
use crate::state::session::SessionSink;
use crate::state::toast::Notify;
use crate::util::mount::MountGuard;

/// Shown after the server confirms the logout.
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Sesión cerrada exitosamente";

/// Remote side of the logout operation.
pub trait LogoutApi {
    fn logout(&self) -> impl Future<Output = Result<(), LogoutError>>;
}

impl LogoutApi for ApiClient {
    fn logout(&self) -> impl Future<Output = Result<(), LogoutError>> {
        ApiClient::logout(self)
    }
}

/// End the session: one request, then reconcile local state with the result.
pub async fn request_logout<A, S, N>(api: &A, store: &S, notifier: &N, mounted: &MountGuard)
where
    A: LogoutApi,
    S: SessionSink,
    N: Notify,
{
    let outcome = api.logout().await;

    if !mounted.is_mounted() {
        leptos::logging::log!("logout settled after header teardown; ignoring outcome");
        return;
    }

    match outcome {
        Ok(()) => {
            store.clear_session();
            notifier.success(LOGOUT_SUCCESS_MESSAGE);
        }
        Err(e) => {
            leptos::logging::warn!("logout failed: {e}");
            notifier.error(e.user_message());
        }
    }
}
