//! Remote API location shared by the server shell and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server knows `API_URL` from its environment. It provides the value as
//! context during SSR and the shell embeds it in a `<meta>` tag, which the
//! browser reads back after hydration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

/// `<meta name=..>` carrying the API base URL into the browser.
pub const API_URL_META: &str = "ipce-api-url";

/// Base URL used when nothing else is configured (same origin).
pub const DEFAULT_API_URL: &str = "/api";

/// Location of the remote user API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Read the base URL embedded by the server shell.
    ///
    /// Falls back to [`DEFAULT_API_URL`] outside the browser or when the tag
    /// is missing.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{API_URL_META}\"]"))
                        .ok()
                        .flatten()
                })
                .and_then(|el| el.get_attribute("content"))
                .filter(|url| !url.trim().is_empty());
            if let Some(url) = content {
                return Self::new(url);
            }
        }
        Self::default()
    }

    /// Context value when present (SSR), otherwise the document meta tag.
    pub fn resolve() -> Self {
        use_context::<Self>().unwrap_or_else(Self::from_document)
    }
}
