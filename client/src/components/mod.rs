//! UI components composed by the landing page.
//!
//! ARCHITECTURE
//! ============
//! `site_header` owns the only interactive logic (session actions, scroll
//! density, mobile menu). The remaining sections are static markup.

pub mod feature_grid;
pub mod hero;
pub mod icon;
pub mod site_footer;
pub mod site_header;
pub mod toaster;
pub mod user_badge;
