//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes `components`; route-scoped orchestration lives here.

pub mod home;
