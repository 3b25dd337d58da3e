//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `header`, `toast`) so components
//! depend on small focused models. `logout` coordinates the three through
//! capability traits rather than concrete signals.

pub mod header;
pub mod logout;
pub mod session;
pub mod toast;
