//! Browser glue used by state and components.
//!
//! `mount` tracks whether a component is still alive for its spawned tasks,
//! `scroll` follows the window offset, and `storage` reads and removes the
//! persisted session record. Scroll and storage degrade to no-ops outside
//! the browser.

pub mod mount;
pub mod scroll;
pub mod storage;
