//! Input subsystem.
//!
//! `raw` turns crossterm events into coalesced primitive events; `service` runs the
//! filter-editing state machine on top of them.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use raw::ScrollDirection;
pub use service::{spawn_input_thread, InputAction, InputService, InputStateMachine};
