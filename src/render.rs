//! Rendering subsystem.
//!
//! Everything that turns the visible records into pixels on the terminal lives under
//! [`ui`].

pub mod ui;

pub use ui::{ColorTheme, TerminalUI, UIRenderer, ViewState};
