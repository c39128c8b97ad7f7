//! # rowfilter - Terminal Table with Live Filtering
//!
//! Renders a list of user records (name, age, email) as a terminal table and narrows
//! the visible rows as the user types into per-column filters or a global search box.
//!
//! ## Architecture
//!
//! - [`filter`] - Pure matching rules for text, age and global criteria
//! - [`view`] - View controller owning the records and the filter state
//! - [`records`] - Record type, sample data and record files
//! - [`input`] - Terminal event collection and the filter-editing state machine
//! - [`render::ui`](crate::render::ui) - Terminal user interface components
//! - [`app`] - Application loop coordinating input, view and renderer
//! - [`config`] - Runtime configuration
//! - [`error`] - Centralized error types and handling

// Core modules
pub mod error;
pub mod filter;
pub mod records;
pub mod view;

// Collaborators around the core
pub mod config;
pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, RowFilterError};

pub use app::Application;
pub use filter::{matches, FilterField, FilterState};
pub use records::Record;
pub use view::{RowSink, TableView, ViewMode};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
