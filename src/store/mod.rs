//! State containers consumed by the presentation layer.
//!
//! - [`DocumentStore`]: the resume document and style, persisted on change
//! - [`AppPreferences`]: ephemeral editor flags

mod advisory;
mod document;
mod preferences;

pub use advisory::{Advisory, LogNotifier, Notifier, RecordingNotifier};
pub use document::DocumentStore;
pub use preferences::{AppPreferences, DEFAULT_THEME_COLOR};
