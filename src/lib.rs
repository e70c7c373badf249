//! Resumake core library
//!
//! Document model and state store for a block-based resume editor.

pub mod config;
pub mod id;
pub mod models;
pub mod persist;
pub mod storage;
pub mod store;
pub mod template;

pub use config::{Config, ConfigError, ConfigSource, ConfigValue};
pub use id::generate_random_id;
pub use models::{
    Block, BlockData, BlockDataPatch, ContentBlock, ContentItem, ContentItemPatch, InfoBlock,
    InfoData, InfoDataPatch, InfoItem, InfoItemPatch, ResumeState, ResumeStyle, StyleEntry,
    TemplateType, TextPatch, TextProps, TitleStyle,
};
pub use persist::{PersistError, PersistedState, STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{
    Advisory, AppPreferences, DocumentStore, LogNotifier, Notifier, RecordingNotifier,
};
pub use template::template_state;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
