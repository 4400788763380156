//! Startup configuration and persisted user preferences.

mod loader;
mod preferences;
mod storage;
mod types;

pub use loader::ConfigError;
pub use preferences::{
    keys, FontSize, PreferenceField, PreferenceHandle, PreferenceStore, PreferenceValue,
    Preferences, SettingsFieldSnapshot, Theme,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use types::{Config, SplashConfig, TransitionConfig, UiConfig};
