//! User preferences with load-on-init and write-through persistence.
//!
//! The store is constructed explicitly and handed to the intro sequencer and
//! the page controller through a [`PreferenceHandle`]. Both machines only
//! read `reduce_motion`; writes come from the settings panel.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::storage::{KeyValueStorage, MemoryStorage};

/// Persistence keys. Once published, do not rename.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const CURSOR_GLOW: &str = "cursorGlow";
    pub const SHOW_SHOOTING_STARS: &str = "showShootingStars";
    pub const FONT_SIZE: &str = "fontSize";
    pub const HIGH_CONTRAST: &str = "highContrast";
    pub const SHOW_BACKGROUND: &str = "showBackground";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    /// Next size in the settings cycle (wraps from large to small).
    pub fn cycled(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large => Self::Small,
        }
    }
}

/// Current preference values.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    /// Session-only; seeded from the system signal, never persisted.
    pub reduce_motion: bool,
    pub cursor_glow: bool,
    pub show_shooting_stars: bool,
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub show_background: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            reduce_motion: false,
            cursor_glow: true,
            show_shooting_stars: true,
            font_size: FontSize::Medium,
            high_contrast: false,
            show_background: true,
        }
    }
}

/// Identifier for each user-facing preference, in settings panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    Theme,
    ReduceMotion,
    CursorGlow,
    ShootingStars,
    Background,
    FontSize,
    HighContrast,
}

impl PreferenceField {
    pub fn all() -> &'static [PreferenceField] {
        &[
            Self::Theme,
            Self::ReduceMotion,
            Self::CursorGlow,
            Self::ShootingStars,
            Self::Background,
            Self::FontSize,
            Self::HighContrast,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::ReduceMotion => "Reduce Motion",
            Self::CursorGlow => "Cursor Glow",
            Self::ShootingStars => "Shooting Stars",
            Self::Background => "Background Effects",
            Self::FontSize => "Font Size",
            Self::HighContrast => "High Contrast",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Theme => "Switch between dark and light mode",
            Self::ReduceMotion => "Disable animations for accessibility",
            Self::CursorGlow => "Glass lens effect following cursor",
            Self::ShootingStars => "Animated stars in dark mode",
            Self::Background => "Animated gradient background",
            Self::FontSize => "Adjust text size for readability",
            Self::HighContrast => "Increase text visibility",
        }
    }
}

/// Value of a single preference as shown in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    Flag(bool),
    Theme(Theme),
    FontSize(FontSize),
}

impl PreferenceValue {
    /// Value after one toggle: flags flip, enums advance.
    pub fn toggled(self) -> Self {
        match self {
            Self::Flag(value) => Self::Flag(!value),
            Self::Theme(theme) => Self::Theme(theme.toggled()),
            Self::FontSize(size) => Self::FontSize(size.cycled()),
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Flag(true) => "on",
            Self::Flag(false) => "off",
            Self::Theme(theme) => theme.as_str(),
            Self::FontSize(size) => size.as_str(),
        }
    }
}

/// UI-friendly snapshot of a single preference (used in MVI state).
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFieldSnapshot {
    pub field: PreferenceField,
    pub label: &'static str,
    pub description: &'static str,
    pub value: PreferenceValue,
}

/// Preference values plus the storage they are written through to.
pub struct PreferenceStore {
    prefs: Preferences,
    storage: Box<dyn KeyValueStorage>,
}

impl PreferenceStore {
    /// Create a store with default values. Call [`initialize`](Self::initialize)
    /// to load persisted values.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            prefs: Preferences::default(),
            storage,
        }
    }

    /// Store backed by volatile memory.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Seed `reduce_motion` from the system signal and load persisted values.
    ///
    /// Absent keys keep their defaults. Values that fail to parse are treated
    /// as absent.
    pub fn initialize(&mut self, prefers_reduced_motion: bool) {
        let mut prefs = Preferences {
            reduce_motion: prefers_reduced_motion,
            ..Preferences::default()
        };

        let storage = self.storage.as_ref();
        if let Some(theme) = load(storage, keys::THEME, Theme::parse) {
            prefs.theme = theme;
        }
        if let Some(value) = load(storage, keys::CURSOR_GLOW, parse_bool) {
            prefs.cursor_glow = value;
        }
        if let Some(value) = load(storage, keys::SHOW_SHOOTING_STARS, parse_bool) {
            prefs.show_shooting_stars = value;
        }
        if let Some(size) = load(storage, keys::FONT_SIZE, FontSize::parse) {
            prefs.font_size = size;
        }
        if let Some(value) = load(storage, keys::HIGH_CONTRAST, parse_bool) {
            prefs.high_contrast = value;
        }
        if let Some(value) = load(storage, keys::SHOW_BACKGROUND, parse_bool) {
            prefs.show_background = value;
        }

        tracing::debug!(?prefs, "Preferences initialized");
        self.prefs = prefs;
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn reduce_motion(&self) -> bool {
        self.prefs.reduce_motion
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.prefs.theme = theme;
        self.persist(keys::THEME, theme.as_str());
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.prefs.theme.toggled());
    }

    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        self.prefs.reduce_motion = reduce_motion;
    }

    pub fn set_cursor_glow(&mut self, value: bool) {
        self.prefs.cursor_glow = value;
        self.persist(keys::CURSOR_GLOW, bool_str(value));
    }

    pub fn set_show_shooting_stars(&mut self, value: bool) {
        self.prefs.show_shooting_stars = value;
        self.persist(keys::SHOW_SHOOTING_STARS, bool_str(value));
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.prefs.font_size = size;
        self.persist(keys::FONT_SIZE, size.as_str());
    }

    pub fn set_high_contrast(&mut self, value: bool) {
        self.prefs.high_contrast = value;
        self.persist(keys::HIGH_CONTRAST, bool_str(value));
    }

    pub fn set_show_background(&mut self, value: bool) {
        self.prefs.show_background = value;
        self.persist(keys::SHOW_BACKGROUND, bool_str(value));
    }

    /// Current value of `field`.
    pub fn value(&self, field: PreferenceField) -> PreferenceValue {
        let prefs = &self.prefs;
        match field {
            PreferenceField::Theme => PreferenceValue::Theme(prefs.theme),
            PreferenceField::ReduceMotion => PreferenceValue::Flag(prefs.reduce_motion),
            PreferenceField::CursorGlow => PreferenceValue::Flag(prefs.cursor_glow),
            PreferenceField::ShootingStars => PreferenceValue::Flag(prefs.show_shooting_stars),
            PreferenceField::Background => PreferenceValue::Flag(prefs.show_background),
            PreferenceField::FontSize => PreferenceValue::FontSize(prefs.font_size),
            PreferenceField::HighContrast => PreferenceValue::Flag(prefs.high_contrast),
        }
    }

    /// Route a value to its setter. Mismatched field/value pairs are ignored.
    pub fn apply(&mut self, field: PreferenceField, value: PreferenceValue) {
        match (field, value) {
            (PreferenceField::Theme, PreferenceValue::Theme(theme)) => self.set_theme(theme),
            (PreferenceField::FontSize, PreferenceValue::FontSize(size)) => {
                self.set_font_size(size)
            }
            (PreferenceField::ReduceMotion, PreferenceValue::Flag(v)) => self.set_reduce_motion(v),
            (PreferenceField::CursorGlow, PreferenceValue::Flag(v)) => self.set_cursor_glow(v),
            (PreferenceField::ShootingStars, PreferenceValue::Flag(v)) => {
                self.set_show_shooting_stars(v)
            }
            (PreferenceField::Background, PreferenceValue::Flag(v)) => self.set_show_background(v),
            (PreferenceField::HighContrast, PreferenceValue::Flag(v)) => self.set_high_contrast(v),
            (field, value) => {
                debug_assert!(false, "value {value:?} does not fit {field:?}");
            }
        }
    }

    /// Create UI snapshots from current values (for `SettingsIntent::Load`).
    pub fn to_snapshots(&self) -> Vec<SettingsFieldSnapshot> {
        PreferenceField::all()
            .iter()
            .map(|&field| SettingsFieldSnapshot {
                field,
                label: field.label(),
                description: field.description(),
                value: self.value(field),
            })
            .collect()
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            tracing::warn!(key, "Preference not persisted: {}", err);
        }
    }
}

/// Shared, cloneable access to a [`PreferenceStore`].
#[derive(Clone)]
pub struct PreferenceHandle {
    inner: Arc<RwLock<PreferenceStore>>,
}

impl PreferenceHandle {
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Handle over a fresh in-memory store with the given motion setting.
    pub fn in_memory(reduce_motion: bool) -> Self {
        let mut store = PreferenceStore::in_memory();
        store.initialize(reduce_motion);
        Self::new(store)
    }

    pub fn reduce_motion(&self) -> bool {
        self.inner.read().reduce_motion()
    }

    /// Snapshot of the current values.
    pub fn get(&self) -> Preferences {
        self.inner.read().preferences().clone()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, PreferenceStore> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, PreferenceStore> {
        self.inner.write()
    }
}

fn load<T>(
    storage: &dyn KeyValueStorage,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = storage.get(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "Ignoring corrupt preference");
    }
    parsed
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
