use crate::config::SettingsFieldSnapshot;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsPanelState {
    #[default]
    Hidden,
    Visible {
        fields: Vec<SettingsFieldSnapshot>,
        focused: usize,
    },
}

impl UiState for SettingsPanelState {}

impl SettingsPanelState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The field under the cursor, if the panel is open.
    pub fn focused_field(&self) -> Option<&SettingsFieldSnapshot> {
        match self {
            Self::Visible { fields, focused } => fields.get(*focused),
            Self::Hidden => None,
        }
    }
}
