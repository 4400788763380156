use crate::config::SettingsFieldSnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    Load { fields: Vec<SettingsFieldSnapshot> },
    Close,
    MoveUp,
    MoveDown,
    /// Flip the focused flag, or advance the focused choice.
    Toggle,
}

impl Intent for SettingsIntent {}
