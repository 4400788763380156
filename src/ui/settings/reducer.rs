use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::SettingsPanelState;

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsPanelState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Load { fields } => {
                // Reloading an open panel keeps the cursor where it was.
                let focused = match state {
                    SettingsPanelState::Visible { focused, .. } => {
                        focused.min(fields.len().saturating_sub(1))
                    }
                    SettingsPanelState::Hidden => 0,
                };
                SettingsPanelState::Visible { fields, focused }
            }
            SettingsIntent::Close => SettingsPanelState::Hidden,
            SettingsIntent::MoveUp => match state {
                SettingsPanelState::Visible { fields, focused } => {
                    let new_focused = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    SettingsPanelState::Visible {
                        fields,
                        focused: new_focused,
                    }
                }
                other => other,
            },
            SettingsIntent::MoveDown => match state {
                SettingsPanelState::Visible { fields, focused } => {
                    let new_focused = if focused + 1 >= fields.len() {
                        0
                    } else {
                        focused + 1
                    };
                    SettingsPanelState::Visible {
                        fields,
                        focused: new_focused,
                    }
                }
                other => other,
            },
            SettingsIntent::Toggle => match state {
                SettingsPanelState::Visible {
                    mut fields,
                    focused,
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        field.value = field.value.toggled();
                    }
                    SettingsPanelState::Visible { fields, focused }
                }
                other => other,
            },
        }
    }
}
