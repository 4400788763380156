mod common;

use folio::config::{
    FontSize, PreferenceField, PreferenceStore, PreferenceValue, SettingsFieldSnapshot, Theme,
};
use folio::ui::mvi::Reducer;
use folio::ui::settings::{SettingsIntent, SettingsPanelState, SettingsReducer};

fn make_fields() -> Vec<SettingsFieldSnapshot> {
    PreferenceStore::in_memory().to_snapshots()
}

fn make_visible(focused: usize) -> SettingsPanelState {
    SettingsPanelState::Visible {
        fields: make_fields(),
        focused,
    }
}

fn focused(state: &SettingsPanelState) -> usize {
    match state {
        SettingsPanelState::Visible { focused, .. } => *focused,
        SettingsPanelState::Hidden => panic!("panel is hidden"),
    }
}

#[test]
fn load_shows_panel_focused_on_first_field() {
    let state = SettingsReducer::reduce(
        SettingsPanelState::Hidden,
        SettingsIntent::Load {
            fields: make_fields(),
        },
    );
    assert!(state.is_visible());
    assert_eq!(focused(&state), 0);
    assert_eq!(
        state.focused_field().map(|field| field.field),
        Some(PreferenceField::Theme)
    );
}

#[test]
fn reload_keeps_focus() {
    let state = SettingsReducer::reduce(
        make_visible(4),
        SettingsIntent::Load {
            fields: make_fields(),
        },
    );
    assert_eq!(focused(&state), 4);
}

#[test]
fn reload_with_fewer_fields_clamps_focus() {
    let mut fields = make_fields();
    fields.truncate(2);
    let state = SettingsReducer::reduce(make_visible(5), SettingsIntent::Load { fields });
    assert_eq!(focused(&state), 1);
}

#[test]
fn close_hides_panel() {
    let state = SettingsReducer::reduce(make_visible(2), SettingsIntent::Close);
    assert_eq!(state, SettingsPanelState::Hidden);
}

#[test]
fn move_up_wraps_to_last() {
    let last = make_fields().len() - 1;
    let state = SettingsReducer::reduce(make_visible(0), SettingsIntent::MoveUp);
    assert_eq!(focused(&state), last);
}

#[test]
fn move_down_wraps_to_first() {
    let last = make_fields().len() - 1;
    let state = SettingsReducer::reduce(make_visible(last), SettingsIntent::MoveDown);
    assert_eq!(focused(&state), 0);

    let state = SettingsReducer::reduce(state, SettingsIntent::MoveDown);
    assert_eq!(focused(&state), 1);
}

#[test]
fn toggle_flips_flags() {
    let index = PreferenceField::all()
        .iter()
        .position(|field| *field == PreferenceField::HighContrast)
        .unwrap();
    let state = SettingsReducer::reduce(make_visible(index), SettingsIntent::Toggle);
    assert_eq!(
        state.focused_field().map(|field| field.value),
        Some(PreferenceValue::Flag(true))
    );
}

#[test]
fn toggle_cycles_enums() {
    let state = SettingsReducer::reduce(make_visible(0), SettingsIntent::Toggle);
    assert_eq!(
        state.focused_field().map(|field| field.value),
        Some(PreferenceValue::Theme(Theme::Light))
    );

    let index = PreferenceField::all()
        .iter()
        .position(|field| *field == PreferenceField::FontSize)
        .unwrap();
    let mut state = make_visible(index);
    let mut seen = Vec::new();
    for _ in 0..3 {
        state = SettingsReducer::reduce(state, SettingsIntent::Toggle);
        if let Some(PreferenceValue::FontSize(size)) = state.focused_field().map(|f| f.value) {
            seen.push(size);
        }
    }
    assert_eq!(seen, vec![FontSize::Large, FontSize::Small, FontSize::Medium]);
}

#[test]
fn hidden_panel_ignores_navigation() {
    for intent in [
        SettingsIntent::MoveUp,
        SettingsIntent::MoveDown,
        SettingsIntent::Toggle,
    ] {
        let state = SettingsReducer::reduce(SettingsPanelState::Hidden, intent);
        assert_eq!(state, SettingsPanelState::Hidden);
    }
}
