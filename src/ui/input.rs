use crate::ui::app::App;
use crate::ui::nav::PageId;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent, now_ms: u64) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.request_quit();
        return;
    }

    if !app.splash_done() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.dismiss_splash(now_ms),
            KeyCode::Down | KeyCode::PageDown => app.scroll_splash(1.0, now_ms),
            KeyCode::Up | KeyCode::PageUp => app.scroll_splash(-1.0, now_ms),
            _ => {}
        }
        return;
    }

    if app.settings().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => app.close_settings(),
            KeyCode::Up | KeyCode::Char('k') => app.settings_move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.settings_move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.settings_toggle(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            if let Some(page) = PageId::from_index(index) {
                app.navigate(page, now_ms);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => app.next_page(now_ms),
        KeyCode::Left | KeyCode::Char('h') => app.previous_page(now_ms),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_page(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(10),
        KeyCode::PageUp => app.scroll_page(-10),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now_ms: u64) {
    let splash = !app.splash_done();
    match mouse.kind {
        MouseEventKind::ScrollDown if splash => app.scroll_splash(1.0, now_ms),
        MouseEventKind::ScrollUp if splash => app.scroll_splash(-1.0, now_ms),
        MouseEventKind::Down(MouseButton::Left) if splash => app.dismiss_splash(now_ms),
        MouseEventKind::ScrollDown if !app.settings().is_visible() => app.scroll_page(3),
        MouseEventKind::ScrollUp if !app.settings().is_visible() => app.scroll_page(-3),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
