use ratatui::style::Color;

use crate::config::{Preferences, Theme};

pub const ACCENT: Color = Color::Rgb(0x7c, 0x9c, 0xff);
pub const ACCENT_LIGHT: Color = Color::Rgb(0x3b, 0x5b, 0xdb);
pub const SCRAMBLE: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Colors used by every widget, resolved once per frame from preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub scramble: Color,
}

const DARK: Palette = Palette {
    background: Color::Rgb(0x0f, 0x11, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    accent: ACCENT,
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
    scramble: SCRAMBLE,
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xf9, 0xfb),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x4b, 0x55, 0x63),
    accent: ACCENT_LIGHT,
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
    scramble: SCRAMBLE,
};

impl Palette {
    pub fn for_preferences(prefs: &Preferences) -> Self {
        let mut palette = match prefs.theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        };
        if prefs.high_contrast {
            let (fg, bg) = match prefs.theme {
                Theme::Dark => (Color::White, Color::Black),
                Theme::Light => (Color::Black, Color::White),
            };
            palette.text = fg;
            palette.muted = fg;
            palette.border = fg;
            palette.background = bg;
        }
        if !prefs.show_background {
            palette.background = Color::Reset;
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selects_base_palette() {
        let mut prefs = Preferences::default();
        assert_eq!(Palette::for_preferences(&prefs).accent, ACCENT);
        prefs.theme = Theme::Light;
        assert_eq!(Palette::for_preferences(&prefs).accent, ACCENT_LIGHT);
    }

    #[test]
    fn high_contrast_overrides_text() {
        let prefs = Preferences {
            high_contrast: true,
            ..Preferences::default()
        };
        let palette = Palette::for_preferences(&prefs);
        assert_eq!(palette.text, Color::White);
        assert_eq!(palette.background, Color::Black);
    }

    #[test]
    fn hidden_background_resets_fill() {
        let prefs = Preferences {
            show_background: false,
            ..Preferences::default()
        };
        assert_eq!(Palette::for_preferences(&prefs).background, Color::Reset);
    }
}
