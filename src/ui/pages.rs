//! Static page content.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::config::FontSize;
use crate::ui::nav::PageId;
use crate::ui::theme::Palette;

enum Section {
    Heading(&'static str),
    Lead(&'static str),
    Text(&'static str),
    Bullet(&'static str),
}

use Section::{Bullet, Heading, Lead, Text};

const HOME: &[Section] = &[
    Heading("Adon Paul Tomy"),
    Lead("Flutter Developer | Computer Science Student"),
    Text("Website is currently under development."),
    Text("In the meantime, you can find me on:"),
    Bullet("LinkedIn"),
    Bullet("GitHub"),
];

const ABOUT: &[Section] = &[
    Lead("Mobile Developer. Security-Conscious. Currently Shipping."),
    Heading("About Me"),
    Text(
        "I ship products that people can actually use. Final-year Computer Science \
         student at VISAT Engineering College: build first, theorize later.",
    ),
    Heading("What I've Built"),
    Bullet("E-Commerce Platform (Flutter + Supabase)"),
    Bullet("Melody Music Player (Flutter)"),
    Bullet("Style Transfer AI (Python)"),
    Heading("Why Security Matters to Me"),
    Text(
        "I came to mobile development through cybersecurity: input validation, \
         webhook signature verification and secure data storage come first.",
    ),
    Heading("What I'm Looking For"),
    Bullet("Values shipping over perfection."),
    Bullet("Gives me real problems to solve, not tutorials to complete."),
    Bullet("Has senior engineers I can learn from."),
    Heading("Let's Build Something."),
];

const PROJECTS: &[Section] = &[
    Heading("Projects"),
    Lead("Case studies and builds. More coming soon."),
    Heading("Style Transfer AI: Stylometric Analyser (v1.1.0)"),
    Lead("A privacy-first analysis engine that treats writing style like a fingerprint."),
    Bullet("Privacy-first architecture: switch between local and cloud inference."),
    Bullet("One-line install through a PowerShell automation script."),
    Bullet("Dual interface: scriptable CLI and a desktop GUI."),
    Text("Tech stack: Python 3.13, Ollama, CustomTkinter, REST APIs, PowerShell"),
];

const INTERESTING: &[Section] = &[
    Heading("Interesting Stuff"),
    Lead("Experiments, notes, and small builds. Coming soon."),
    Heading("In progress"),
    Text("Press S to open the settings panel."),
];

fn sections(page: PageId) -> &'static [Section] {
    match page {
        PageId::Home => HOME,
        PageId::About => ABOUT,
        PageId::Projects => PROJECTS,
        PageId::Interesting => INTERESTING,
    }
}

/// Blank lines between sections; the terminal stand-in for text size.
fn spacing(font_size: FontSize) -> usize {
    match font_size {
        FontSize::Small => 0,
        FontSize::Medium => 1,
        FontSize::Large => 2,
    }
}

pub fn page_lines(page: PageId, palette: &Palette, font_size: FontSize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, section) in sections(page).iter().enumerate() {
        if index > 0 {
            lines.extend((0..spacing(font_size)).map(|_| Line::default()));
        }
        let line = match section {
            Heading(text) => Line::styled(
                *text,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Lead(text) => Line::styled(
                *text,
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
            Text(text) => Line::styled(*text, Style::default().fg(palette.text)),
            Bullet(text) => Line::from(vec![
                Span::styled("  • ", Style::default().fg(palette.accent)),
                Span::styled(*text, Style::default().fg(palette.text)),
            ]),
        };
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;

    #[test]
    fn every_page_has_content() {
        let palette = Palette::for_preferences(&Preferences::default());
        for page in PageId::ORDER {
            assert!(!page_lines(page, &palette, FontSize::Medium).is_empty());
        }
    }

    #[test]
    fn font_size_controls_spacing() {
        let palette = Palette::for_preferences(&Preferences::default());
        let small = page_lines(PageId::Home, &palette, FontSize::Small).len();
        let large = page_lines(PageId::Home, &palette, FontSize::Large).len();
        assert_eq!(small, HOME.len());
        assert_eq!(large, HOME.len() + 2 * (HOME.len() - 1));
    }
}
