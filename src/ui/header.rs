use crate::ui::nav::{NavState, PageId};
use crate::ui::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Page tabs. The current page is highlighted; a page that is sliding in is
/// underlined until the transition lands.
pub struct Header {
    palette: Palette,
}

impl Header {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, nav: &NavState) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.palette.text);
        let separator_style = Style::default().fg(self.palette.muted);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (index, page) in PageId::ORDER.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            spans.push(Span::styled(
                format!("{} {}", index + 1, page.label()),
                self.tab_style(*page, nav),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(self.palette.border)),
        )
    }

    fn tab_style(&self, page: PageId, nav: &NavState) -> Style {
        if page == nav.current() {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else if nav.pending() == Some(page) {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.palette.text)
        }
    }
}
