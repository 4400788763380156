use crate::config::Preferences;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::intro::{IntroState, WIPE_MAX_RADIUS};
use crate::ui::layout::{centered_rect, layout_regions, scaled_rect, split_halves};
use crate::ui::nav::{Direction, NavState, Pane};
use crate::ui::pages::page_lines;
use crate::ui::settings::SettingsPanelState;
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

/// Overlay opacity below which the splash drops its bold styling.
const DIM_OPACITY: f64 = 0.5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let prefs = app.preferences();
    let palette = Palette::for_preferences(&prefs);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    if !app.splash_done() {
        draw_splash(frame, app.intro(), &palette, area);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new(palette).widget(app.nav()), header);
    draw_body(frame, app.nav(), app.scroll_offset(), &palette, &prefs, body);
    frame.render_widget(
        Footer::new(palette).widget(footer, app.settings().is_visible()),
        footer,
    );

    draw_settings(frame, app.settings(), &palette, area);
}

fn draw_splash(frame: &mut Frame<'_>, intro: &IntroState, palette: &Palette, area: Rect) {
    let overlay = scaled_rect(intro.wipe().current() / WIPE_MAX_RADIUS, area);
    if overlay.width < 3 || overlay.height < 3 {
        return;
    }

    let mut title_style = Style::default().fg(palette.text);
    if intro.opacity() >= DIM_OPACITY {
        title_style = title_style.add_modifier(Modifier::BOLD);
    } else {
        title_style = title_style.add_modifier(Modifier::DIM);
    }
    let scramble_style = if intro.glitch() {
        Style::default()
            .fg(palette.scramble)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(palette.scramble)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(overlay);
    frame.render_widget(Clear, overlay);
    frame.render_widget(block, overlay);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    let title: Vec<Span> = intro
        .slots()
        .iter()
        .map(|slot| {
            let style = if slot.resolved {
                title_style
            } else {
                scramble_style
            };
            Span::styled(slot.display_char.to_string(), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(title)).alignment(Alignment::Center),
        rows[1],
    );

    let gauge_area = centered_rect(60, 100, rows[3]);
    let progress = intro.progress().clamp(0.0, 100.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.highlight))
            .ratio(progress / 100.0)
            .label(format!("{progress:.0}%")),
        gauge_area,
    );

    if intro.hint_visible() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "scroll or press Enter to continue",
                Style::default().fg(palette.muted),
            ))
            .alignment(Alignment::Center),
            rows[5],
        );
    }
}

fn draw_body(
    frame: &mut Frame<'_>,
    nav: &NavState,
    scroll: u16,
    palette: &Palette,
    prefs: &Preferences,
    area: Rect,
) {
    frame.render_widget(Clear, area);
    match nav.panes().as_slice() {
        [exiting, entering] => {
            // The entering page sits on the side it slides in from.
            let (left, right) = split_halves(area);
            let (exiting_area, entering_area) = match nav.direction() {
                Direction::Forward => (left, right),
                Direction::Backward => (right, left),
            };
            draw_pane(frame, exiting, 0, palette, prefs, exiting_area);
            draw_pane(frame, entering, 0, palette, prefs, entering_area);
        }
        panes => {
            for pane in panes {
                draw_pane(frame, pane, scroll, palette, prefs, area);
            }
        }
    }
}

fn draw_pane(
    frame: &mut Frame<'_>,
    pane: &Pane,
    scroll: u16,
    palette: &Palette,
    prefs: &Preferences,
    area: Rect,
) {
    let title = match pane.tag {
        Some(tag) => format!(" {} · {} ", pane.page.label(), tag.class_name()),
        None => format!(" {} ", pane.page.label()),
    };
    let border_style = match pane.tag {
        Some(_) => Style::default().fg(palette.accent),
        None => Style::default().fg(palette.border),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, Style::default().fg(palette.text)));

    let paragraph = Paragraph::new(page_lines(pane.page, palette, prefs.font_size))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_settings(frame: &mut Frame<'_>, state: &SettingsPanelState, palette: &Palette, area: Rect) {
    let SettingsPanelState::Visible { fields, focused } = state else {
        return;
    };

    let label_width = fields
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let marker = if index == *focused { "▸ " } else { "  " };
            let row_style = if index == *focused {
                Style::default().fg(palette.text).bg(palette.highlight)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{:<width$}", field.label, width = label_width),
                    row_style,
                ),
                Span::styled("  ", row_style),
                Span::styled(
                    field.value.display(),
                    row_style.fg(palette.accent).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    if let Some(field) = fields.get(*focused) {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("  {}", field.description),
            Style::default().fg(palette.muted),
        ));
    }

    let popup = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Settings ")
                .style(Style::default().bg(palette.background)),
        ),
        popup,
    );
}
