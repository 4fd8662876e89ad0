//! Layout components (header, banner, status bar)

use crate::app::App;
use crate::ui::components::info_dot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Split the screen into header, banner, content, and status bar areas
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Banner
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Draw the header row: context label left, wordmark right
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.config.palette;

    let context = Paragraph::new(Span::styled(
        " [Management View]",
        Style::default()
            .fg(palette.accent_text())
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(palette.page_bg()));
    frame.render_widget(context, area);

    let wordmark = format!("{} ", app.config.wordmark);
    let wordmark_area = Rect {
        x: area.x + area.width.saturating_sub(wordmark.len() as u16),
        y: area.y,
        width: (wordmark.len() as u16).min(area.width),
        height: 1,
    };
    let logo = Paragraph::new(Span::styled(
        wordmark,
        Style::default()
            .fg(palette.banner())
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(palette.page_bg()));
    frame.render_widget(logo, wordmark_area);
}

/// Draw the full-width title banner
pub fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.config.palette;

    let block = Block::default().style(
        Style::default()
            .bg(palette.banner())
            .fg(palette.banner_text()),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title_area = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1,
    };
    let title = Paragraph::new(Span::styled(
        "Register Client with Access Code",
        Style::default()
            .fg(palette.banner_text())
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(title, title_area);
}

/// Draw the status bar: key hints plus the focused field's tooltip
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Tab:next  ^S:register  Esc:dismiss ",
        Style::default().fg(Color::Gray),
    )];

    if app.form.submitting {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            "registering",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(hint) = app.form.active_hint() {
        spans.push(Span::raw("| "));
        spans.extend(info_dot::tooltip_line(hint, &app.config.palette));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
