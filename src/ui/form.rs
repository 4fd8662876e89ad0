//! Registration form rendering

use crate::app::App;
use crate::config::Palette;
use crate::state::{FormElement, FormField, StatusKind};
use crate::ui::components::{info_dot, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 64;
const BUTTON_WIDTH: u16 = 20;

/// Draw the registration form card centered in the content area
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.config.palette;

    // Page background behind the card
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.page_bg())),
        area,
    );

    let card_width = CARD_WIDTH.min(area.width);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(card_width),
            Constraint::Min(0),
        ])
        .split(area);
    let card_area = horizontal[1];

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.card_bg())),
        card_area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Top padding
            Constraint::Length(3),             // Full name
            Constraint::Length(1),             // Gap
            Constraint::Length(3),             // Access code
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(1),             // Gap
            Constraint::Length(2),             // Status message
            Constraint::Min(0),                // Remaining space
        ])
        .margin(1)
        .split(card_area);

    draw_field(
        frame,
        chunks[1],
        &app.form.full_name,
        app.form.active_element == FormElement::FullName,
        palette,
    );

    draw_field(
        frame,
        chunks[3],
        &app.form.access_code,
        app.form.active_element == FormElement::AccessCode,
        palette,
    );

    // Centered submit button, disabled while a submission is in flight
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH.min(card_area.width)),
            Constraint::Min(0),
        ])
        .split(chunks[5]);
    let label = if app.form.submitting {
        "Registering…"
    } else {
        "Register"
    };
    render_button(
        frame,
        button_chunks[1],
        label,
        app.form.active_element == FormElement::SubmitButton,
        !app.form.submitting,
        palette,
    );

    if let Some(status) = &app.form.status {
        let color = match status.kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        let message = Paragraph::new(Span::styled(
            status.text.as_str(),
            Style::default().fg(color),
        ))
        .centered()
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[7]);
    }
}

/// Draw a labeled form field with its info badge
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let style = if is_active {
        Style::default().fg(palette.accent_text())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(palette.accent_text())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(palette.accent_text())),
    ]));

    let title = Line::from(vec![
        Span::raw(format!(" {} ", field.label)),
        info_dot::badge(palette),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
