//! Button component for TUI

use crate::config::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the submit button
///
/// Disabled rendering (dimmed, no focus highlight) is driven entirely by
/// `is_enabled`, which callers tie to the submitting flag.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    palette: &Palette,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(palette.accent_text())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(palette.banner_text())
            .bg(palette.banner())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.banner())
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .centered();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
