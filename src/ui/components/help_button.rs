//! Fixed help badge pinned to the bottom-right corner
//!
//! Placeholder, like the page it mirrors: it renders but leads nowhere yet.

use crate::config::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const GLYPH: &str = " ? ";

/// Draw the help badge over whatever is already rendered
///
/// Drawn last so it floats above the content, one row above the status bar.
pub fn draw(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    if area.width < GLYPH.len() as u16 + 2 || area.height < 3 {
        return;
    }

    let badge_area = Rect {
        x: area.width.saturating_sub(GLYPH.len() as u16 + 2),
        y: area.height.saturating_sub(3),
        width: GLYPH.len() as u16,
        height: 1,
    };

    let badge = Paragraph::new(GLYPH).style(
        Style::default()
            .fg(palette.banner_text())
            .bg(palette.badge())
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(badge, badge_area);
}
