//! Info badge shown next to field labels
//!
//! Terminals have no hover tooltips; the badge marks the field and the hint
//! text surfaces in the status bar while the field is focused.

use crate::config::Palette;
use ratatui::{
    style::Style,
    text::Span,
};

/// Badge glyph appended to a field label
pub fn badge(palette: &Palette) -> Span<'static> {
    Span::styled("ⓘ", Style::default().fg(palette.badge()))
}

/// Status-bar line carrying the focused field's tooltip text
pub fn tooltip_line<'a>(hint: &'a str, palette: &Palette) -> Vec<Span<'a>> {
    vec![
        Span::styled("ⓘ ", Style::default().fg(palette.badge())),
        Span::raw(hint),
    ]
}
