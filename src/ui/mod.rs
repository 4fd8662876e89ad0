//! UI module for rendering the TUI

mod components;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, banner_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    layout::draw_banner(frame, banner_area, app);
    form::draw(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Floats above everything, like the fixed-position link it mirrors
    components::help_button::draw(frame, &app.config.palette);
}
