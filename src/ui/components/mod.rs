//! Reusable UI components

pub mod button;
pub mod help_button;
pub mod info_dot;

pub use button::{render_button, BUTTON_HEIGHT};
