//! Application state module

mod field;
mod form;

pub use field::*;
pub use form::*;
