//! Template helpers and shared utilities.

pub mod class;
pub mod date;
pub mod html;
pub mod path;
