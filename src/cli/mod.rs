//! Command-line interface module.

mod args;
pub mod check;
pub mod info;
pub mod tools;

pub use args::{Cli, Commands};
