//! Configuration utility types.
//!
//! | Module  | Purpose                                    |
//! |---------|--------------------------------------------|
//! | `error` | `ConfigError` and collected diagnostics    |
//! | `field` | `FieldPath` for pointing at a config key   |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, Severity};
pub use field::FieldPath;
