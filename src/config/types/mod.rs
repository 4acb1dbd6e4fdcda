//! Configuration utility types.
//!
//! | Module  | Purpose                                   |
//! |---------|-------------------------------------------|
//! | `error` | `ConfigError`, `Issue` and `Diagnostics`  |
//! | `field` | Runtime field paths for diagnostics       |

mod error;
mod field;

pub use error::{ConfigError, Diagnostics, Issue, IssueKind};
pub use field::FieldPath;
