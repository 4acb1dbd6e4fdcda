//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Reasons a declaration is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("unsupported config format `{0}`, expected `toml` or `json`")]
    UnsupportedFormat(String),

    #[error("failed to render config: {0}")]
    Render(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Schema(Diagnostics),

    #[error("{0}")]
    LinkIntegrity(Diagnostics),
}

impl ConfigError {
    /// Collected issues, if this error carries any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Self::Schema(diag) | Self::LinkIntegrity(diag) => Some(diag),
            Self::Io(..) | Self::UnsupportedFormat(_) | Self::Render(_) => None,
        }
    }
}

// ============================================================================
// Issue
// ============================================================================

/// Severity class of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Structural violation: missing field, wrong shape, bad value.
    Schema,
    /// A declared link has no matching content page.
    LinkIntegrity,
    /// Tolerated inconsistency.
    Lint,
}

impl IssueKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::LinkIntegrity => "link",
            Self::Lint => "lint",
        }
    }
}

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    /// Declaration path (e.g., `themeConfig.nav[1].items[0]`)
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl Issue {
    pub fn new(kind: IssueKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Errors and warnings collected over one validation pass.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(Issue::new(IssueKind::Schema, field, message));
    }

    /// Add a schema error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(Issue::new(IssueKind::Schema, field, message).with_hint(hint));
    }

    /// Add a lint warning.
    pub fn lint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(Issue::new(IssueKind::Lint, field, message));
    }

    pub fn lint_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.warnings
            .push(Issue::new(IssueKind::Lint, field, message).with_hint(hint));
    }

    /// Push an already-built issue into the errors.
    pub fn push_error(&mut self, issue: Issue) {
        self.errors.push(issue);
    }

    /// Push an already-built issue into the warnings.
    pub fn push_warning(&mut self, issue: Issue) {
        self.warnings.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<Vec<Issue>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));

        let err = ConfigError::UnsupportedFormat("yaml".into());
        assert!(format!("{err}").contains("yaml"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = Diagnostics::new();
        diag.lint(FieldPath::new("themeConfig.sidebar"), "odd key");
        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, IssueKind::Lint);
    }

    #[test]
    fn test_errors_collected() {
        let mut diag = Diagnostics::new();
        diag.error(FieldPath::new("lang"), "missing");
        diag.error_with_hint(FieldPath::new("title"), "missing", "set a title");
        let diag = diag.into_result().unwrap_err();
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("set a title"));

        let display = format!("{diag}");
        assert!(display.contains("lang"));
        assert!(display.contains("set a title"));
    }
}
