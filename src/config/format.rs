//! Declaration file formats.
//!
//! TOML is the primary format; JSON is accepted for declarations generated by
//! other tools. Both go through `serde_ignored` so unknown keys surface as lint
//! warnings instead of vanishing.

use std::path::Path;

use serde::Serialize;

use super::{ConfigError, Declaration, Diagnostics, FieldPath, Issue, IssueKind};

/// On-disk format of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

/// Result of parsing: the raw declaration plus unknown-key warnings.
#[derive(Debug)]
pub struct Parsed {
    pub declaration: Declaration,
    pub warnings: Vec<Issue>,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    /// Parse declaration text, collecting unknown keys.
    ///
    /// Syntax and type errors become a single schema issue located by line
    /// and column.
    pub fn parse(self, content: &str) -> Result<Parsed, ConfigError> {
        let mut ignored = Vec::new();
        let collect = |path: serde_ignored::Path| ignored.push(path.to_string());

        let declaration = match self {
            Self::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, collect).map_err(|err| {
                    let (line, column) = err
                        .span()
                        .map(|span| line_col(content, span.start))
                        .unwrap_or((1, 1));
                    parse_error(line, column, err.message())
                })?
            }
            Self::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                serde_ignored::deserialize(&mut deserializer, collect)
                    .and_then(|decl| deserializer.end().map(|()| decl))
                    .map_err(|err| parse_error(err.line(), err.column(), &err.to_string()))?
            }
        };

        let warnings = ignored
            .into_iter()
            .map(|path| {
                Issue::new(IssueKind::Lint, FieldPath::new(path), "unknown field, ignoring")
            })
            .collect();

        Ok(Parsed {
            declaration,
            warnings,
        })
    }

    /// Serialize a declaration in this format.
    pub fn render(self, declaration: &Declaration) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(declaration)
                .map_err(|e| ConfigError::Render(e.to_string())),
            Self::Json => {
                render_json(declaration).map_err(|e| ConfigError::Render(e.to_string()))
            }
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

fn parse_error(line: usize, column: usize, message: &str) -> ConfigError {
    let mut diag = Diagnostics::new();
    diag.error(
        FieldPath::new(format!("line {line}, column {column}")),
        message.trim().to_string(),
    );
    ConfigError::Schema(diag)
}

/// 1-based line and column of a byte offset.
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}
