//! `[markdown]` section.
//!
//! # Example
//!
//! ```toml
//! [markdown.image]
//! lazyLoading = true          # add loading="lazy" to rendered images
//! ```

use serde::{Deserialize, Serialize};

/// Markdown processing options handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub image: ImageOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Render images with lazy loading.
    pub lazy_loading: bool,
}

// ============================================================================
// Declaration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy_loading: Option<bool>,
}

impl MarkdownOptions {
    /// Apply defaults; every field here is optional.
    pub fn resolve(decl: Option<&MarkdownDecl>) -> Self {
        let lazy_loading = decl
            .and_then(|m| m.image.as_ref())
            .and_then(|i| i.lazy_loading)
            .unwrap_or(false);

        Self {
            image: ImageOptions { lazy_loading },
        }
    }

    pub fn to_decl(self) -> MarkdownDecl {
        MarkdownDecl {
            image: Some(ImageDecl {
                lazy_loading: Some(self.image.lazy_loading),
            }),
        }
    }
}
