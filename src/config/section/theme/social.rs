//! `[[themeConfig.socialLinks]]`: provider icons in the top bar.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.socialLinks]]
//! icon = "github"
//! link = "https://github.com/example/notes"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{Diagnostics, FieldPath};

/// Icon providers the renderer ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub const ALL: [Self; 11] = [
        Self::Discord,
        Self::Facebook,
        Self::Github,
        Self::Instagram,
        Self::Linkedin,
        Self::Mastodon,
        Self::Npm,
        Self::Slack,
        Self::Twitter,
        Self::X,
        Self::Youtube,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Mastodon => "mastodon",
            Self::Npm => "npm",
            Self::Slack => "slack",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Youtube => "youtube",
        }
    }
}

impl FromStr for SocialIcon {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == s).ok_or(())
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated social link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    fn to_decl(&self) -> SocialLinkDecl {
        SocialLinkDecl {
            icon: Some(self.icon.as_str().to_string()),
            link: Some(self.link.clone()),
        }
    }
}

// ============================================================================
// Declaration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinkDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

pub fn links_to_decl(links: &[SocialLink]) -> Vec<SocialLinkDecl> {
    links.iter().map(SocialLink::to_decl).collect()
}

/// Validate social links, dropping entries that fail.
///
/// # Checks
/// - `icon` is a known provider
/// - `link` is an http(s) URL with a host
pub fn resolve_links(
    decls: &[SocialLinkDecl],
    field: &FieldPath,
    diag: &mut Diagnostics,
) -> Vec<SocialLink> {
    decls
        .iter()
        .enumerate()
        .filter_map(|(i, decl)| resolve_link(decl, &field.index(i), diag))
        .collect()
}

fn resolve_link(
    decl: &SocialLinkDecl,
    field: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<SocialLink> {
    let icon = match decl.icon.as_deref() {
        None => {
            diag.error(field.key("icon"), "required field is missing");
            None
        }
        Some(name) => match name.parse::<SocialIcon>() {
            Ok(icon) => Some(icon),
            Err(()) => {
                let known: Vec<_> = SocialIcon::ALL.iter().map(SocialIcon::as_str).collect();
                diag.error_with_hint(
                    field.key("icon"),
                    format!("unknown icon provider `{name}`"),
                    format!("use one of: {}", known.join(", ")),
                );
                None
            }
        },
    };

    let link = match decl.link.as_deref() {
        None => {
            diag.error(field.key("link"), "required field is missing");
            None
        }
        Some(link) => validate_url(link, &field.key("link"), diag).then(|| link.to_string()),
    };

    Some(SocialLink {
        icon: icon?,
        link: link?,
    })
}

/// Strict URL check using the `url` crate.
fn validate_url(link: &str, field: &FieldPath, diag: &mut Diagnostics) -> bool {
    match url::Url::parse(link) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field.clone(),
                    format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    "use format like https://github.com/user",
                );
                return false;
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field.clone(),
                    "URL must have a valid host",
                    "use format like https://github.com/user",
                );
                return false;
            }
            true
        }
        Err(e) => {
            diag.error_with_hint(
                field.clone(),
                format!("invalid URL: {e}"),
                "use format like https://github.com/user",
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(toml_src: &str) -> (Vec<SocialLink>, Diagnostics) {
        #[derive(Deserialize)]
        struct Wrapper {
            links: Vec<SocialLinkDecl>,
        }
        let wrapper: Wrapper = toml::from_str(toml_src).unwrap();
        let mut diag = Diagnostics::new();
        let field = FieldPath::new("themeConfig.socialLinks");
        let links = resolve_links(&wrapper.links, &field, &mut diag);
        (links, diag)
    }

    #[test]
    fn test_known_provider() {
        let (links, diag) =
            resolve(r#"links = [{ icon = "github", link = "https://github.com/example" }]"#);
        assert!(!diag.has_errors());
        assert_eq!(links[0].icon, SocialIcon::Github);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let (links, diag) =
            resolve(r#"links = [{ icon = "not-a-provider", link = "https://example.com" }]"#);
        assert!(links.is_empty());
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.socialLinks[0].icon");
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("github"));
    }

    #[test]
    fn test_bad_urls_rejected() {
        let (_, diag) = resolve(
            r#"links = [
    { icon = "github", link = "github.com/example" },
    { icon = "x", link = "ftp://example.com" },
    { icon = "npm" },
]"#,
        );
        assert_eq!(diag.len(), 3);
        assert!(diag.errors()[0].message.contains("invalid URL"));
        assert!(diag.errors()[1].message.contains("ftp"));
        assert_eq!(diag.errors()[2].field.as_str(), "themeConfig.socialLinks[2].link");
    }

    #[test]
    fn test_icon_names_round_trip() {
        for icon in SocialIcon::ALL {
            assert_eq!(icon.as_str().parse::<SocialIcon>(), Ok(icon));
        }
    }
}
