//! Configuration section definitions.
//!
//! Each module corresponds to a part of the declaration:
//!
//! | Module     | Keys                                   | Purpose                       |
//! |------------|----------------------------------------|-------------------------------|
//! | `site`     | `lang`, `title`, `srcDir`, ...         | Site metadata                 |
//! | `markdown` | `[markdown]`                           | Markdown processing options   |
//! | `theme`    | `[themeConfig]`                        | Nav, sidebar, social, labels  |
//! | `server`   | `[server]`                             | Development server binding    |

mod markdown;
mod server;
mod site;
pub mod theme;

pub use markdown::{ImageOptions, MarkdownDecl, MarkdownOptions};
pub use server::{ServerDecl, ServerOptions};
pub use site::{SiteMeta, is_locale_tag};
pub use theme::{
    DocFooterLabels, NavItem, Sidebar, SocialIcon, SocialLink, ThemeConfig, ThemeDecl,
};
