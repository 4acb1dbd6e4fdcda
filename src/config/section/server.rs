//! `[server]` section: dev-server binding.
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"            # listen on all interfaces (LAN accessible)
//! port = 5173                 # optional, renderer picks its default otherwise
//! ```
//!
//! `host` accepts an IPv4/IPv6 address or a hostname such as `localhost`.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use url::Host;

use crate::config::{Diagnostics, FieldPath};

/// Validated dev-server binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// Interface address or hostname to bind.
    pub host: String,
    pub port: Option<u16>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.into(),
            port: None,
        }
    }
}

impl ServerOptions {
    pub const DEFAULT_HOST: &'static str = "localhost";

    /// Parsed IP address, if `host` is one.
    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    /// Validate the server section.
    ///
    /// # Checks
    /// - `host` is an IP address or a domain name
    /// - `port` is not 0
    pub fn resolve(decl: Option<&ServerDecl>, diag: &mut Diagnostics) -> Self {
        let field = FieldPath::new("server");
        let mut options = Self::default();
        let Some(decl) = decl else {
            return options;
        };

        if let Some(host) = &decl.host {
            if !is_valid_host(host) {
                diag.error_with_hint(
                    field.key("host"),
                    format!("`{host}` is not an IP address or hostname"),
                    "use e.g. \"localhost\", \"127.0.0.1\" or \"0.0.0.0\"",
                );
            }
            options.host = host.clone();
        }

        if let Some(port) = decl.port {
            if port == 0 {
                diag.error(field.key("port"), "port 0 is not bindable");
            }
            options.port = Some(port);
        }

        options
    }

    pub fn to_decl(&self) -> ServerDecl {
        ServerDecl {
            host: Some(self.host.clone()),
            port: self.port,
        }
    }
}

fn is_valid_host(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }
    // `Host::parse` also accepts bracketed IPv6 and percent-encoded names,
    // neither of which a socket bind takes.
    !host.is_empty()
        && !host.contains(['[', ']', '%', '/', ':', ' '])
        && matches!(Host::parse(host), Ok(Host::Domain(_)))
}

// ============================================================================
// Declaration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}
