//! Docsite - configuration loader and validator for a documentation site.
//!
//! A declaration (TOML or JSON) is parsed into a raw [`config::Declaration`],
//! then validated by [`config::load`] into an immutable
//! [`config::ConfigDocument`]. Every schema error is reported with its field
//! path; lint warnings travel with the loaded document. Supplying a
//! [`inventory::ContentInventory`] also checks that nav and sidebar links
//! resolve to content pages.

pub mod cli;
pub mod config;
pub mod diff;
pub mod inventory;
pub mod logger;
