//! Command-line front end for Folio.
//!
//! Loads configuration, mounts portfolio sections against the API, and
//! prints their rendered HTML fragments or settled state.
//!
//! # Key Abstractions
//!
//! - [`FolioCli<C>`]: CLI application parameterized over a config provider
//! - [`FolioConfig`]: File and environment backed configuration

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::FolioCli;
pub use cli::{BaseCommand, CliArgs, ConfigAction, ConfigCommand, RenderArgs, SectionKind};
pub use config::FolioConfig;
