//! CLI argument parsing and command definitions.
//!
//! Global options cover configuration, verbosity, and the API location;
//! subcommands render sections, probe the API, and manage the config file.

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Portfolio API base URL, overriding the configured one.
    #[arg(long, env = "FOLIO_API_URL")]
    pub api_url: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Render a portfolio section.
    Render(RenderArgs),

    /// Report whether each fetched section loads live or falls back.
    Health,

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Arguments for `render`.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Section to render.
    #[arg(value_enum)]
    pub section: SectionKind,

    /// Select the item at this index once loaded.
    #[arg(short, long)]
    pub select: Option<usize>,

    /// Advance the selection once, wrapping around.
    #[arg(long)]
    pub next: bool,

    /// Print the settled section state as JSON instead of HTML.
    #[arg(long)]
    pub json: bool,
}

/// Renderable sections.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Certificates, fetched from the API.
    Certificates,
    /// Projects, fetched from the API.
    Projects,
    /// Education timeline, from site content only.
    Education,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "api.base_url").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "api.base_url").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
