//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dockval_core::domain::{FormKind, rules::parse_timestamp};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dockval",
    bin_name = "dockval",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Validate spacecraft and docking forms",
    long_about = "dockval checks spacecraft registration and docking request \
                  forms against the station's field rules and reports every \
                  failing field.",
    after_help = "EXAMPLES:\n\
        \x20 dockval validate spacecraft ship.json\n\
        \x20 dockval validate docking request.json --now 2030-01-01T00:00:00Z\n\
        \x20 cat request.json | dockval --output-format json validate docking\n\
        \x20 dockval completions bash > /usr/share/bash-completion/completions/dockval",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a form read from a file or stdin.
    #[command(
        visible_alias = "v",
        about = "Validate a form",
        after_help = "EXAMPLES:\n\
            \x20 dockval validate spacecraft ship.json\n\
            \x20 dockval validate docking -               # read stdin\n\
            \x20 dockval validate docking req.json --now 2030-01-01T00:00:00Z"
    )]
    Validate(ValidateArgs),

    /// Initialise a dockval configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dockval init           # default location\n\
            \x20 dockval init --local   # .dockval.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dockval completions bash > ~/.local/share/bash-completion/completions/dockval\n\
            \x20 dockval completions zsh  > ~/.zfunc/_dockval\n\
            \x20 dockval completions fish > ~/.config/fish/completions/dockval.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the dockval configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dockval config get output.format\n\
            \x20 dockval config list"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `dockval validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Which form the input holds.
    #[arg(value_enum, value_name = "FORM", help = "Form to validate")]
    pub form: FormArg,

    /// JSON file with the form body. `-` or nothing reads stdin.
    #[arg(value_name = "FILE", help = "Form body as JSON (default: stdin)")]
    pub file: Option<PathBuf>,

    /// Evaluate docking times against this instant instead of the clock.
    #[arg(
        long = "now",
        value_name = "TIMESTAMP",
        value_parser = parse_instant,
        help = "Pin the current time (ISO-8601)"
    )]
    pub now: Option<DateTime<Utc>>,
}

impl ValidateArgs {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

/// Form names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormArg {
    /// Also accepted as `ship`.
    #[value(alias = "ship")]
    Spacecraft,
    /// Also accepted as `dock`.
    #[value(alias = "dock")]
    Docking,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Spacecraft => FormKind::Spacecraft,
            FormArg::Docking => FormKind::Docking,
        }
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(value).ok_or_else(|| format!("'{value}' is not an ISO-8601 timestamp"))
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dockval init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.dockval.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dockval completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dockval config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
