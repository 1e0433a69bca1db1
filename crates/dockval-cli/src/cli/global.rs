//! Flags shared by every `dockval` subcommand.
//!
//! They are flattened into [`super::Cli`] with `global = true`, so
//! `dockval validate docking -v` and `dockval -v validate docking` mean the
//! same thing.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

/// Flags that shape logging, colour, configuration and rendering.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// How much of the validation trail to log on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more of the validation trail (-v, -vv, -vvv)",
        long_help = "Log more of the validation trail on stderr:
    (none)  - warnings and errors
    -v      - each validated form and every failing field
    -vv     - all debug events, with their source module
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only failures are printed; a valid form produces no output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print failures only"
    )]
    pub quiet: bool,

    /// Also set by a non-empty `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Extra TOML config layered over the user and local files. Must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Additional configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Report rendering. `auto` defers to `output.format` in the config,
    /// then to terminal detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to render reports"
    )]
    pub output_format: OutputFormat,
}

/// How a validation report is rendered on stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, Plain when piped.
    #[default]
    Auto,
    /// Coloured summary with one line per failing field.
    Human,
    Plain,
    /// The `ValidationReport` as pretty JSON.
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Human => "human",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
