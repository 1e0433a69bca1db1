//! Tracing subscriber for the `dockval` binary.
//!
//! `dockval-core` emits an `info!` per validated form and a `debug!` per
//! failing field from `dockval_core::domain::forms`. The verbosity flags pick
//! which of those reach stderr:
//!
//! | Flag(s)   | Shown                                             |
//! |-----------|---------------------------------------------------|
//! | `--quiet` | errors                                            |
//! | (none)    | warnings and errors                               |
//! | `-v`      | one line per form, plus every failing field       |
//! | `-vv`     | all debug events, with their targets              |
//! | `-vvv`    | trace                                             |
//!
//! `RUST_LOG` replaces the computed filter entirely.

use std::io::IsTerminal as _;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Target of the per-field events in the core crate.
const FIELD_EVENTS: &str = "dockval_core::domain::forms";

/// How much of the validation trail to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Fields,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Fields,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// `EnvFilter` directives for both crates.
    fn directives(self) -> String {
        let crates = |level: &str| format!("dockval={level},dockval_core={level}");
        match self {
            Self::Quiet => crates("error"),
            Self::Normal => crates("warn"),
            Self::Fields => format!("{},{FIELD_EVENTS}=debug", crates("info")),
            Self::Debug => crates("debug"),
            Self::Trace => crates("trace"),
        }
    }

    /// Targets only help once every module is talking.
    fn show_targets(self) -> bool {
        matches!(self, Self::Debug | Self::Trace)
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a subscriber is already registered in this process.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(verbosity.directives())
            .context("Invalid built-in log filter")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(verbosity.show_targets())
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialise tracing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn single_v_opens_field_events_only() {
        let directives = Verbosity::from_args(&args(1, false)).directives();
        assert!(directives.contains("dockval_core::domain::forms=debug"));
        assert!(directives.contains("dockval_core=info"));
    }

    #[test]
    fn default_hides_field_events() {
        let directives = Verbosity::from_args(&args(0, false)).directives();
        assert!(!directives.contains(FIELD_EVENTS));
        assert_eq!(directives, "dockval=warn,dockval_core=warn");
    }

    #[test]
    fn quiet_wins_over_verbose_count() {
        assert_eq!(Verbosity::from_args(&args(3, true)), Verbosity::Quiet);
        assert_eq!(Verbosity::from_args(&args(7, false)), Verbosity::Trace);
    }

    #[test]
    fn targets_only_from_double_v() {
        assert!(!Verbosity::Fields.show_targets());
        assert!(Verbosity::Debug.show_targets());
    }

    #[test]
    fn every_level_builds_a_filter() {
        for level in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Fields,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            assert!(EnvFilter::try_new(level.directives()).is_ok(), "{level:?}");
        }
    }
}
