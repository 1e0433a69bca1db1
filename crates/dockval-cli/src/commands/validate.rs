//! `dockval validate`: check a form body and report failing fields.

use std::io::Read;
use std::path::Path;

use dockval_core::application::{Clock, FixedClock, SystemClock, ValidationService};
use dockval_core::domain::FormKind;
use tracing::{Span, debug, field, instrument};

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Validate one form and print the report.
///
/// A form with failing fields is reported on stdout and then returned as
/// [`CliError::ValidationFailed`] so the process exits non-zero.
///
/// The span carries the form kind and, when pinned, the evaluation instant,
/// so every core event logged under it says which form and which "now".
#[instrument(skip_all, fields(form = field::Empty, now = field::Empty))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = FormKind::from(args.form);
    Span::current().record("form", field::display(kind));
    let body = match args.input_path() {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    if body.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "the form body is empty".into(),
            source: None,
        });
    }

    let service = ValidationService::new(clock_for(&args, &config));
    let report = service
        .validate_json(kind, &body)
        .with_cli_context(|| format!("validating {kind} form"))?;

    output.report(&report)?;

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            kind,
            count: report.errors.len(),
        })
    }
}

/// `--now` beats `validation.now` from config; neither means the real clock.
fn clock_for(args: &ValidateArgs, config: &AppConfig) -> Box<dyn Clock> {
    match args.now.or(config.validation.now) {
        Some(at) => {
            Span::current().record("now", field::display(at.to_rfc3339()));
            Box::new(FixedClock::new(at))
        }
        None => Box::new(SystemClock),
    }
}

fn read_file(path: &Path) -> CliResult<String> {
    if !path.exists() {
        return Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading form");
    std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read form from '{}'", path.display()))
}

fn read_stdin() -> CliResult<String> {
    debug!("reading form from stdin");
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .with_cli_context(|| "Failed to read form from stdin")?;
    Ok(body)
}
