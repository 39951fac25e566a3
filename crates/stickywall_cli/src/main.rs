//! Gesture script host for the sticky wall.
//!
//! # Responsibility
//! - Replay a gesture script against an in-memory wall.
//! - Print the wall after `show` steps and once at the end.

mod output;
mod script;

use clap::Parser;
use log::info;
use output::{render_wall, OutputFormat};
use script::{parse_script, ScriptError, Step};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use stickywall_core::{core_version, default_log_level, init_logging, MemoryDom, WallController};

#[derive(Debug, Parser)]
#[command(name = "stickywall", version, about = "Replay sticky-wall gesture scripts")]
struct Args {
    /// Gesture script to replay. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// How to print the wall.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// trace|debug|info|warn|error. Defaults to the build-mode level.
    #[arg(long, env = "STICKYWALL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, env = "STICKYWALL_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Script(ScriptError),
    Logging(String),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Script(err) => write!(f, "script error: {err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Json(err) => write!(f, "cannot encode board: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Script(err) => Some(err),
            Self::Logging(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScriptError> for CliError {
    fn from(value: ScriptError) -> Self {
        Self::Script(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stickywall: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if let Some(dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &dir.to_string_lossy()).map_err(CliError::Logging)?;
        info!(
            "event=cli_start module=cli status=ok version={} format={:?}",
            core_version(),
            args.format
        );
    }

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    replay(&source, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Runs every step of `source` and writes the requested walls to `out`.
fn replay(source: &str, format: OutputFormat, out: &mut impl Write) -> Result<(), CliError> {
    let steps = parse_script(source)?;
    let mut controller = WallController::new(MemoryDom::new());

    for step in steps {
        match step {
            Step::Gesture(gesture) => {
                controller.apply(gesture);
            }
            Step::Show => {
                out.write_all(render_wall(&controller, format)?.as_bytes())?;
                out.write_all(b"--\n")?;
            }
        }
    }

    out.write_all(render_wall(&controller, format)?.as_bytes())?;
    info!(
        "event=cli_replay module=cli status=ok notes={}",
        controller.store().len()
    );
    Ok(())
}
