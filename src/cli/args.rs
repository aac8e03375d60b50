// Defines the command-line interface for the installer.
// `#[derive(Parser)]` generates the argument parsing code via `clap`; the
// value parsers below reject invalid interpreter paths and malformed interval
// strings at parse time, so clap reports them together with usage guidance.

use crate::errors::InstallError;
use crate::report_notice;
use crate::schema::InstallConfig;
use clap::Parser;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Name of the interpreter looked up on PATH when `-p` is not supplied.
pub const DEFAULT_PYTHON_NAME: &str = "python3";

/// The Argos execution-interval pattern: one or more digits followed by a
/// unit. Matched as a substring, not anchored, mirroring how Argos itself
/// scans plugin filenames.
const ARGOS_INTERVAL_RE: &str = r"\d+[smhd]";
/// Human-readable description of the interval pattern, used in help and
/// validation errors.
pub const ARGOS_INTERVAL_PATTERN: &str = "'NumberUnit' where Unit is one of s (seconds), \
     m (minutes), h (hours) or d (days) - i.e. 5m";

#[derive(Parser)]
#[command(name = "jira-timelog-installer")]
#[command(about = "Install the Jira Timelog Critic plugin into Argos", long_about = None)]
pub struct Cli {
    /// Python 3 interpreter used to create the plugin's virtual environment;
    /// defaults to the `python3` found on PATH
    #[arg(short = 'p', long, value_parser = parse_python_interpreter)]
    pub python_interpreter: Option<PathBuf>,

    /// Don't check for an installed copy of the Argos extension
    #[arg(short = 'a', long)]
    pub assume_argos: bool,

    #[arg(
        short = 't',
        long,
        default_value = "5m",
        value_parser = parse_argos_interval,
        help = format!("How often the plugin will be executed, must be in the pattern {ARGOS_INTERVAL_PATTERN}")
    )]
    pub execution_frequency: String,

    /// Also re-run the plugin whenever the Argos dropdown is viewed
    #[arg(short = 'r', long)]
    pub rerun_on_dropdown: bool,

    /// Turn debugging information on
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Finishes argument resolution: looks up the default interpreter when
    /// none was supplied, and freezes everything into an `InstallConfig`.
    pub fn into_config(self) -> Result<InstallConfig, InstallError> {
        let python_interpreter = match self.python_interpreter {
            Some(path) => path,
            None => resolve_default_interpreter()?,
        };

        Ok(InstallConfig {
            python_interpreter,
            execution_frequency: self.execution_frequency,
            assume_argos: self.assume_argos,
            rerun_on_dropdown: self.rerun_on_dropdown,
        })
    }
}

/// Searches PATH for the default `python3` interpreter, announcing both the
/// fallback and the resolved location.
fn resolve_default_interpreter() -> Result<PathBuf, InstallError> {
    report_notice!(
        "No Python Interpreter specified, looking up path of default interpreter ({DEFAULT_PYTHON_NAME})"
    );
    match which::which(DEFAULT_PYTHON_NAME) {
        Ok(path) => {
            report_notice!("Found default interpreter at '{}'", path.display());
            Ok(path)
        }
        Err(_) => Err(InstallError::InterpreterNotFound),
    }
}

/// clap value parser for `-p/--python-interpreter`.
/// Accepts only an existing, executable file, and distinguishes the two
/// failure causes in the message.
fn parse_python_interpreter(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if is_executable_file(&path) {
        return Ok(path);
    }
    if path.is_file() {
        Err("Python interpreter not valid (file not executable)".to_string())
    } else {
        Err("Python interpreter not valid (file not found)".to_string())
    }
}

/// clap value parser for `-t/--execution-frequency`.
/// The string passes through unchanged when it contains a valid interval.
fn parse_argos_interval(value: &str) -> Result<String, String> {
    if interval_regex().is_match(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "Execution frequency invalid, must be in the pattern {ARGOS_INTERVAL_PATTERN}"
        ))
    }
}

fn interval_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ARGOS_INTERVAL_RE).expect("interval pattern is a valid regex"))
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
