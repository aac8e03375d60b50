// Fatal error kinds for the installation sequence.
// Each failed step returns one of these variants up to the single top-level
// handler in `main`, which owns all failure printing and process termination.
// Components themselves never print their own errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way the installation can fail after argument parsing.
/// (Invalid interpreter paths and malformed interval strings are rejected
/// earlier, by the clap value parsers, with usage guidance.)
#[derive(Debug, Error)]
pub enum InstallError {
    /// No interpreter was supplied and the default lookup on PATH failed.
    #[error(
        "No Python Interpreter was specified and 'python3' executable cannot be found - \
         please specify a valid Python 3 interpreter"
    )]
    InterpreterNotFound,

    /// The `python -m venv` subprocess failed. `cleaned_up` records whether
    /// the best-effort removal of the target directory succeeded, which
    /// selects between the two distinct failure messages.
    #[error("{}", environment_failure_message(.cleaned_up))]
    EnvironmentCreationFailed { cleaned_up: bool },

    /// Copying the default config file into the Argos config dir failed.
    #[error("Failed to copy default config file: {0}")]
    ConfigCopyFailed(#[source] io::Error),

    /// Reading the plugin template, writing the templated plugin, or setting
    /// its permissions failed.
    #[error("Failed to install plugin '{}': {source}", .path.display())]
    PluginInstallFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Argos extension directory was not found and the check was not
    /// skipped. Non-fatal by itself; the caller decides, and `main` turns it
    /// into exit code 1 with a guidance line.
    #[error("Unable to locate installed copy of argos")]
    HostNotPresent,
}

/// Selects the venv-failure message based on the cleanup outcome.
fn environment_failure_message(cleaned_up: &bool) -> &'static str {
    if *cleaned_up {
        "Failed to create Virtual Environment - deleted attempt"
    } else {
        "Failed to create Virtual Environment and failed to clean up"
    }
}

