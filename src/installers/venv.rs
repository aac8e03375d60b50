// Provisions the plugin's Python virtual environment.
// Creation is delegated to the interpreter's own `venv` module as a
// subprocess; the call is synchronous with inherited stdio and no timeout.

use crate::errors::InstallError;
use crate::{log_debug, report_action, report_skipped};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Ensures a virtual environment exists at `virtualenv_path`.
///
/// If the directory already exists the step is skipped (only the root
/// directory's presence is checked, nothing deeper). Otherwise
/// `<python_interpreter> -m venv <virtualenv_path>` is run; on failure the
/// target directory is removed again if it is empty, and the error records
/// whether that cleanup succeeded. A failure here is fatal to the
/// installation.
pub fn create_virtualenv(
    python_interpreter: &Path,
    virtualenv_path: &Path,
) -> Result<(), InstallError> {
    if virtualenv_path.exists() {
        report_skipped!("Virtual Environment already exists, skipping creation");
        return Ok(());
    }

    report_action!(
        "Creating Python Virtual Environment in '{}'",
        virtualenv_path.display()
    );
    log_debug!(
        "[Venv] Executing: {} -m venv {}",
        python_interpreter.display().to_string().cyan(),
        virtualenv_path.display().to_string().cyan()
    );

    let status = Command::new(python_interpreter)
        .arg("-m")
        .arg("venv")
        .arg(virtualenv_path)
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            log_debug!("[Venv] venv creation exited with {status}");
            Err(cleanup_failed_attempt(virtualenv_path))
        }
        Err(err) => {
            log_debug!("[Venv] failed to spawn interpreter: {err}");
            Err(cleanup_failed_attempt(virtualenv_path))
        }
    }
}

/// Best-effort removal of a failed creation attempt. Only an empty directory
/// is removed; a partially populated one makes the cleanup itself fail, which
/// the returned error distinguishes.
fn cleanup_failed_attempt(virtualenv_path: &Path) -> InstallError {
    let cleaned_up = fs::remove_dir(virtualenv_path).is_ok();
    InstallError::EnvironmentCreationFailed { cleaned_up }
}
