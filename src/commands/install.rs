// This file contains the primary logic of the installer.
// It orchestrates the linear installation sequence: the Argos precondition
// gate, virtual environment provisioning, config file installation and
// plugin installation, followed by the bold summary.

use crate::errors::InstallError;
use crate::installers::{config, plugin, venv};
use crate::libs::{host_check, paths};
use crate::schema::{InstallConfig, ResolvedPaths};
use crate::{report_skipped, reporter};
use colored::Colorize;

/// Main entry point for the installation.
///
/// Runs the whole sequence:
/// 1. Resolves every filesystem path once.
/// 2. Checks for an installed Argos extension, unless `-a` was passed.
/// 3. Ensures the plugin's virtual environment exists.
/// 4. Copies the default config file (always overwriting).
/// 5. Installs the templated plugin script idempotently.
/// 6. Prints the summary.
///
/// The first failing step aborts the sequence; the error travels up to the
/// top-level handler in `main`, which owns all failure printing.
pub fn run(install_config: &InstallConfig) -> Result<(), InstallError> {
    let resolved = paths::resolve_paths(install_config);

    run_sequence(install_config, &resolved, host_check::argos_installed())?;
    print_summary(&resolved);
    Ok(())
}

/// The precondition gate followed by the three install steps. The Argos
/// presence probe is passed in as a value, so the gate's behavior can be
/// exercised against a scratch directory in tests; `run` feeds it the real
/// check.
fn run_sequence(
    install_config: &InstallConfig,
    resolved: &ResolvedPaths,
    argos_present: bool,
) -> Result<(), InstallError> {
    if install_config.assume_argos {
        report_skipped!("Skipping checking for argos (-a/--assume-argos passed)");
    } else if !argos_present {
        return Err(InstallError::HostNotPresent);
    }

    run_steps(install_config, resolved)
}

/// The three install steps, in their fixed order.
fn run_steps(
    install_config: &InstallConfig,
    resolved: &ResolvedPaths,
) -> Result<(), InstallError> {
    venv::create_virtualenv(&install_config.python_interpreter, &resolved.venv_dir)?;
    config::install_default_config_file(&resolved.config_source, &resolved.config_dest)?;
    plugin::install_plugin(
        &resolved.plugin_source,
        &resolved.plugin_dest,
        &resolved.venv_dir,
    )?;
    Ok(())
}

/// Bold summary of what was installed and where.
fn print_summary(resolved: &ResolvedPaths) {
    reporter::headline("Jira Timelog Critic plugin installed!");
    println!(
        "{}{}",
        "Installed Path: ".bold(),
        resolved.plugin_dest.display()
    );
    println!(
        "{}{}",
        "Virtual Env Path: ".bold(),
        resolved.venv_dir.display()
    );
}
