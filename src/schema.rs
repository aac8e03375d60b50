// src/schema.rs
// The data model shared by every stage of the installation sequence.
// Both structs are built exactly once at startup and never mutated afterwards;
// there is no hidden global state anywhere else in the installer.

use std::path::PathBuf;

/// The validated result of argument resolution.
/// Built once by the CLI layer, then handed read-only to every other
/// component.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Path to a Python 3 interpreter that exists and is executable
    /// (validated at parse time, or resolved from PATH).
    pub python_interpreter: PathBuf,
    /// How often Argos should execute the plugin, e.g. "5m" or "1h".
    /// Validated against the Argos interval pattern at parse time.
    pub execution_frequency: String,
    /// When true, the Argos-presence precondition check is skipped.
    pub assume_argos: bool,
    /// When true, the plugin also re-runs whenever the dropdown is opened,
    /// which Argos encodes as a `+` suffix on the interval in the filename.
    pub rerun_on_dropdown: bool,
}

/// Every filesystem location the installer touches, derived deterministically
/// from the `InstallConfig` and the fixed Argos filename templates.
/// Computed once at startup; read-only afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// The plugin source template shipped alongside the installer binary.
    pub plugin_source: PathBuf,
    /// Where the templated plugin script is installed. The filename encodes
    /// the execution frequency and the rerun flag, so different
    /// configurations land in different files instead of overwriting each
    /// other silently.
    pub plugin_dest: PathBuf,
    /// The default config file shipped alongside the installer binary.
    pub config_source: PathBuf,
    /// Where the default config file is copied to, inside the Argos config
    /// dir.
    pub config_dest: PathBuf,
    /// Root of the plugin's Python virtual environment.
    pub venv_dir: PathBuf,
}
