// Path resolution for the installer.
// All fixed Argos locations and filename templates live here, and
// `resolve_paths` turns them into one immutable `ResolvedPaths` value at
// startup, so no other component touches a raw path template.

use crate::log_debug;
use crate::schema::{InstallConfig, ResolvedPaths};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

/// The Argos configuration directory, where plugins, their config files and
/// the plugin venv all live.
pub const ARGOS_CONFIG_DIR: &str = "~/.config/argos";
/// Name of the default config file, both in the source dir and at the
/// destination. (A `jira.custom.ini` next to it holds user overrides; this
/// installer never touches that file.)
pub const DEFAULT_CONFIG_FILE: &str = "jira.default.ini";
/// Name of the plugin source template shipped alongside the installer.
pub const PLUGIN_FILE: &str = "jira-timelog-critic.py.in";
/// Name of the venv directory inside the Argos config dir.
pub const VENV_NAME: &str = "venv";
/// Path of the venv's interpreter, relative to the venv root. Used to build
/// the plugin's shebang line.
pub const VENV_PYTHON_RELATIVE_PATH: &str = "bin/python";

/// Expands a leading `~` in a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Builds the installed plugin's filename from the execution frequency and
/// the rerun flag, following the Argos naming scheme
/// `<name>.<position>.<interval><+ if rerun>.py`.
///
/// The `position` segment is always empty here (Argos uses it to order
/// multiple plugins; this installer manages a single one), which is why the
/// produced names contain a double dot, e.g. `jira-timelog-critic..5m.py`.
pub fn build_plugin_name(execution_frequency: &str, rerun_on_dropdown: bool) -> String {
    format!(
        "jira-timelog-critic.{position}.{interval}{dropdown_run}.py",
        position = "",
        interval = execution_frequency,
        dropdown_run = if rerun_on_dropdown { "+" } else { "" }
    )
}

/// Determines the directory the installer binary lives in, which is where the
/// plugin template and the default config file are expected.
/// Falls back to the current directory if the executable path cannot be
/// determined.
fn installer_source_dir() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(err) => {
            log_debug!("Could not determine installer location ({err}), using current directory");
            PathBuf::from(".")
        }
    }
}

/// Resolves every filesystem location the installation touches.
///
/// This is the only place paths are computed; the returned `ResolvedPaths`
/// is handed read-only to the provisioning and install steps.
pub fn resolve_paths(config: &InstallConfig) -> ResolvedPaths {
    let argos_dir = expand_tilde(ARGOS_CONFIG_DIR);
    let source_dir = installer_source_dir();
    let paths = derive_paths(&argos_dir, &source_dir, config);

    log_debug!("Argos config dir: {}", argos_dir.display().to_string().cyan());
    log_debug!("Installer source dir: {}", source_dir.display().to_string().cyan());
    log_debug!("Plugin destination: {}", paths.plugin_dest.display().to_string().cyan());

    paths
}

/// Derives all destination and source paths from the two base directories.
/// Split out from `resolve_paths` so the derivation is testable without
/// touching the real home directory.
pub fn derive_paths(argos_dir: &Path, source_dir: &Path, config: &InstallConfig) -> ResolvedPaths {
    let plugin_name = build_plugin_name(&config.execution_frequency, config.rerun_on_dropdown);

    ResolvedPaths {
        plugin_source: source_dir.join(PLUGIN_FILE),
        plugin_dest: argos_dir.join(plugin_name),
        config_source: source_dir.join(DEFAULT_CONFIG_FILE),
        config_dest: argos_dir.join(DEFAULT_CONFIG_FILE),
        venv_dir: argos_dir.join(VENV_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(frequency: &str, rerun: bool) -> InstallConfig {
        InstallConfig {
            python_interpreter: PathBuf::from("/usr/bin/python3"),
            execution_frequency: frequency.to_string(),
            assume_argos: false,
            rerun_on_dropdown: rerun,
        }
    }

    #[test]
    fn test_plugin_name_encodes_interval() {
        assert_eq!(build_plugin_name("5m", false), "jira-timelog-critic..5m.py");
        assert_eq!(build_plugin_name("30s", false), "jira-timelog-critic..30s.py");
    }

    #[test]
    fn test_plugin_name_encodes_rerun_flag() {
        assert_eq!(build_plugin_name("1h", true), "jira-timelog-critic..1h+.py");
        // Same interval without the flag must produce a distinct file.
        assert_ne!(build_plugin_name("1h", true), build_plugin_name("1h", false));
    }

    #[test]
    fn test_derived_paths_layout() {
        let argos_dir = Path::new("/home/user/.config/argos");
        let source_dir = Path::new("/opt/installer");
        let paths = derive_paths(argos_dir, source_dir, &config("5m", false));

        assert_eq!(paths.venv_dir, argos_dir.join("venv"));
        assert_eq!(paths.config_dest, argos_dir.join("jira.default.ini"));
        assert_eq!(paths.config_source, source_dir.join("jira.default.ini"));
        assert_eq!(paths.plugin_source, source_dir.join("jira-timelog-critic.py.in"));
        assert_eq!(paths.plugin_dest, argos_dir.join("jira-timelog-critic..5m.py"));
    }

    #[test]
    fn test_distinct_configurations_never_collide() {
        let argos_dir = Path::new("/home/user/.config/argos");
        let source_dir = Path::new("/opt/installer");
        let a = derive_paths(argos_dir, source_dir, &config("5m", false));
        let b = derive_paths(argos_dir, source_dir, &config("1h", true));
        assert_ne!(a.plugin_dest, b.plugin_dest);
    }
}
