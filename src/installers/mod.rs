// This module acts as the central hub for the installation steps,
// publicly exposing one submodule per artifact the installer manages.
// The steps run in a fixed order: venv, then config, then plugin.

/// Declares the `venv` module, responsible for provisioning the plugin's
/// Python virtual environment by invoking the interpreter's `venv` facility.
pub(crate) mod venv;

/// Declares the `config` module, which copies the default config file into
/// the Argos config directory on every run.
pub(crate) mod config;

/// Declares the `plugin` module, which templates the plugin script with a
/// venv shebang, installs it idempotently and sets its execute permission.
pub(crate) mod plugin;
