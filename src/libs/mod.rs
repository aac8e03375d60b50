// Shared helpers used across the installation steps.

// Presence check for the Argos GNOME-shell extension.
pub mod host_check;
// Fixed Argos locations, filename templates and path resolution.
pub mod paths;
