// Precondition check for the Argos GNOME-shell extension.
// Purely an existence probe; the caller decides whether absence is fatal.

use crate::libs::paths::expand_tilde;

/// Where GNOME shell keeps the Argos extension when it is installed.
pub const ARGOS_EXTENSION_DIR: &str =
    "~/.local/share/gnome-shell/extensions/argos@pew.worldwidemann.com";

/// Returns whether an installed copy of the Argos extension is present.
/// Only the directory's existence is checked; nothing deeper.
pub fn argos_installed() -> bool {
    expand_tilde(ARGOS_EXTENSION_DIR).exists()
}
