// This file implements the installer's console reporting system.
// Every user-visible line belongs to one of four fixed categories (action,
// notice, skipped, error), each mapped to a static colour, plus a bold
// headline mode for the final summary and a debug channel for tracing.

use colored::{ColoredString, Colorize}; // Used for adding color to report lines.
use std::sync::OnceLock; // Ensures the DEBUG_ENABLED flag is initialized exactly once.
use std::sync::atomic::{AtomicBool, Ordering}; // For thread-safe, atomic control of the debug flag.

/// The fixed set of message categories the installer can emit.
/// Each category carries exactly one static style; there are no
/// dynamically interpreted style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A step being performed (green).
    Action,
    /// Informational context, e.g. which interpreter was resolved (blue).
    Notice,
    /// A step skipped because the installed state already matches (dimmed).
    Skipped,
    /// A fatal failure (red).
    Error,
}

impl Category {
    /// Applies the category's static style to a message.
    fn paint(self, msg: &str) -> ColoredString {
        match self {
            Category::Action => msg.green(),
            Category::Notice => msg.blue(),
            Category::Skipped => msg.dimmed(),
            Category::Error => msg.red(),
        }
    }
}

/// Prints one report line in the category's style.
/// Errors go to stderr; everything else goes to stdout.
pub fn emit(category: Category, msg: &str) {
    match category {
        Category::Error => eprintln!("{}", category.paint(msg)),
        _ => println!("{}", category.paint(msg)),
    }
}

/// Prints a bolded headline line, used for the final install summary.
pub fn headline(msg: &str) {
    println!("{}", msg.bold());
}

/// Provides convenient reporting macros.
/// `#[macro_export]` makes these macros globally available within the crate.

// `report_action!` for steps the installer is actively performing.
#[macro_export]
macro_rules! report_action {
    ($($arg:tt)*) => ($crate::reporter::emit($crate::reporter::Category::Action, &format!($($arg)*)));
}

// `report_notice!` for informational context around the install.
#[macro_export]
macro_rules! report_notice {
    ($($arg:tt)*) => ($crate::reporter::emit($crate::reporter::Category::Notice, &format!($($arg)*)));
}

// `report_skipped!` for steps skipped by an idempotence check.
#[macro_export]
macro_rules! report_skipped {
    ($($arg:tt)*) => ($crate::reporter::emit($crate::reporter::Category::Skipped, &format!($($arg)*)));
}

// `report_error!` for fatal failures requiring immediate attention.
#[macro_export]
macro_rules! report_error {
    ($($arg:tt)*) => ($crate::reporter::emit($crate::reporter::Category::Error, &format!($($arg)*)));
}

// `log_debug!` traces internals (resolved paths, subprocess invocations).
// It stays silent unless `--debug` turned the gate on.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::reporter::is_debug_enabled() {
           eprintln!("{} {}", colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

// Whether `--debug` was passed. Set once in `init` and read by the macro
// above for the rest of the run.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Records the `--debug` flag. Called once from `main`, right after
/// argument parsing and before anything is reported.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);
}

/// True when debug tracing was requested. Without a prior `init` call the
/// gate stays closed.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
