//! Diagnostics for `--debug` (or `debug = true` in the config file).
//!
//! Lines go to stderr so prompt and JSON output on stdout stay clean.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Print a `[DEBUG]` line to stderr when debug output is on
pub(crate) fn debug_log(args: fmt::Arguments<'_>) {
    if debug_enabled() {
        eprintln!("[DEBUG] {args}");
    }
}
