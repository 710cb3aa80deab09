//! Terminal color capability detection

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

static WINDOWS_COLORS: AtomicBool = AtomicBool::new(false);

/// Whether ANSI colors are safe to emit to `stream`.
///
/// Windows consoles only get colors once [`enable_windows_colors`] has
/// succeeded. Everywhere else colors follow whether the stream is an
/// interactive terminal; files and pipes never get them.
pub fn colors_supported<S: IsTerminal>(stream: &S) -> bool {
    if cfg!(windows) && !windows_colors_enabled() {
        return false;
    }
    stream.is_terminal()
}

/// [`colors_supported`] for process stdout
pub fn stdout_colors_supported() -> bool {
    colors_supported(&std::io::stdout())
}

/// [`colors_supported`] for process stderr
pub fn stderr_colors_supported() -> bool {
    colors_supported(&std::io::stderr())
}

/// Turn on ANSI processing for Windows consoles.
///
/// Returns whether the console accepted virtual terminal mode. A no-op
/// that returns `true` on other platforms.
pub fn enable_windows_colors() -> bool {
    #[cfg(windows)]
    let enabled = colored::control::set_virtual_terminal(true).is_ok();
    #[cfg(not(windows))]
    let enabled = true;

    WINDOWS_COLORS.store(enabled, Ordering::Relaxed);
    enabled
}

pub fn windows_colors_enabled() -> bool {
    WINDOWS_COLORS.load(Ordering::Relaxed)
}
