//! Color support with NO_COLOR and CLICOLOR environment variable handling
//!
//! Implements the NO_COLOR standard (https://no-color.org/) and traditional
//! CLICOLOR conventions for disabling terminal colors.
//!
//! **Environment Variables**:
//! - `NO_COLOR`: If set (to any value), disable colors
//! - `CLICOLOR`: If set to 0, disable colors
//! - `CLICOLOR_FORCE`: If set to non-zero, force colors even when not a TTY
//!
//! Only diagnostics on stderr are colored; rendered fruit records stay plain
//! so they can be redirected or parsed.

use colored::control;

/// Initialize color support by checking environment variables and TTY status
pub fn init_colors() {
    control::set_override(should_colorize(
        |key| std::env::var(key).ok(),
        std::io::IsTerminal::is_terminal(&std::io::stderr()),
    ));
}

fn should_colorize(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    // NO_COLOR takes precedence over everything
    if var("NO_COLOR").is_some() {
        return false;
    }

    if var("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if var("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}
