// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Styling for kata's stderr diagnostics.
//!
//! Results on stdout are never styled so they can be piped and diffed.
//! Diagnostics get plain 16-color ANSI codes when stderr is a terminal and
//! `NO_COLOR` is unset.

const RESET: &str = "\x1b[0m";
const BOLD_RED: &str = "\x1b[1;31m";
const DIM: &str = "\x1b[2m";

/// Check if stderr should be colored
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Wrap `text` in `style` when `enabled`.
fn paint(enabled: bool, style: &str, text: &str) -> String {
    if enabled {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Format a fatal error line: `error: <message>`
pub fn error_line(message: &str) -> String {
    format!("{} {}", paint(use_colors(), BOLD_RED, "error:"), message)
}

/// Format a dimmed hint line
pub fn hint_line(message: &str) -> String {
    paint(use_colors(), DIM, message)
}
