//! Network activity spinner for human-mode commands.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a steady-tick spinner with the given message. Call
/// `finish_and_clear` once the request resolves.
#[must_use]
pub fn network_spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
