//! Terminal status reporting for pipeline steps

use colored::*;
use console::{measure_text_width, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");

/// Start a spinner for a pipeline step.
pub fn step_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Finish a step spinner with a success line.
pub fn succeed(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{}{}", CHECK, message.green()));
}

/// Finish a step spinner with a failure line.
pub fn fail(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{}{}", CROSS, message.red()));
}

/// Draw a double-bordered notice block around the given lines.
///
/// Width accounts for ANSI escapes, so colored lines pad correctly.
pub fn notice_box(lines: &[String]) {
    let width = lines.iter().map(|l| measure_text_width(l)).max().unwrap_or(0);
    println!("╔{}╗", "═".repeat(width + 2));
    for line in lines {
        let pad = width - measure_text_width(line);
        println!("║ {}{} ║", line, " ".repeat(pad));
    }
    println!("╚{}╝", "═".repeat(width + 2));
}
