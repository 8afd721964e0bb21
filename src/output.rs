//! Console output formatting.
//!
//! Styled, human-readable messages and the end-of-run summary.

use crate::types::AddrRange;
use console::style;
use std::path::Path;

/// Print a run header before generation begins.
pub fn print_run_header(range: &AddrRange) {
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("quickscope").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Range: {} - {} ({}, {} addresses)",
        style("•").dim(),
        style(range.start()).white().bold(),
        style(range.end()).white().bold(),
        range.family(),
        range.len()
    );
}

/// Print the end-of-run summary.
pub fn print_summary(generated: u128, written: usize, output: &Path) {
    let excluded = generated - written as u128;
    println!(
        "{} {} generated, {} excluded, {} written",
        style("•").dim(),
        generated,
        excluded,
        style(written).white().bold()
    );
    print_success(&format!("IP list written to {}", output.display()));
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}
