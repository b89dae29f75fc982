use colored::*;
use humansize::{format_size, BINARY};

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn print_preview(msg: &str) {
    println!("{} {}", "dry-run".yellow().bold(), msg);
}

pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}
