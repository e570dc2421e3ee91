//! Run diagnostics
//!
//! The pipeline reports through this seam instead of printing, so callers
//! can route diagnostics wherever they want; the console implementation
//! reproduces the tool's terminal output.

use crate::filename::DeriveError;

/// Sink for per-entry diagnostics.
pub trait Reporter {
    /// The referenced attachment was found at neither candidate location.
    fn attachment_missing(&mut self, path: &str);

    /// No canonical filename could be derived; the entry stays unchanged.
    fn derive_failed(&mut self, path: &str, error: &DeriveError);

    /// An attachment does not match the naming convention; a rename from
    /// `old` to `new` is about to be offered.
    fn rename_proposed(&mut self, old: &str, new: &str);

    /// A prompt was declined; the entry's reference stays unchanged.
    fn skipped(&mut self, path: &str);

    /// The filesystem move failed; the entry's reference stays unchanged.
    fn move_failed(&mut self, path: &str, error: &std::io::Error);
}

/// Reporter that prints to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn attachment_missing(&mut self, path: &str) {
        println!("File {} does not exist.", path);
    }

    fn derive_failed(&mut self, path: &str, error: &DeriveError) {
        eprintln!("Cannot derive a filename for {}: {}.", path, error);
    }

    fn rename_proposed(&mut self, old: &str, new: &str) {
        println!("Found an attached file, which does not match file naming convention:");
        println!("{} -> {}", old, new);
    }

    fn skipped(&mut self, _path: &str) {
        println!("Skipping file.");
    }

    fn move_failed(&mut self, path: &str, error: &std::io::Error) {
        eprintln!("Could not move {}: {}.", path, error);
    }
}
