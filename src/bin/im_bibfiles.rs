//! Command-line interface

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use im_bibfiles::{
    process_file, AttachError, AttachResult, Confirm, ConsoleReporter, FilenameOptions,
    MovePolicy,
};

#[derive(Parser, Debug)]
#[command(
    name = "im-bibfiles",
    version,
    about = "Normalize attached-file names in a BibTeX bibliography"
)]
struct Cli {
    /// Bibliography file to process
    filename: PathBuf,

    /// Maximum length of generated filenames
    #[arg(short = 'l', long, default_value_t = 100)]
    length: usize,

    /// Move/rename attached files without asking
    #[arg(short = 'm', long)]
    move_all: bool,

    /// Overwrite existing destination files without asking
    #[arg(short = 'o', long)]
    overwrite_all: bool,
}

/// Blocking terminal prompt; accepts only a yes/no answer and asks again on
/// anything else.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> AttachResult<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| AttachError::Prompt(e.to_string()))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = FilenameOptions {
        max_length: cli.length,
    };
    let policy = MovePolicy {
        move_all: cli.move_all,
        overwrite_all: cli.overwrite_all,
    };

    match process_file(
        &cli.filename,
        &options,
        policy,
        &mut TerminalConfirm,
        &mut ConsoleReporter,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
