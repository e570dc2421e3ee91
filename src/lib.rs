//! im-bibfiles: attachment filename normalization for BibTeX bibliographies
//!
//! Scans a bibliography file for entries with attached files, derives the
//! canonical filename each attachment should carry (per entry-type policy),
//! moves the file into an entry-type subfolder next to the bibliography, and
//! rewrites the entry's file reference in place — touching no other byte of
//! the document.
//!
//! Features:
//! - Pattern-matching field extraction, no BibTeX grammar required
//! - Policy-based filename derivation (`Standard` entries vs. everything else)
//! - Filesystem-safe sanitization with a configurable length cap
//! - Two-level confirmation (move, then overwrite-if-occupied) with
//!   independent run-wide pre-authorization flags
//! - Offset-exact reference rewriting for byte-identical round trips

pub mod document;
pub mod entry;
pub mod error;
pub mod filename;
pub mod mover;
pub mod pipeline;
pub mod report;
pub mod resolve;

pub use document::BibDocument;
pub use entry::{
    attached_file, entry_type, field_value, rewrite_attachment, surname, AttachedFile,
};
pub use error::{AttachError, AttachResult};
pub use filename::{
    derive_base, format_authors, plan_attachment, sanitize, AttachmentPlan, DeriveError,
    FilenameOptions,
};
pub use mover::{locate_source, move_attachment};
pub use pipeline::{process_document, process_file};
pub use report::{ConsoleReporter, Reporter};
pub use resolve::{resolve, Confirm, MovePolicy, Resolution, MOVE_PROMPT, OVERWRITE_PROMPT};
