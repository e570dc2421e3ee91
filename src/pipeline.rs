//! Sequential per-entry processing
//!
//! Entries are processed strictly in document order, one at a time: a later
//! entry's destination checks must observe the moves earlier entries already
//! performed. Prompts block the run until answered (or until a
//! pre-authorization flag answers for them).

use std::fs;
use std::path::Path;

use crate::document::BibDocument;
use crate::entry::{attached_file, rewrite_attachment};
use crate::error::AttachResult;
use crate::filename::{plan_attachment, FilenameOptions};
use crate::mover::{locate_source, move_attachment};
use crate::report::Reporter;
use crate::resolve::{resolve, Confirm, MovePolicy, Resolution};

/// Process every entry of `doc` against the filesystem rooted at `doc_dir`.
///
/// Blocks are rewritten in place; the caller persists the reassembled text.
/// Per-entry problems are reported and skipped; only a broken confirmation
/// channel aborts.
pub fn process_document(
    doc: &mut BibDocument,
    doc_dir: &Path,
    options: &FilenameOptions,
    policy: MovePolicy,
    confirm: &mut dyn Confirm,
    reporter: &mut dyn Reporter,
) -> AttachResult<()> {
    for index in 0..doc.blocks().len() {
        let rewritten = process_entry(
            doc.blocks()[index].as_str(),
            doc_dir,
            options,
            policy,
            confirm,
            reporter,
        )?;
        if let Some(text) = rewritten {
            doc.replace(index, text);
        }
    }
    Ok(())
}

/// Run one entry through the pipeline, returning rewritten text when its
/// attachment was moved.
fn process_entry(
    block: &str,
    doc_dir: &Path,
    options: &FilenameOptions,
    policy: MovePolicy,
    confirm: &mut dyn Confirm,
    reporter: &mut dyn Reporter,
) -> AttachResult<Option<String>> {
    let Some(file) = attached_file(block) else {
        return Ok(None);
    };

    let Some(source) = locate_source(doc_dir, file.path) else {
        reporter.attachment_missing(file.path);
        return Ok(None);
    };

    let plan = match plan_attachment(block, file.path, doc_dir, options) {
        Ok(plan) => plan,
        Err(err) => {
            reporter.derive_failed(file.path, &err);
            return Ok(None);
        }
    };

    if plan.final_path == plan.old_path {
        return Ok(None);
    }

    reporter.rename_proposed(&plan.old_path, &plan.final_path);

    let dest_occupied = doc_dir.join(&plan.final_path).is_file();
    match resolve(dest_occupied, policy, confirm)? {
        Resolution::Move => {}
        Resolution::DeclinedMove | Resolution::DeclinedOverwrite => {
            reporter.skipped(&plan.old_path);
            return Ok(None);
        }
    }

    if let Err(err) = move_attachment(doc_dir, &source, &plan) {
        reporter.move_failed(&plan.old_path, &err);
        return Ok(None);
    }

    Ok(Some(rewrite_attachment(block, &file, &plan.final_path)))
}

/// Read, process, and rewrite a bibliography file in place.
///
/// Failure to read or write the file aborts the run with no partial write;
/// everything else is entry-scoped and reported.
pub fn process_file(
    path: &Path,
    options: &FilenameOptions,
    policy: MovePolicy,
    confirm: &mut dyn Confirm,
    reporter: &mut dyn Reporter,
) -> AttachResult<()> {
    let text = fs::read_to_string(path)?;
    let doc_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut doc = BibDocument::parse(&text);
    process_document(&mut doc, doc_dir, options, policy, confirm, reporter)?;
    fs::write(path, doc.to_text())?;
    Ok(())
}
