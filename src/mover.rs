//! Filesystem move for attachments

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::filename::AttachmentPlan;

/// Locate the attachment on disk.
///
/// The path written in an entry is understood relative to the bibliography's
/// directory first; the literal path (absolute or CWD-relative) is the
/// fallback. Returns `None` when neither exists.
pub fn locate_source(doc_dir: &Path, old_path: &str) -> Option<PathBuf> {
    let relative = doc_dir.join(old_path);
    if relative.is_file() {
        return Some(relative);
    }
    let literal = PathBuf::from(old_path);
    literal.is_file().then_some(literal)
}

/// Move the attachment to `<doc_dir>/<final_path>`, creating the entry-type
/// subfolder first when the plan flagged it missing.
pub fn move_attachment(doc_dir: &Path, source: &Path, plan: &AttachmentPlan) -> io::Result<()> {
    let dest = doc_dir.join(&plan.final_path);
    if plan.requires_subfolder {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
    }
    rename_or_copy(source, &dest)
}

/// `fs::rename`, falling back to copy + remove when the destination is on a
/// different filesystem.
fn rename_or_copy(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(source, dest)?;
            fs::remove_file(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(final_path: &str, requires_subfolder: bool) -> AttachmentPlan {
        AttachmentPlan {
            old_path: "old.pdf".to_string(),
            candidate: String::new(),
            final_path: final_path.to_string(),
            requires_subfolder,
        }
    }

    #[test]
    fn test_locate_prefers_document_relative_path() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.pdf"), b"x").unwrap();
        let found = locate_source(tmp.path(), "a.pdf").unwrap();
        assert_eq!(found, tmp.path().join("a.pdf"));
    }

    #[test]
    fn test_locate_falls_back_to_literal_path() {
        let tmp = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let literal = elsewhere.path().join("b.pdf");
        fs::write(&literal, b"x").unwrap();
        let found = locate_source(tmp.path(), literal.to_str().unwrap()).unwrap();
        assert_eq!(found, literal);
    }

    #[test]
    fn test_locate_missing_everywhere() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(locate_source(tmp.path(), "nope.pdf").is_none());
    }

    #[test]
    fn test_move_creates_subfolder() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("old.pdf");
        fs::write(&source, b"content").unwrap();

        move_attachment(tmp.path(), &source, &plan("Article/new.pdf", true)).unwrap();

        assert!(!source.exists());
        let moved = fs::read(tmp.path().join("Article/new.pdf")).unwrap();
        assert_eq!(moved, b"content");
    }

    #[test]
    fn test_move_replaces_occupied_destination() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Article")).unwrap();
        let source = tmp.path().join("old.pdf");
        fs::write(&source, b"new content").unwrap();
        fs::write(tmp.path().join("Article/new.pdf"), b"stale").unwrap();

        move_attachment(tmp.path(), &source, &plan("Article/new.pdf", false)).unwrap();

        let moved = fs::read(tmp.path().join("Article/new.pdf")).unwrap();
        assert_eq!(moved, b"new content");
    }
}
