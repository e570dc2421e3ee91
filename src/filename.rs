//! Canonical filename derivation and sanitization
//!
//! The base name an attachment should carry is a pure function of the
//! entry's type and fields: `Standard` entries (standards documents) are
//! named `{type}_{number}_{revision}`, everything else
//! `{authors} - {year} - {title}`. The sanitized, length-capped base is then
//! rooted at an entry-type subfolder with the original extension preserved.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::{entry_type, field_value, surname};

lazy_static! {
    /// Characters that are unsafe in filenames on at least one platform.
    static ref UNSAFE_CHARS: Regex = Regex::new(r#"[/\\?%*:|"<>]"#).unwrap();
}

/// Entry type whose attachments are named `{type}_{number}_{revision}`.
const STANDARD_TYPE: &str = "Standard";

/// More surnames than this are collapsed to `et al.`.
const MAX_AUTHORS: usize = 3;

/// Options controlling filename generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameOptions {
    /// Maximum length of the sanitized base name, in characters. The
    /// entry-type subfolder and the file extension do not count against it.
    pub max_length: usize,
}

impl Default for FilenameOptions {
    fn default() -> Self {
        Self { max_length: 100 }
    }
}

/// A filename could not be derived for an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// A field required by the entry's naming policy is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// No entry type precedes the field list
    #[error("entry has no recognizable type")]
    MissingEntryType,
}

/// The planned rename for one entry's attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlan {
    /// Path as currently written in the entry.
    pub old_path: String,
    /// Derived base name, before sanitization.
    pub candidate: String,
    /// `<entryType>/<sanitized truncated base><extension>`.
    pub final_path: String,
    /// The destination subfolder did not exist when the plan was computed.
    pub requires_subfolder: bool,
}

/// Compute the rename plan for an entry with an attachment at `old_path`.
pub fn plan_attachment(
    entry: &str,
    old_path: &str,
    doc_dir: &Path,
    options: &FilenameOptions,
) -> Result<AttachmentPlan, DeriveError> {
    let kind = entry_type(entry).ok_or(DeriveError::MissingEntryType)?;
    let candidate = derive_base(entry, kind)?;
    let final_path = compose_path(kind, &sanitize(&candidate), old_path, options);
    Ok(AttachmentPlan {
        old_path: old_path.to_string(),
        candidate,
        final_path,
        requires_subfolder: !doc_dir.join(kind).is_dir(),
    })
}

/// Derive the raw base name for an entry of the given type.
pub fn derive_base(entry: &str, kind: &str) -> Result<String, DeriveError> {
    let field = |name: &'static str| {
        field_value(entry, name).ok_or(DeriveError::MissingField(name))
    };
    if kind == STANDARD_TYPE {
        Ok(format!("{}_{}_{}", field("type")?, field("number")?, field("revision")?))
    } else {
        Ok(format!(
            "{} - {} - {}",
            format_authors(field("author")?),
            field("year")?,
            field("title")?
        ))
    }
}

/// Format an author field for a filename: surnames joined with `", "`,
/// capped at three names with `" et al."` appended beyond that.
pub fn format_authors(field: &str) -> String {
    let surnames: Vec<&str> = field.split(" and ").map(surname).collect();
    if surnames.len() > MAX_AUTHORS {
        format!("{} et al.", surnames[..MAX_AUTHORS].join(", "))
    } else {
        surnames.join(", ")
    }
}

/// Strip filesystem-unsafe characters from a candidate base name.
pub fn sanitize(base: &str) -> String {
    UNSAFE_CHARS.replace_all(base, "").into_owned()
}

/// Assemble the final reference path: entry-type subfolder, base truncated
/// to the configured character count, and the old path's extension.
pub fn compose_path(kind: &str, base: &str, old_path: &str, options: &FilenameOptions) -> String {
    let truncated: String = base.chars().take(options.max_length).collect();
    match Path::new(old_path).extension() {
        Some(ext) => format!("{}/{}.{}", kind, truncated, ext.to_string_lossy()),
        None => format!("{}/{}", kind, truncated),
    }
}
