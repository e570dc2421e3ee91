//! Field extraction over raw entry text
//!
//! Entries are never parsed into a structured form. Each query runs an
//! independent pattern match against the raw block; the attachment lookup
//! additionally reports the exact byte span of the path so the rewriter can
//! splice a replacement without touching any other byte.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `{:<path>:<EXT>}` attachment annotation; group 1 is the path.
    static ref ATTACHED_FILE: Regex = Regex::new(r"\{:(.+):[A-Za-z]{3}\}").unwrap();
    /// One `name = value` line; group 1 is the name, group 2 the value text.
    static ref FIELD_LINE: Regex =
        Regex::new(r"(?m)^[ \t]*([A-Za-z]+)[ \t]*=[ \t]*(.+)$").unwrap();
    /// Text between the outermost braces of a field value.
    static ref BRACED: Regex = Regex::new(r"\{(.+)\}").unwrap();
}

/// An attachment reference located inside an entry block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile<'a> {
    /// Path exactly as written in the entry.
    pub path: &'a str,
    /// Byte offset of the first path byte within the entry.
    pub start: usize,
    /// Byte offset one past the last path byte.
    pub end: usize,
}

/// Entry type: the text preceding the field-list brace, without the leading
/// `@` marker.
///
/// Returns `None` for blocks with no field list (e.g. a preamble block).
pub fn entry_type(entry: &str) -> Option<&str> {
    let head = &entry[..entry.find('{')?];
    let line = head.rsplit('\n').next()?;
    let name = line.trim().trim_start_matches('@').trim();
    (!name.is_empty()).then_some(name)
}

/// Locate the attached-file reference, if any.
///
/// Offsets are byte positions of the path within `entry`, suitable for
/// [`rewrite_attachment`].
pub fn attached_file(entry: &str) -> Option<AttachedFile<'_>> {
    let caps = ATTACHED_FILE.captures(entry)?;
    let m = caps.get(1)?;
    Some(AttachedFile {
        path: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}

/// Value of a `name = {value}` field line: the text between the outermost
/// braces.
///
/// Field names match case-insensitively. A field whose value is not brace
/// wrapped (e.g. a bare numeric year) is treated as absent.
pub fn field_value<'a>(entry: &'a str, name: &str) -> Option<&'a str> {
    FIELD_LINE
        .captures_iter(entry)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| {
            let value = caps.get(2)?.as_str();
            Some(BRACED.captures(value)?.get(1)?.as_str())
        })
}

/// Reduce one author-name fragment to its surname.
///
/// `"Last, First"` yields the last token before the comma; `"First Last"`
/// yields the final whitespace-delimited token. An empty fragment yields an
/// empty string.
pub fn surname(fragment: &str) -> &str {
    let name = match fragment.find(',') {
        Some(pos) => &fragment[..pos],
        None => fragment,
    };
    name.split_whitespace().last().unwrap_or("")
}

/// Replace the attachment path span with `new_path`, leaving every other
/// byte of the entry untouched.
pub fn rewrite_attachment(entry: &str, file: &AttachedFile<'_>, new_path: &str) -> String {
    let mut out =
        String::with_capacity(entry.len() - (file.end - file.start) + new_path.len());
    out.push_str(&entry[..file.start]);
    out.push_str(new_path);
    out.push_str(&entry[file.end..]);
    out
}
