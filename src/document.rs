//! Bibliography document splitting and reassembly
//!
//! Entries are delimited by a blank line immediately followed by the `@`
//! entry marker. Splitting re-attaches the marker to every block after the
//! first so each block is self-contained; joining with a blank line restores
//! the original text byte-for-byte when no block was rewritten.

/// Delimiter between entries: blank line followed by the entry marker.
const DELIMITER: &str = "\n\n@";

/// A bibliography file as an ordered sequence of raw entry blocks.
///
/// The first block may be a preamble (comments, stray text) rather than an
/// entry; every later block starts with `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibDocument {
    blocks: Vec<String>,
}

impl BibDocument {
    /// Split source text into entry blocks.
    ///
    /// A document without the delimiter yields a single block holding the
    /// whole text.
    pub fn parse(text: &str) -> Self {
        let blocks = text
            .split(DELIMITER)
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    part.to_string()
                } else {
                    format!("@{}", part)
                }
            })
            .collect();
        Self { blocks }
    }

    /// Raw entry blocks in document order.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Replace the block at `index` with rewritten text.
    pub fn replace(&mut self, index: usize, text: String) {
        self.blocks[index] = text;
    }

    /// Reassemble the document text.
    pub fn to_text(&self) -> String {
        self.blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reattaches_marker() {
        let doc = BibDocument::parse("@article{A,\n}\n\n@book{B,\n}");
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[0], "@article{A,\n}");
        assert_eq!(doc.blocks()[1], "@book{B,\n}");
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let text = "@article{A,\n  title = {One},\n}\n\n@book{B,\n  title = {Two},\n}\n";
        assert_eq!(BibDocument::parse(text).to_text(), text);
    }

    #[test]
    fn test_preamble_before_first_entry_survives() {
        let text = "% my library\n\n@article{A,\n}";
        let doc = BibDocument::parse(text);
        assert_eq!(doc.blocks()[0], "% my library");
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_document_without_entries_is_one_block() {
        let text = "no entries here\njust text\n";
        let doc = BibDocument::parse(text);
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_extra_blank_lines_are_preserved() {
        let text = "@article{A,\n}\n\n\n@book{B,\n}";
        assert_eq!(BibDocument::parse(text).to_text(), text);
    }

    #[test]
    fn test_replace_only_touches_one_block() {
        let mut doc = BibDocument::parse("@article{A,\n}\n\n@book{B,\n}");
        doc.replace(1, "@book{B2,\n}".to_string());
        assert_eq!(doc.to_text(), "@article{A,\n}\n\n@book{B2,\n}");
    }
}
