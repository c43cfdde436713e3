//! Primitives of the nested CS/CE block syntax.
//!
//! A block opens with a `CS:` line, carries body lines and child blocks one
//! tab deeper, and closes with a bare `CE:` at its own depth:
//!
//! ```text
//! CS:TestLU^LU^Logical Unit^N^N
//! 	A:Prompt^Test Logical Unit^
//! 	CS:TEST_VIEW^LU^View^N^N
//! 	CE:
//! CE:
//! ```

use std::borrow::Cow;

use super::FileKind;

pub const LINE_END: &str = "\r\n";
pub const INDENT: char = '\t';

pub const CS_PREFIX: &str = "CS:";
pub const CE_LINE: &str = "CE:";
pub const PROMPT_PREFIX: &str = "A:Prompt^";
pub const ORIGINAL_PREFIX: &str = "P:";
pub const FIELD_SEPARATOR: char = '^';

/// Joins the lines of a multi-line label with single spaces.
///
/// Body lines hold exactly one physical line, so every CR/LF run (and the
/// blanks around it) becomes one space. Single-line text is borrowed as is.
pub fn single_line(text: &str) -> Cow<'_, str> {
    if !text.contains(['\r', '\n']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.split(['\r', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// The level of the resource tree a block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    LogicalUnit,
    View,
    Column,
}

impl NodeKind {
    /// Sub type name written as the third field of a definition `CS:` line.
    pub fn subtype_name(&self) -> &'static str {
        match self {
            NodeKind::LogicalUnit => "Logical Unit",
            NodeKind::View => "View",
            NodeKind::Column => "Column",
        }
    }
}

/// Renders an opening line without indentation or terminator.
///
/// # Example
/// ```rust
/// use ifslang::formats::{FileKind, block::{NodeKind, cs_line}};
/// assert_eq!(cs_line(FileKind::Definition, "C_X", NodeKind::Column), "CS:C_X^LU^Column^N^N");
/// assert_eq!(cs_line(FileKind::Translation, "C_X", NodeKind::Column), "CS:C_X^LU");
/// ```
pub fn cs_line(kind: FileKind, identifier: &str, node: NodeKind) -> String {
    match kind {
        FileKind::Definition => format!(
            "{}{}^LU^{}^N^N",
            CS_PREFIX,
            identifier,
            node.subtype_name()
        ),
        FileKind::Translation => format!("{}{}^LU", CS_PREFIX, identifier),
    }
}

/// Incremental writer that keeps track of the current nesting depth.
///
/// Every line is prefixed with one tab per open block and terminated with
/// CRLF. [`BlockWriter::close`] on a writer with no open block is a no-op, so
/// the output is always balanced as long as every `open` is matched.
#[derive(Debug)]
pub struct BlockWriter {
    kind: FileKind,
    depth: usize,
    out: String,
}

impl BlockWriter {
    pub fn new(kind: FileKind) -> Self {
        BlockWriter {
            kind,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Number of blocks currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn line(&mut self, content: &str) {
        self.out.extend(std::iter::repeat_n(INDENT, self.depth));
        self.out.push_str(content);
        self.out.push_str(LINE_END);
    }

    /// Writes a `CS:` line and enters the block.
    pub fn open(&mut self, identifier: &str, node: NodeKind) {
        let line = cs_line(self.kind, identifier, node);
        self.line(&line);
        self.depth += 1;
    }

    /// Writes an `A:Prompt^<label>^` body line.
    pub fn prompt(&mut self, label: &str) {
        self.line(&format!(
            "{}{}{}",
            PROMPT_PREFIX,
            single_line(label),
            FIELD_SEPARATOR
        ));
    }

    /// Writes a `P:<label>^` body line carrying the untranslated text.
    pub fn original(&mut self, label: &str) {
        self.line(&format!(
            "{}{}{}",
            ORIGINAL_PREFIX,
            single_line(label),
            FIELD_SEPARATOR
        ));
    }

    /// Leaves the current block and writes its `CE:` line.
    pub fn close(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;
        self.line(CE_LINE);
    }

    /// Returns the text written so far.
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtype_names() {
        assert_eq!(NodeKind::LogicalUnit.subtype_name(), "Logical Unit");
        assert_eq!(NodeKind::View.subtype_name(), "View");
        assert_eq!(NodeKind::Column.subtype_name(), "Column");
    }

    #[test]
    fn test_cs_line_field_counts() {
        for node in [NodeKind::LogicalUnit, NodeKind::View, NodeKind::Column] {
            let def = cs_line(FileKind::Definition, "ID", node);
            assert_eq!(def.split(FIELD_SEPARATOR).count(), 5);
            let trs = cs_line(FileKind::Translation, "ID", node);
            assert_eq!(trs.split(FIELD_SEPARATOR).count(), 2);
        }
    }

    #[test]
    fn test_writer_indents_by_depth() {
        let mut w = BlockWriter::new(FileKind::Translation);
        w.open("LU", NodeKind::LogicalUnit);
        w.open("VIEW", NodeKind::View);
        w.open("C_COL", NodeKind::Column);
        assert_eq!(w.depth(), 3);
        w.original("Label");
        w.prompt("Etikett");
        w.close();
        w.close();
        w.close();
        assert_eq!(w.depth(), 0);
        assert_eq!(
            w.finish(),
            "CS:LU^LU\r\n\tCS:VIEW^LU\r\n\t\tCS:C_COL^LU\r\n\t\t\tP:Label^\r\n\t\t\tA:Prompt^Etikett^\r\n\t\tCE:\r\n\tCE:\r\nCE:\r\n"
        );
    }

    #[test]
    fn test_close_without_open_is_ignored() {
        let mut w = BlockWriter::new(FileKind::Definition);
        w.close();
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn test_single_line() {
        assert!(matches!(single_line("Test Field"), Cow::Borrowed("Test Field")));
        assert_eq!(single_line("Line one\r\nLine two"), "Line one Line two");
        assert_eq!(single_line("a \n\n  b\rc\n"), "a b c");
        assert_eq!(single_line("\r\n"), "");
    }

    #[test]
    fn test_multi_line_labels_stay_on_one_line() {
        let mut w = BlockWriter::new(FileKind::Translation);
        w.open("C_X", NodeKind::Column);
        w.original("Line one\r\nLine two");
        w.prompt("Rad ett\nRad två");
        w.close();
        assert_eq!(
            w.finish(),
            "CS:C_X^LU\r\n\tP:Line one Line two^\r\n\tA:Prompt^Rad ett Rad två^\r\nCE:\r\n"
        );
    }

    #[test]
    fn test_empty_prompt() {
        let mut w = BlockWriter::new(FileKind::Definition);
        w.prompt("");
        assert_eq!(w.finish(), "A:Prompt^^\r\n");
    }
}
