//! Support for IFS Foundation language definition files (`.lng`).
//!
//! A definition file declares the base-language prompt of every logical unit
//! and custom column. Every `CS:` line carries five fields:
//! `CS:<identifier>^LU^<Logical Unit|View|Column>^N^N`.

use super::{
    FileKind,
    block::{BlockWriter, NodeKind},
    header::Header,
};
use crate::{traits::Encoder, types::ResourceTree};

/// A definition file ready to be written: header values plus the tree to encode.
#[derive(Debug, Clone)]
pub struct Format<'a> {
    pub header: Header,
    pub tree: &'a ResourceTree,
}

impl<'a> Format<'a> {
    /// Uses the tree's module and layer for the header.
    pub fn new(tree: &'a ResourceTree) -> Self {
        Format {
            header: Header::new(FileKind::Definition, &tree.module, &tree.layer, None),
            tree,
        }
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }
}

impl Encoder for Format<'_> {
    fn encode(&self) -> String {
        let mut out = self.header.encode();
        out.push_str(&encode_blocks(self.tree));
        out
    }
}

/// Renders the block section (everything after the header) of a definition file.
///
/// Only custom columns are written. Views without custom columns still get
/// an empty block; dropping them is [`ResourceTree::filter_custom`]'s job.
pub fn encode_blocks(tree: &ResourceTree) -> String {
    let mut w = BlockWriter::new(FileKind::Definition);
    for unit in tree.logical_units.values() {
        w.open(&unit.name, NodeKind::LogicalUnit);
        w.prompt(&unit.label);
        for view in unit.views.values() {
            w.open(&view.control, NodeKind::View);
            for column in view.custom_columns() {
                w.open(&column.control, NodeKind::Column);
                w.prompt(&column.label);
                w.close();
            }
            w.close();
        }
        w.close();
    }
    w.finish()
}
