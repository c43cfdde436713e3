//! Reader for IFS `TranslatableResources` XML exports.
//!
//! ```xml
//! <TranslatableResources module="PROJ" layer="Cust" version="1" type="LU">
//!   <TranslatableResource ID="ActivityEstimate" name="ActivityEstimate" type="LU">
//!     <Text><![CDATA[Activity Estimate]]></Text>
//!     <Resource ID="v1" control="ACTIVITY_ESTIMATE" subtype="View">
//!       <Resource ID="c1" control="C_ACTUAL_COST" subtype="Column">
//!         <Text><![CDATA[C Actual Cost]]></Text>
//!       </Resource>
//!     </Resource>
//!   </TranslatableResource>
//! </TranslatableResources>
//! ```
//!
//! Labels are trimmed and line breaks inside them are joined with a single
//! space, since every label becomes one line of a generated file.
//!
//! Tags are matched by substring on their local name, so namespace prefixes
//! and vendor-specific tag variants are accepted. Every column is kept; use
//! [`ResourceTree::filter_custom`] to drop standard ones.

use std::{collections::HashMap, io::BufRead};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::block::single_line;
use crate::{
    error::Error,
    traits::Parser,
    types::{Column, LogicalUnit, ResourceTree, View, is_custom_control},
};

const LOGICAL_UNIT_TAG: &str = "TranslatableResource";
const RESOURCE_TAG: &str = "Resource";
const TEXT_TAG: &str = "Text";

impl Parser for ResourceTree {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut builder = TreeBuilder::default();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let frame = builder.start(e)?;
                    builder.stack.push(frame);
                }
                Ok(Event::Empty(ref e)) => {
                    let frame = builder.start(e)?;
                    builder.end(frame);
                }
                Ok(Event::End(_)) => {
                    if let Some(frame) = builder.stack.pop() {
                        builder.end(frame);
                    }
                }
                Ok(Event::Text(e)) => {
                    if builder.in_text() {
                        let text = e.unescape().map_err(Error::XmlParse)?;
                        builder.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if builder.in_text() {
                        builder.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }

        builder
            .tree
            .ok_or_else(|| Error::InvalidResource("document has no root element".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Root,
    Unit,
    View,
    Column,
    Text,
    Other,
}

#[derive(Default)]
struct TreeBuilder {
    tree: Option<ResourceTree>,
    unit: Option<LogicalUnit>,
    view: Option<View>,
    column: Option<Column>,
    text: String,
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn in_text(&self) -> bool {
        matches!(self.stack.last(), Some(Frame::Text))
    }

    fn start(&mut self, e: &BytesStart) -> Result<Frame, Error> {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
        let mut attrs = attributes(e)?;
        let is_resource = |subtype: &str, attrs: &HashMap<String, String>| {
            name.contains(RESOURCE_TAG) && attrs.get("subtype").map(String::as_str) == Some(subtype)
        };

        let frame = match self.stack.last().copied() {
            None => {
                self.tree = Some(root_from(&name, &mut attrs)?);
                Frame::Root
            }
            Some(Frame::Root) if name.contains(LOGICAL_UNIT_TAG) => {
                let id_attr = attrs.remove("ID");
                let name_attr = attrs
                    .remove("name")
                    .or_else(|| id_attr.clone())
                    .unwrap_or_default();
                let id = id_attr.unwrap_or_else(|| name_attr.clone());
                self.unit = Some(LogicalUnit {
                    unit_type: attrs.remove("type").unwrap_or_default(),
                    ..LogicalUnit::new(id, name_attr, "")
                });
                Frame::Unit
            }
            Some(Frame::Unit) if is_resource("View", &attrs) => match attrs.remove("control") {
                Some(control) => {
                    self.view = Some(View {
                        id: attrs.remove("ID").unwrap_or_default(),
                        ..View::new(control, "")
                    });
                    Frame::View
                }
                None => {
                    tracing::warn!("skipping view without 'control' attribute");
                    Frame::Other
                }
            },
            Some(Frame::View) if is_resource("Column", &attrs) => match attrs.remove("control") {
                Some(control) => {
                    self.column = Some(Column {
                        id: attrs.remove("ID").unwrap_or_default(),
                        is_custom: is_custom_control(&control),
                        control,
                        label: String::new(),
                    });
                    Frame::Column
                }
                None => {
                    tracing::warn!("skipping column without 'control' attribute");
                    Frame::Other
                }
            },
            Some(Frame::Unit | Frame::View | Frame::Column) if name.contains(TEXT_TAG) => {
                self.text.clear();
                Frame::Text
            }
            Some(_) => Frame::Other,
        };
        Ok(frame)
    }

    fn end(&mut self, frame: Frame) {
        match frame {
            Frame::Text => {
                let text = single_line(self.text.trim()).into_owned();
                let label = match self.stack.last() {
                    Some(Frame::Column) => self.column.as_mut().map(|c| &mut c.label),
                    Some(Frame::View) => self.view.as_mut().map(|v| &mut v.label),
                    Some(Frame::Unit) => self.unit.as_mut().map(|u| &mut u.label),
                    _ => None,
                };
                // First non-empty text child wins.
                if let Some(label) = label.filter(|l| l.is_empty()) {
                    label.push_str(&text);
                }
                self.text.clear();
            }
            Frame::Column => {
                if let (Some(column), Some(view)) = (self.column.take(), self.view.as_mut()) {
                    view.add_column(column);
                }
            }
            Frame::View => {
                if let (Some(view), Some(unit)) = (self.view.take(), self.unit.as_mut()) {
                    unit.add_view(view);
                }
            }
            Frame::Unit => {
                if let (Some(unit), Some(tree)) = (self.unit.take(), self.tree.as_mut()) {
                    tree.add_logical_unit(unit);
                }
            }
            Frame::Root | Frame::Other => {}
        }
    }
}

fn root_from(name: &str, attrs: &mut HashMap<String, String>) -> Result<ResourceTree, Error> {
    let module = attrs.remove("module").ok_or_else(|| {
        Error::InvalidResource(format!("root element <{}> missing 'module'", name))
    })?;
    let layer = attrs.remove("layer").ok_or_else(|| {
        Error::InvalidResource(format!("root element <{}> missing 'layer'", name))
    })?;
    Ok(ResourceTree {
        version: attrs.remove("version").unwrap_or_default(),
        export_type: attrs.remove("type").unwrap_or_default(),
        ..ResourceTree::new(module, layer)
    })
}

fn attributes(e: &BytesStart) -> Result<HashMap<String, String>, Error> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        attrs.insert(key, attr.unescape_value()?.to_string());
    }
    Ok(attrs)
}
