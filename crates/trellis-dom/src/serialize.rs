//! Markup serialization.
//!
//! The serializer walks an element depth-first and appends text to a
//! buffer. It keeps no state besides the current depth, performs no
//! escaping, and cannot fail: trees are kept acyclic at attach time and
//! the indentation written per line is capped at [`MAX_INDENT_UNITS`].
//!
//! Indentation is controlled per element by its indent depth bounds. An
//! element indents its children only while its own depth lies within
//! `min_indent_depth..=max_indent_depth`. A child whose only content is
//! non-blank text is emitted at its parent's depth instead of one level
//! deeper, so text-only elements read as inline content.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::document::Document;
use crate::node::ElementId;

/// Most indentation units written in front of a single line.
///
/// Depths past this still serialize, they just stop growing the margin.
/// Also the largest `start_depth` accepted from a config file.
pub const MAX_INDENT_UNITS: usize = 1024;

/// Whether the serializer injects newlines and indentation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Newline before every child and indentation within the depth bounds.
    #[default]
    Pretty,
    /// Tags and text back to back.
    NoFormatting,
}

/// Serializer configuration.
///
/// Every field has a default, so a partial config such as
/// `{"mode": "no-formatting"}` deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Formatting mode.
    pub mode: Mode,
    /// One indentation unit, repeated `depth` times.
    pub indent: String,
    /// Depth assigned to the root element.
    #[serde(deserialize_with = "bounded_start_depth")]
    pub start_depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Pretty,
            indent: "  ".to_string(),
            start_depth: 1,
        }
    }
}

impl SerializeOptions {
    /// Default options with the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replace the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Replace the depth of the root element.
    #[must_use]
    pub const fn with_start_depth(mut self, depth: usize) -> Self {
        self.start_depth = depth;
        self
    }
}

fn bounded_start_depth<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let depth = usize::deserialize(deserializer)?;
    if depth > MAX_INDENT_UNITS {
        return Err(serde::de::Error::custom(format!(
            "start_depth {depth} exceeds the maximum of {MAX_INDENT_UNITS}"
        )));
    }
    Ok(depth)
}

/// Serialize the tree rooted at `root` with default options for `mode`.
#[must_use]
pub fn serialize(doc: &Document, root: ElementId, mode: Mode) -> String {
    serialize_with(doc, root, &SerializeOptions::new(mode))
}

/// Serialize the tree rooted at `root`.
#[must_use]
pub fn serialize_with(doc: &Document, root: ElementId, options: &SerializeOptions) -> String {
    let mut out = String::new();
    serialize_into(doc, root, options, &mut out);
    out
}

/// Serialize the tree rooted at `root`, appending to `out`.
pub fn serialize_into(
    doc: &Document,
    root: ElementId,
    options: &SerializeOptions,
    out: &mut String,
) {
    let mut serializer = Serializer { doc, options, out };
    serializer.emit(root, options.start_depth);
}

struct Serializer<'a> {
    doc: &'a Document,
    options: &'a SerializeOptions,
    out: &'a mut String,
}

impl Serializer<'_> {
    fn pretty(&self) -> bool {
        self.options.mode == Mode::Pretty
    }

    fn indent(&mut self, units: usize) {
        for _ in 0..units.min(MAX_INDENT_UNITS) {
            self.out.push_str(&self.options.indent);
        }
    }

    fn emit(&mut self, id: ElementId, depth: usize) {
        let doc = self.doc;
        let element = doc.element(id);

        self.out.push('<');
        self.out.push_str(element.tag());
        for attribute in doc.attributes(id) {
            self.out.push(' ');
            doc.attribute(attribute).write_markup(self.out);
        }
        if element.is_void() {
            self.out.push_str(" />");
            return;
        }
        self.out.push('>');

        if let Some(text) = element.inner_text() {
            self.out.push_str(text);
        }

        let pretty = self.pretty();
        let should_indent = pretty
            && depth >= element.min_indent_depth()
            && depth <= element.max_indent_depth();

        let mut has_children = false;
        for child in doc.elements(id) {
            has_children = true;
            if pretty {
                self.out.push('\n');
            }
            if should_indent {
                self.indent(depth);
            }
            let child_depth = if doc.element(child).is_text_leaf() {
                depth
            } else {
                depth.saturating_add(1)
            };
            self.emit(child, child_depth);
        }
        if has_children && pretty {
            self.out.push('\n');
        }

        let mut depth = depth;
        if depth > element.max_indent_depth() {
            debug!(
                "<{}> at depth {depth} is past its max indent depth {}",
                element.tag(),
                element.max_indent_depth()
            );
            depth = element.max_indent_depth();
            if pretty {
                self.indent(1);
            }
        }
        if should_indent && let Some(units) = depth.checked_sub(2) {
            self.indent(units);
        }

        self.out.push_str("</");
        self.out.push_str(element.tag());
        self.out.push('>');
    }
}
