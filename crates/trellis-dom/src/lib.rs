//! Typed object model for markup documents.
//!
//! This crate builds element/attribute trees in memory and serializes them
//! to indented markup text, for code generators and templating layers that
//! want structure instead of string concatenation.
//!
//! # Design
//!
//! All nodes live in a [`Document`] arena and are addressed with
//! [`ElementId`] and [`AttributeId`] handles. Each element keeps two
//! intrusive [`SiblingList`]s, one for child elements and one for
//! attributes, so appending and unlinking are O(1).
//!
//! The tree shape is enforced at attach time:
//! - an element is never its own ancestor,
//! - a node has at most one parent, and attaching it elsewhere moves it,
//! - void elements accept attributes but no content.
//!
//! # Example
//!
//! ```
//! use trellis_dom::{Document, Mode, serialize};
//!
//! let mut doc = Document::new();
//! let div = doc.create_element("div")?;
//! let id = doc.create_attribute("id", "x");
//! doc.add(div, id)?;
//! doc.set_inner_text(div, "hi")?;
//!
//! assert_eq!(serialize(&doc, div, Mode::NoFormatting), r#"<div id="x">hi</div>"#);
//! # Ok::<(), trellis_dom::DomError>(())
//! ```
//!
//! Text and attribute values are written verbatim. Escaping is the
//! caller's job.

/// Fluent element construction.
pub mod builder;
/// The node arena and its mutators.
pub mod document;
/// Error type for contract violations.
pub mod error;
/// Handles and node data.
pub mod node;
/// Lazy traversal iterators.
pub mod query;
/// Markup output.
pub mod serialize;
/// Intrusive sibling lists.
pub mod sibling_list;

pub use builder::ElementBuilder;
pub use document::Document;
pub use error::{DomError, Result};
pub use node::{
    Attribute, AttributeId, DEFAULT_MAX_INDENT_DEPTH, DEFAULT_MIN_INDENT_DEPTH, Element,
    ElementId, Node,
};
pub use query::{Ancestors, Attributes, Descendants, Siblings};
pub use serialize::{
    MAX_INDENT_UNITS, Mode, SerializeOptions, serialize, serialize_into, serialize_with,
};
pub use sibling_list::SiblingList;
