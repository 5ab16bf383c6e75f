//! Node handles and the arena slots they point at.

use std::fmt;

use crate::sibling_list::{Linked, SiblingList};

/// Lowest depth at which an element indents its children, unless changed.
pub const DEFAULT_MIN_INDENT_DEPTH: usize = 0;

/// Highest depth at which an element indents its children, unless changed.
pub const DEFAULT_MAX_INDENT_DEPTH: usize = usize::MAX;

/// Handle types that address a slot in one of the document arenas.
pub(crate) trait ArenaIndex: Copy + Eq {
    fn index(self) -> usize;
}

/// Sibling links of a node, owned by whichever list currently holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links<I> {
    pub(crate) prev: Option<I>,
    pub(crate) next: Option<I>,
}

impl<I> Default for Links<I> {
    fn default() -> Self {
        Self {
            prev: None,
            next: None,
        }
    }
}

/// A type-safe handle to an element stored in a [`Document`](crate::Document).
///
/// Handles are cheap to copy and stay valid for the lifetime of the
/// document that created them, whether or not the element is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
}

impl ArenaIndex for ElementId {
    fn index(self) -> usize {
        self.0
    }
}

/// A type-safe handle to an attribute stored in a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(usize);

impl AttributeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }
}

impl ArenaIndex for AttributeId {
    fn index(self) -> usize {
        self.0
    }
}

/// Either kind of node that can be attached to an element.
///
/// Used by the bulk mutators, which accept elements and attributes in one
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    /// A child element.
    Element(ElementId),
    /// An attribute.
    Attribute(AttributeId),
}

impl From<ElementId> for Node {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<AttributeId> for Node {
    fn from(id: AttributeId) -> Self {
        Self::Attribute(id)
    }
}

/// Element data as stored in the document arena.
///
/// Fields are read through accessors; all mutation goes through
/// [`Document`](crate::Document) so that parent and sibling links stay
/// consistent.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) is_void: bool,
    pub(crate) inner_text: Option<String>,
    pub(crate) min_indent_depth: usize,
    pub(crate) max_indent_depth: usize,
    pub(crate) parent: Option<ElementId>,
    pub(crate) links: Links<ElementId>,
    pub(crate) children: SiblingList<ElementId>,
    pub(crate) attributes: SiblingList<AttributeId>,
}

impl Element {
    pub(crate) fn new(tag: String, is_void: bool) -> Self {
        Self {
            tag,
            is_void,
            inner_text: None,
            min_indent_depth: DEFAULT_MIN_INDENT_DEPTH,
            max_indent_depth: DEFAULT_MAX_INDENT_DEPTH,
            parent: None,
            links: Links::default(),
            children: SiblingList::default(),
            attributes: SiblingList::default(),
        }
    }

    /// The tag name this element was created with.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Void elements serialize as a self-closing tag and hold no content.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.is_void
    }

    /// Text emitted right after the opening tag, if any.
    #[must_use]
    pub fn inner_text(&self) -> Option<&str> {
        self.inner_text.as_deref()
    }

    /// Lowest serialization depth at which children are indented.
    #[must_use]
    pub const fn min_indent_depth(&self) -> usize {
        self.min_indent_depth
    }

    /// Highest serialization depth at which children are indented.
    #[must_use]
    pub const fn max_indent_depth(&self) -> usize {
        self.max_indent_depth
    }

    /// The element whose child list currently holds this element.
    #[must_use]
    pub const fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Following sibling in the parent's child list.
    #[must_use]
    pub const fn next_sibling(&self) -> Option<ElementId> {
        self.links.next
    }

    /// Preceding sibling in the parent's child list.
    #[must_use]
    pub const fn previous_sibling(&self) -> Option<ElementId> {
        self.links.prev
    }

    /// Child elements, in serialization order.
    #[must_use]
    pub const fn children(&self) -> &SiblingList<ElementId> {
        &self.children
    }

    /// Attributes, in serialization order.
    #[must_use]
    pub const fn attributes(&self) -> &SiblingList<AttributeId> {
        &self.attributes
    }

    /// True if the element has neither children nor attributes.
    ///
    /// Inner text does not count.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty() && self.attributes.is_empty()
    }

    /// Text-only elements are serialized inline with their parent's depth.
    pub(crate) fn is_text_leaf(&self) -> bool {
        self.children.is_empty()
            && self
                .inner_text
                .as_deref()
                .is_some_and(|text| !text.trim().is_empty())
    }
}

impl Linked<ElementId> for Element {
    fn links(&self) -> &Links<ElementId> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<ElementId> {
        &mut self.links
    }
}

/// A `name="value"` pair as stored in the document arena.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) parent: Option<ElementId>,
    pub(crate) links: Links<AttributeId>,
}

impl Attribute {
    pub(crate) fn new(name: String, value: String) -> Self {
        Self {
            name,
            value,
            parent: None,
            links: Links::default(),
        }
    }

    /// Attribute name. Fixed at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, emitted without escaping.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The element this attribute is attached to.
    #[must_use]
    pub const fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Following attribute on the same element.
    #[must_use]
    pub const fn next_sibling(&self) -> Option<AttributeId> {
        self.links.next
    }

    /// Preceding attribute on the same element.
    #[must_use]
    pub const fn previous_sibling(&self) -> Option<AttributeId> {
        self.links.prev
    }

    pub(crate) fn write_markup(&self, out: &mut String) {
        out.push_str(&self.name);
        out.push_str("=\"");
        out.push_str(&self.value);
        out.push('"');
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut markup = String::with_capacity(self.name.len() + self.value.len() + 3);
        self.write_markup(&mut markup);
        f.write_str(&markup)
    }
}

impl Linked<AttributeId> for Attribute {
    fn links(&self) -> &Links<AttributeId> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<AttributeId> {
        &mut self.links
    }
}
