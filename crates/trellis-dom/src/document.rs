//! Arena that owns every element and attribute of a markup tree.
//!
//! # Design
//!
//! Nodes are stored in two contiguous vectors, one per node kind, and are
//! addressed with [`ElementId`] and [`AttributeId`] handles. Parent and
//! sibling relationships are handles too, so a child never owns its parent
//! and the tree can be walked in any direction without borrow checker
//! issues.
//!
//! Detached nodes stay in the arena and can be attached again. Storage is
//! released when the document is dropped.
//!
//! Handles are only meaningful for the document that created them. Passing
//! a handle from another document is a bug and panics on out-of-range
//! access.

use log::trace;

use crate::error::{DomError, Result, require_non_empty};
use crate::node::{ArenaIndex, Attribute, AttributeId, Element, ElementId, Node};
use crate::sibling_list::SiblingList;

/// Arena-backed store for one or more markup trees.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    attributes: Vec<Attribute>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached, non-void element.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidArgument`] if `tag` is empty or whitespace.
    pub fn create_element(&mut self, tag: impl Into<String>) -> Result<ElementId> {
        self.new_element(tag, false)
    }

    /// Allocate a detached void element, serialized as `<tag />`.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidArgument`] if `tag` is empty or whitespace.
    pub fn create_void_element(&mut self, tag: impl Into<String>) -> Result<ElementId> {
        self.new_element(tag, true)
    }

    /// Allocate a detached element with an explicit void flag.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidArgument`] if `tag` is empty or whitespace.
    pub fn new_element(&mut self, tag: impl Into<String>, is_void: bool) -> Result<ElementId> {
        let tag = tag.into();
        require_non_empty("tag", &tag)?;

        let id = ElementId::new(self.elements.len());
        self.elements.push(Element::new(tag, is_void));
        Ok(id)
    }

    /// Allocate a detached attribute.
    pub fn create_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> AttributeId {
        let id = AttributeId::new(self.attributes.len());
        self.attributes.push(Attribute::new(name.into(), value.into()));
        id
    }

    /// Get an element by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this document.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    /// Get an attribute by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this document.
    #[must_use]
    pub fn attribute(&self, id: AttributeId) -> &Attribute {
        &self.attributes[id.index()]
    }

    /// Get an element by handle, or `None` if the handle is out of range.
    #[must_use]
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Get an attribute by handle, or `None` if the handle is out of range.
    #[must_use]
    pub fn get_attribute(&self, id: AttributeId) -> Option<&Attribute> {
        self.attributes.get(id.index())
    }

    /// Number of elements ever allocated, attached or not.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of attributes ever allocated, attached or not.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Get the parent of an element.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get_element(id).and_then(Element::parent)
    }

    /// Check if `ancestor` is on the parent chain of `id`.
    ///
    /// An element is not its own ancestor.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Attach an element or an attribute to `parent`.
    ///
    /// # Errors
    ///
    /// See [`Document::add_element`] and [`Document::add_attribute`].
    pub fn add(&mut self, parent: ElementId, node: impl Into<Node>) -> Result<()> {
        match node.into() {
            Node::Element(child) => self.add_element(parent, child),
            Node::Attribute(attribute) => self.add_attribute(parent, attribute),
        }
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is attached to a different element is detached from it
    /// first.
    ///
    /// # Errors
    ///
    /// - [`DomError::InvalidOperation`] if `child` is `parent`, is already a
    ///   child of `parent`, or is an ancestor of `parent`.
    /// - [`DomError::VoidElement`] if `parent` is void.
    pub fn add_element(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.check_element_attach(parent, child)?;
        self.detach_element(child);

        self.with_children(parent, |list, nodes| list.add_last(nodes, child));
        self.elements[child.index()].parent = Some(parent);
        trace!(
            "appended <{}> to <{}>",
            self.element(child).tag,
            self.element(parent).tag
        );
        Ok(())
    }

    /// Insert `child` into `parent`'s children directly before `reference`.
    ///
    /// # Errors
    ///
    /// - [`DomError::InvalidArgument`] if `reference` is not a child of
    ///   `parent`.
    /// - Otherwise the same conditions as [`Document::add_element`].
    pub fn insert_before(
        &mut self,
        parent: ElementId,
        child: ElementId,
        reference: ElementId,
    ) -> Result<()> {
        if self.parent(reference) != Some(parent) {
            return Err(DomError::invalid_argument(
                "reference",
                format!("not a child of <{}>", self.element(parent).tag),
            ));
        }
        self.check_element_attach(parent, child)?;
        self.detach_element(child);

        self.with_children(parent, |list, nodes| {
            list.insert_before(nodes, reference, child);
        });
        self.elements[child.index()].parent = Some(parent);
        trace!(
            "inserted <{}> into <{}>",
            self.element(child).tag,
            self.element(parent).tag
        );
        Ok(())
    }

    /// Append `attribute` to `parent`'s attribute list.
    ///
    /// Void elements accept attributes. An attribute attached to a
    /// different element is detached from it first.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidOperation`] if the attribute is already attached
    /// to `parent`.
    pub fn add_attribute(&mut self, parent: ElementId, attribute: AttributeId) -> Result<()> {
        if self.attribute(attribute).parent == Some(parent) {
            return Err(DomError::invalid_operation(format!(
                "attribute `{}` is already attached to <{}>",
                self.attribute(attribute).name,
                self.element(parent).tag
            )));
        }
        self.remove_attribute(attribute);

        self.elements[parent.index()]
            .attributes
            .add_last(&mut self.attributes, attribute);
        self.attributes[attribute.index()].parent = Some(parent);
        trace!(
            "attached attribute `{}` to <{}>",
            self.attribute(attribute).name,
            self.element(parent).tag
        );
        Ok(())
    }

    /// Attach each node in order, stopping at the first failure.
    ///
    /// Nodes attached before the failure stay attached.
    ///
    /// # Errors
    ///
    /// The first error returned by [`Document::add`].
    pub fn add_all<I>(&mut self, parent: ElementId, nodes: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        for node in nodes {
            self.add(parent, node)?;
        }
        Ok(())
    }

    /// Remove all children and attributes, then attach `nodes`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `parent` is void, otherwise the first
    /// error from [`Document::add_all`].
    pub fn replace_all<I>(&mut self, parent: ElementId, nodes: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.remove_all(parent)?;
        self.add_all(parent, nodes)
    }

    /// Remove all children, then append `children`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `parent` is void, otherwise the first
    /// error from [`Document::add_element`].
    pub fn replace_elements<I>(&mut self, parent: ElementId, children: I) -> Result<()>
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.remove_elements(parent)?;
        self.add_all(parent, children)
    }

    /// Remove all attributes, then append `attributes`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `parent` is void, otherwise the first
    /// error from [`Document::add_attribute`].
    pub fn replace_attributes<I>(&mut self, parent: ElementId, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = AttributeId>,
    {
        self.remove_attributes(parent)?;
        self.add_all(parent, attributes)
    }

    /// Detach an element from its parent. No-op if it has none.
    pub fn remove_from_parent(&mut self, id: ElementId) {
        self.detach_element(id);
    }

    /// Detach an attribute from its element. No-op if it has none.
    pub fn remove_attribute(&mut self, id: AttributeId) {
        let Some(parent) = self.attributes[id.index()].parent.take() else {
            return;
        };
        self.elements[parent.index()]
            .attributes
            .remove(&mut self.attributes, id);
        trace!(
            "detached attribute `{}` from <{}>",
            self.attribute(id).name,
            self.element(parent).tag
        );
    }

    /// Detach every child and every attribute of `id`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `id` is void.
    pub fn remove_all(&mut self, id: ElementId) -> Result<()> {
        self.remove_elements(id)?;
        self.remove_attributes(id)
    }

    /// Detach every child of `id`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `id` is void.
    pub fn remove_elements(&mut self, id: ElementId) -> Result<()> {
        self.require_content(id)?;

        let removed = self.with_children(id, |list, nodes| list.clear(nodes));
        for child in &removed {
            self.elements[child.index()].parent = None;
        }
        trace!(
            "cleared {} children of <{}>",
            removed.len(),
            self.element(id).tag
        );
        Ok(())
    }

    /// Detach every attribute of `id`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `id` is void.
    pub fn remove_attributes(&mut self, id: ElementId) -> Result<()> {
        self.require_content(id)?;

        let removed = self.elements[id.index()]
            .attributes
            .clear(&mut self.attributes);
        for attribute in &removed {
            self.attributes[attribute.index()].parent = None;
        }
        trace!(
            "cleared {} attributes of <{}>",
            removed.len(),
            self.element(id).tag
        );
        Ok(())
    }

    /// Set or replace the text emitted right after the opening tag.
    ///
    /// The text is written verbatim; callers escape it beforehand.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `id` is void.
    pub fn set_inner_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<()> {
        self.require_content(id)?;
        self.elements[id.index()].inner_text = Some(text.into());
        Ok(())
    }

    /// Drop the inner text of `id`.
    ///
    /// # Errors
    ///
    /// [`DomError::VoidElement`] if `id` is void.
    pub fn clear_inner_text(&mut self, id: ElementId) -> Result<()> {
        self.require_content(id)?;
        self.elements[id.index()].inner_text = None;
        Ok(())
    }

    /// Set the lowest depth at which `id` indents its children.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidArgument`] if `depth` exceeds the element's
    /// maximum indent depth.
    pub fn set_min_indent_depth(&mut self, id: ElementId, depth: usize) -> Result<()> {
        let element = &mut self.elements[id.index()];
        if depth > element.max_indent_depth {
            return Err(DomError::invalid_argument(
                "min_indent_depth",
                format!(
                    "{depth} is greater than the maximum indent depth {}",
                    element.max_indent_depth
                ),
            ));
        }
        element.min_indent_depth = depth;
        Ok(())
    }

    /// Set the highest depth at which `id` indents its children.
    ///
    /// # Errors
    ///
    /// [`DomError::InvalidArgument`] if `depth` is below the element's
    /// minimum indent depth.
    pub fn set_max_indent_depth(&mut self, id: ElementId, depth: usize) -> Result<()> {
        let element = &mut self.elements[id.index()];
        if depth < element.min_indent_depth {
            return Err(DomError::invalid_argument(
                "max_indent_depth",
                format!(
                    "{depth} is less than the minimum indent depth {}",
                    element.min_indent_depth
                ),
            ));
        }
        element.max_indent_depth = depth;
        Ok(())
    }

    /// Replace the value of an attribute. Its name stays fixed.
    pub fn set_attribute_value(&mut self, id: AttributeId, value: impl Into<String>) {
        self.attributes[id.index()].value = value.into();
    }

    fn require_content(&self, id: ElementId) -> Result<()> {
        let element = self.element(id);
        if element.is_void {
            return Err(DomError::VoidElement {
                tag: element.tag.clone(),
            });
        }
        Ok(())
    }

    fn check_element_attach(&self, parent: ElementId, child: ElementId) -> Result<()> {
        let tag = &self.element(parent).tag;
        if parent == child {
            return Err(DomError::invalid_operation(format!(
                "<{tag}> cannot be added to itself"
            )));
        }
        if self.element(child).parent == Some(parent) {
            return Err(DomError::invalid_operation(format!(
                "<{}> is already a child of <{tag}>",
                self.element(child).tag
            )));
        }
        if self.is_ancestor_of(child, parent) {
            return Err(DomError::invalid_operation(format!(
                "<{}> is an ancestor of <{tag}>",
                self.element(child).tag
            )));
        }
        self.require_content(parent)
    }

    fn detach_element(&mut self, id: ElementId) {
        let Some(parent) = self.elements[id.index()].parent.take() else {
            return;
        };
        self.with_children(parent, |list, nodes| list.remove(nodes, id));
        trace!(
            "detached <{}> from <{}>",
            self.element(id).tag,
            self.element(parent).tag
        );
    }

    /// Run a linking operation on `id`'s child list.
    ///
    /// The list header is copied out of the arena for the duration of the
    /// call so the member slots can be borrowed mutably alongside it.
    fn with_children<R>(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&mut SiblingList<ElementId>, &mut [Element]) -> R,
    ) -> R {
        let mut list = self.elements[id.index()].children;
        let result = f(&mut list, &mut self.elements);
        self.elements[id.index()].children = list;
        result
    }
}
