//! Side-effect free traversal of a document.
//!
//! Every query returns a lazy iterator that borrows the document. Calling
//! the query again restarts the walk. Element iterators can be narrowed to
//! one tag with `tagged`.

use crate::document::Document;
use crate::node::{AttributeId, ElementId, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

fn has_tag(doc: &Document, id: ElementId, tag: Option<&str>) -> bool {
    tag.is_none_or(|tag| doc.element(id).tag() == tag)
}

/// Iterator over a run of sibling elements, following the sibling links.
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    doc: &'a Document,
    current: Option<ElementId>,
    direction: Direction,
    tag: Option<&'a str>,
}

impl<'a> Siblings<'a> {
    /// Only yield elements whose tag equals `tag`.
    #[must_use]
    pub const fn tagged(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl Iterator for Siblings<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.current?;
            let element = self.doc.element(id);
            self.current = match self.direction {
                Direction::Forward => element.next_sibling(),
                Direction::Backward => element.previous_sibling(),
            };
            if has_tag(self.doc, id, self.tag) {
                return Some(id);
            }
        }
    }
}

/// Pre-order, depth-first iterator over the subtree below an element.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    root: ElementId,
    current: Option<ElementId>,
    tag: Option<&'a str>,
}

impl<'a> Descendants<'a> {
    /// Only yield elements whose tag equals `tag`.
    #[must_use]
    pub const fn tagged(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Next node in pre-order, never leaving the subtree of `root`.
    fn advance(&self, id: ElementId) -> Option<ElementId> {
        if let Some(child) = self.doc.element(id).children().first() {
            return Some(child);
        }
        let mut current = id;
        loop {
            if current == self.root {
                return None;
            }
            let element = self.doc.element(current);
            if let Some(next) = element.next_sibling() {
                return Some(next);
            }
            current = element.parent()?;
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.current?;
            self.current = self.advance(id);
            if has_tag(self.doc, id, self.tag) {
                return Some(id);
            }
        }
    }
}

/// Iterator over ancestors of an element, from parent to root.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    current: Option<ElementId>,
    tag: Option<&'a str>,
}

impl<'a> Ancestors<'a> {
    /// Only yield elements whose tag equals `tag`.
    #[must_use]
    pub const fn tagged(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.current?;
            self.current = self.doc.parent(id);
            if has_tag(self.doc, id, self.tag) {
                return Some(id);
            }
        }
    }
}

/// Iterator over the attributes of an element, in order.
#[derive(Debug, Clone)]
pub struct Attributes<'a> {
    doc: &'a Document,
    current: Option<AttributeId>,
}

impl Iterator for Attributes<'_> {
    type Item = AttributeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.attribute(id).next_sibling();
        Some(id)
    }
}

impl Document {
    /// Children of `id`, in order.
    #[must_use]
    pub fn elements(&self, id: ElementId) -> Siblings<'_> {
        Siblings {
            doc: self,
            current: self.element(id).children().first(),
            direction: Direction::Forward,
            tag: None,
        }
    }

    /// Attributes of `id`, in order.
    #[must_use]
    pub fn attributes(&self, id: ElementId) -> Attributes<'_> {
        Attributes {
            doc: self,
            current: self.element(id).attributes().first(),
        }
    }

    /// All children of `id` followed by all of its attributes.
    pub fn elements_and_attributes(&self, id: ElementId) -> impl Iterator<Item = Node> + '_ {
        self.elements(id)
            .map(Node::Element)
            .chain(self.attributes(id).map(Node::Attribute))
    }

    /// First child of `id` with the given tag.
    #[must_use]
    pub fn find_element(&self, id: ElementId, tag: &str) -> Option<ElementId> {
        self.elements(id).tagged(tag).next()
    }

    /// First attribute of `id` with the given name.
    #[must_use]
    pub fn find_attribute(&self, id: ElementId, name: &str) -> Option<AttributeId> {
        self.attributes(id)
            .find(|&attribute| self.attribute(attribute).name() == name)
    }

    /// Siblings after `id`, nearest first.
    #[must_use]
    pub fn next_elements(&self, id: ElementId) -> Siblings<'_> {
        Siblings {
            doc: self,
            current: self.element(id).next_sibling(),
            direction: Direction::Forward,
            tag: None,
        }
    }

    /// Siblings before `id`, nearest first.
    #[must_use]
    pub fn previous_elements(&self, id: ElementId) -> Siblings<'_> {
        Siblings {
            doc: self,
            current: self.element(id).previous_sibling(),
            direction: Direction::Backward,
            tag: None,
        }
    }

    /// Every element below `id` in pre-order. `id` itself is excluded.
    #[must_use]
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        Descendants {
            doc: self,
            root: id,
            current: self.element(id).children().first(),
            tag: None,
        }
    }

    /// `id` followed by [`Document::descendants`].
    #[must_use]
    pub fn descendants_and_self(&self, id: ElementId) -> Descendants<'_> {
        Descendants {
            doc: self,
            root: id,
            current: Some(id),
            tag: None,
        }
    }

    /// Parent chain of `id`, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: self.parent(id),
            tag: None,
        }
    }

    /// `id` followed by [`Document::ancestors`].
    #[must_use]
    pub fn ancestors_and_self(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: Some(id),
            tag: None,
        }
    }

    /// True if `id` has neither children nor attributes.
    #[must_use]
    pub fn is_empty(&self, id: ElementId) -> bool {
        self.element(id).is_empty()
    }
}
