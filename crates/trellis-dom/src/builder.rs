//! Fluent construction of elements.

use crate::document::Document;
use crate::error::Result;
use crate::node::{ElementId, Node};

/// Chains mutations on a single element.
///
/// ```
/// use trellis_dom::{Document, Mode, serialize};
///
/// let mut doc = Document::new();
/// let item = doc.build("li")?.with_text("one")?.finish();
/// let list = doc
///     .build("ul")?
///     .with_attribute("class", "menu")?
///     .with_child(item)?
///     .finish();
///
/// assert_eq!(
///     serialize(&doc, list, Mode::NoFormatting),
///     r#"<ul class="menu"><li>one</li></ul>"#
/// );
/// # Ok::<(), trellis_dom::DomError>(())
/// ```
#[derive(Debug)]
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    id: ElementId,
}

impl<'a> ElementBuilder<'a> {
    /// Wrap an existing element.
    pub fn from_element(doc: &'a mut Document, id: ElementId) -> Self {
        Self { doc, id }
    }

    /// The element being built.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// The document the element lives in.
    pub fn document(&mut self) -> &mut Document {
        self.doc
    }

    /// Create and attach an attribute.
    ///
    /// # Errors
    ///
    /// See [`Document::add_attribute`].
    pub fn with_attribute(
        self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let attribute = self.doc.create_attribute(name, value);
        self.with(attribute)
    }

    /// Attach an existing element or attribute.
    ///
    /// # Errors
    ///
    /// See [`Document::add`].
    pub fn with(self, node: impl Into<Node>) -> Result<Self> {
        self.doc.add(self.id, node)?;
        Ok(self)
    }

    /// Append a child element.
    ///
    /// # Errors
    ///
    /// See [`Document::add_element`].
    pub fn with_child(self, child: ElementId) -> Result<Self> {
        self.doc.add_element(self.id, child)?;
        Ok(self)
    }

    /// Append child elements in order.
    ///
    /// # Errors
    ///
    /// The first error from [`Document::add_element`]; earlier children stay
    /// attached.
    pub fn with_children(self, children: impl IntoIterator<Item = ElementId>) -> Result<Self> {
        self.doc.add_all(self.id, children)?;
        Ok(self)
    }

    /// Set the inner text.
    ///
    /// # Errors
    ///
    /// See [`Document::set_inner_text`].
    pub fn with_text(self, text: impl Into<String>) -> Result<Self> {
        self.doc.set_inner_text(self.id, text)?;
        Ok(self)
    }

    /// Set the minimum indent depth.
    ///
    /// # Errors
    ///
    /// See [`Document::set_min_indent_depth`].
    pub fn with_min_indent_depth(self, depth: usize) -> Result<Self> {
        self.doc.set_min_indent_depth(self.id, depth)?;
        Ok(self)
    }

    /// Set the maximum indent depth.
    ///
    /// # Errors
    ///
    /// See [`Document::set_max_indent_depth`].
    pub fn with_max_indent_depth(self, depth: usize) -> Result<Self> {
        self.doc.set_max_indent_depth(self.id, depth)?;
        Ok(self)
    }

    /// Stop building and return the element handle.
    #[must_use]
    pub fn finish(self) -> ElementId {
        self.id
    }
}

impl Document {
    /// Create a non-void element and start building it.
    ///
    /// # Errors
    ///
    /// See [`Document::create_element`].
    pub fn build(&mut self, tag: impl Into<String>) -> Result<ElementBuilder<'_>> {
        let id = self.create_element(tag)?;
        Ok(ElementBuilder::from_element(self, id))
    }

    /// Create a void element and start building it.
    ///
    /// # Errors
    ///
    /// See [`Document::create_void_element`].
    pub fn build_void(&mut self, tag: impl Into<String>) -> Result<ElementBuilder<'_>> {
        let id = self.create_void_element(tag)?;
        Ok(ElementBuilder::from_element(self, id))
    }
}
