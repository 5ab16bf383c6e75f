use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use trellis_dom::{AttributeId, Document, ElementBuilder, ElementId, Result};

use crate::void_tag::is_void_tag;

/// Attribute names the factories know about.
///
/// Any other name can still be created with
/// [`Document::create_attribute`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeName {
    /// Replacement text for images.
    Alt,
    /// Character encoding declaration on `<meta>`.
    Charset,
    /// Space-separated class names.
    Class,
    /// Value of a `<meta>` entry.
    Content,
    /// Link target.
    Href,
    /// Unique element identifier.
    Id,
    /// Language of the element's content.
    Lang,
    /// Form control or `<meta>` name.
    Name,
    /// Link relationship.
    Rel,
    /// Resource address.
    Src,
    /// Inline CSS.
    Style,
    /// Advisory information.
    Title,
    /// Content or control type.
    Type,
}

/// HTML-aware constructors on [`Document`].
pub trait HtmlDocument {
    /// Create an element whose void flag follows the HTML void tag table.
    ///
    /// # Errors
    ///
    /// [`trellis_dom::DomError::InvalidArgument`] if `tag` is empty.
    fn create_html_element(&mut self, tag: impl Into<String>) -> Result<ElementId>;

    /// Like [`HtmlDocument::create_html_element`], returning a builder.
    ///
    /// # Errors
    ///
    /// [`trellis_dom::DomError::InvalidArgument`] if `tag` is empty.
    fn build_html(&mut self, tag: impl Into<String>) -> Result<ElementBuilder<'_>>;

    /// Create a detached attribute with a well-known name.
    fn html_attribute(&mut self, name: AttributeName, value: impl Into<String>) -> AttributeId;

    /// `class="value"`
    fn class(&mut self, value: impl Into<String>) -> AttributeId {
        self.html_attribute(AttributeName::Class, value)
    }

    /// `id="value"`
    fn id(&mut self, value: impl Into<String>) -> AttributeId {
        self.html_attribute(AttributeName::Id, value)
    }

    /// `lang="value"`
    fn lang(&mut self, value: impl Into<String>) -> AttributeId {
        self.html_attribute(AttributeName::Lang, value)
    }
}

impl HtmlDocument for Document {
    fn create_html_element(&mut self, tag: impl Into<String>) -> Result<ElementId> {
        let tag = tag.into();
        let is_void = is_void_tag(&tag);
        self.new_element(tag, is_void)
    }

    fn build_html(&mut self, tag: impl Into<String>) -> Result<ElementBuilder<'_>> {
        let id = self.create_html_element(tag)?;
        Ok(ElementBuilder::from_element(self, id))
    }

    fn html_attribute(&mut self, name: AttributeName, value: impl Into<String>) -> AttributeId {
        self.create_attribute(name.to_string(), value)
    }
}
