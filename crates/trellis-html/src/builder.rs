use trellis_dom::{ElementBuilder, Result};

use crate::attributes::{AttributeName, HtmlDocument};

/// Attribute shortcuts for [`ElementBuilder`].
///
/// ```
/// use trellis_dom::{Document, Mode, serialize};
/// use trellis_html::{HtmlBuilderExt, HtmlDocument};
///
/// let mut doc = Document::new();
/// let img = doc.build_html("img")?.with_class("logo")?.finish();
///
/// assert_eq!(serialize(&doc, img, Mode::Pretty), r#"<img class="logo" />"#);
/// # Ok::<(), trellis_dom::DomError>(())
/// ```
pub trait HtmlBuilderExt: Sized {
    /// Attach a well-known attribute.
    ///
    /// # Errors
    ///
    /// See [`trellis_dom::Document::add_attribute`].
    fn with_html_attribute(self, name: AttributeName, value: impl Into<String>) -> Result<Self>;

    /// Attach `class="value"`.
    ///
    /// # Errors
    ///
    /// See [`trellis_dom::Document::add_attribute`].
    fn with_class(self, value: impl Into<String>) -> Result<Self> {
        self.with_html_attribute(AttributeName::Class, value)
    }

    /// Attach `id="value"`.
    ///
    /// # Errors
    ///
    /// See [`trellis_dom::Document::add_attribute`].
    fn with_id(self, value: impl Into<String>) -> Result<Self> {
        self.with_html_attribute(AttributeName::Id, value)
    }

    /// Attach `lang="value"`.
    ///
    /// # Errors
    ///
    /// See [`trellis_dom::Document::add_attribute`].
    fn with_lang(self, value: impl Into<String>) -> Result<Self> {
        self.with_html_attribute(AttributeName::Lang, value)
    }
}

impl HtmlBuilderExt for ElementBuilder<'_> {
    fn with_html_attribute(
        mut self,
        name: AttributeName,
        value: impl Into<String>,
    ) -> Result<Self> {
        let attribute = self.document().html_attribute(name, value);
        self.with(attribute)
    }
}
