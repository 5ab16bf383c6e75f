//! HTML vocabulary for [`trellis_dom`] documents.
//!
//! # Scope
//!
//! This crate adds what the core tree deliberately leaves out:
//! - **Void tags** - which HTML elements self-close and hold no content
//! - **Attribute factories** - well-known attribute names as an enum, with
//!   shortcuts for `class`, `id` and `lang`
//! - **Builder shortcuts** - `with_class`, `with_id`, `with_lang` on
//!   [`trellis_dom::ElementBuilder`]
//!
//! Tag names are not validated against HTML; unknown tags are simply
//! non-void.

/// Attribute names and the document extension that creates them.
pub mod attributes;
/// HTML shortcuts for the element builder.
pub mod builder;
/// The table of void elements.
pub mod void_tag;

pub use attributes::{AttributeName, HtmlDocument};
pub use builder::HtmlBuilderExt;
pub use void_tag::{VoidTag, is_void_tag};
