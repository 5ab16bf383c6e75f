use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements only have a start tag; end tags must not be specified for
/// void elements."
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoidTag {
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<br>`
    Br,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<hr>`
    Hr,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<param>`
    Param,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

/// Check if `tag` names a void element, ignoring ASCII case.
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    tag.parse::<VoidTag>().is_ok()
}
