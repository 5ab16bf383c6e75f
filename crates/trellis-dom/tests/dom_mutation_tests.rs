//! Tests for tree mutation: attach, insert, detach, replace and the guards
//! that keep the tree acyclic and void elements empty.

use trellis_dom::{DEFAULT_MAX_INDENT_DEPTH, Document, DomError, ElementId, Node};

/// Helper to create a non-void element and return its handle.
fn element(doc: &mut Document, tag: &str) -> ElementId {
    doc.create_element(tag).expect("valid tag")
}

fn children(doc: &Document, id: ElementId) -> Vec<ElementId> {
    doc.elements(id).collect()
}

fn is_invalid_operation<T>(result: Result<T, DomError>) -> bool {
    matches!(result, Err(DomError::InvalidOperation(_)))
}

fn is_void_error<T>(result: Result<T, DomError>) -> bool {
    matches!(result, Err(DomError::VoidElement { .. }))
}

// ========== construction ==========

#[test]
fn test_empty_tag_is_rejected() {
    let mut doc = Document::new();
    assert!(matches!(
        doc.create_element(""),
        Err(DomError::InvalidArgument { name: "tag", .. })
    ));
    assert!(matches!(
        doc.create_void_element("   "),
        Err(DomError::InvalidArgument { name: "tag", .. })
    ));
    assert_eq!(doc.element_count(), 0);
}

#[test]
fn test_new_element_is_detached_and_empty() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");

    let data = doc.element(div);
    assert_eq!(data.tag(), "div");
    assert!(!data.is_void());
    assert_eq!(data.inner_text(), None);
    assert_eq!(data.parent(), None);
    assert_eq!(data.min_indent_depth(), 0);
    assert_eq!(data.max_indent_depth(), DEFAULT_MAX_INDENT_DEPTH);
    assert!(doc.is_empty(div));
}

// ========== add_element ==========

#[test]
fn test_add_element_sets_parent_and_order() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "ul");
    let a = element(&mut doc, "li");
    let b = element(&mut doc, "li");

    doc.add_element(parent, a).unwrap();
    doc.add_element(parent, b).unwrap();

    assert_eq!(children(&doc, parent), vec![a, b]);
    assert_eq!(doc.parent(a), Some(parent));
    assert_eq!(doc.parent(b), Some(parent));
    assert_eq!(doc.element(a).next_sibling(), Some(b));
    assert_eq!(doc.element(b).previous_sibling(), Some(a));

    let list = doc.element(parent).children();
    assert_eq!(list.first(), Some(a));
    assert_eq!(list.last(), Some(b));
    assert_eq!(list.count(), 2);
}

#[test]
fn test_add_element_to_itself_fails() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let br = doc.create_void_element("br").unwrap();

    assert!(is_invalid_operation(doc.add_element(div, div)));
    // Self-attachment is reported before the void check.
    assert!(is_invalid_operation(doc.add_element(br, br)));
    assert!(doc.is_empty(div));
}

#[test]
fn test_add_element_twice_fails() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let child = element(&mut doc, "p");

    doc.add_element(parent, child).unwrap();

    assert!(is_invalid_operation(doc.add_element(parent, child)));
    assert_eq!(children(&doc, parent), vec![child]);
}

#[test]
fn test_add_ancestor_as_child_fails() {
    let mut doc = Document::new();
    let root = element(&mut doc, "html");
    let body = element(&mut doc, "body");
    let p = element(&mut doc, "p");
    doc.add_element(root, body).unwrap();
    doc.add_element(body, p).unwrap();

    assert!(is_invalid_operation(doc.add_element(p, root)));
    assert!(is_invalid_operation(doc.add_element(body, root)));
    assert_eq!(doc.parent(root), None);
    assert!(doc.is_empty(p));
}

#[test]
fn test_add_element_to_void_fails() {
    let mut doc = Document::new();
    let img = doc.create_void_element("img").unwrap();
    let span = element(&mut doc, "span");

    assert_eq!(
        doc.add_element(img, span),
        Err(DomError::VoidElement {
            tag: "img".to_string()
        })
    );
    assert_eq!(doc.parent(span), None);
}

#[test]
fn test_reparenting_moves_element() {
    let mut doc = Document::new();
    let from = element(&mut doc, "div");
    let to = element(&mut doc, "section");
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");
    let c = element(&mut doc, "c");
    doc.add_all(from, [a, b, c]).unwrap();

    doc.add_element(to, b).unwrap();

    // b left its old list without leaving a ghost entry behind
    assert_eq!(children(&doc, from), vec![a, c]);
    assert_eq!(doc.element(from).children().count(), 2);
    assert_eq!(doc.element(a).next_sibling(), Some(c));
    assert_eq!(doc.element(c).previous_sibling(), Some(a));

    assert_eq!(children(&doc, to), vec![b]);
    assert_eq!(doc.parent(b), Some(to));
    assert_eq!(doc.element(b).previous_sibling(), None);
    assert_eq!(doc.element(b).next_sibling(), None);
}

// ========== insert_before ==========

#[test]
fn test_insert_before_first_child() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let existing = element(&mut doc, "b");
    doc.add_element(parent, existing).unwrap();

    let new_child = element(&mut doc, "a");
    doc.insert_before(parent, new_child, existing).unwrap();

    assert_eq!(children(&doc, parent), vec![new_child, existing]);
    assert_eq!(doc.parent(new_child), Some(parent));
    assert_eq!(doc.element(new_child).previous_sibling(), None);
    assert_eq!(doc.element(existing).previous_sibling(), Some(new_child));
    assert_eq!(doc.element(parent).children().first(), Some(new_child));
}

#[test]
fn test_insert_before_middle() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let a = element(&mut doc, "a");
    let c = element(&mut doc, "c");
    doc.add_all(parent, [a, c]).unwrap();

    let b = element(&mut doc, "b");
    doc.insert_before(parent, b, c).unwrap();

    assert_eq!(children(&doc, parent), vec![a, b, c]);
    assert_eq!(doc.element(a).next_sibling(), Some(b));
    assert_eq!(doc.element(c).previous_sibling(), Some(b));
}

#[test]
fn test_insert_before_foreign_reference_fails() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let stranger = element(&mut doc, "p");
    let child = element(&mut doc, "span");

    assert!(matches!(
        doc.insert_before(parent, child, stranger),
        Err(DomError::InvalidArgument {
            name: "reference",
            ..
        })
    ));
    assert_eq!(doc.parent(child), None);
}

#[test]
fn test_insert_before_itself_fails() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let child = element(&mut doc, "p");
    doc.add_element(parent, child).unwrap();

    assert!(is_invalid_operation(doc.insert_before(parent, child, child)));
    assert_eq!(children(&doc, parent), vec![child]);
}

// ========== attributes ==========

#[test]
fn test_add_attribute_and_duplicate() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let id = doc.create_attribute("id", "main");

    doc.add_attribute(div, id).unwrap();

    assert_eq!(doc.attribute(id).parent(), Some(div));
    assert!(is_invalid_operation(doc.add_attribute(div, id)));
    assert_eq!(doc.element(div).attributes().count(), 1);
}

#[test]
fn test_void_element_accepts_attributes() {
    let mut doc = Document::new();
    let br = doc.create_void_element("br").unwrap();
    let class = doc.create_attribute("class", "sep");

    doc.add(br, class).unwrap();

    assert_eq!(doc.attributes(br).collect::<Vec<_>>(), vec![class]);
    assert!(!doc.is_empty(br));
}

#[test]
fn test_attribute_moves_between_elements() {
    let mut doc = Document::new();
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");
    let href = doc.create_attribute("href", "/");
    doc.add_attribute(a, href).unwrap();

    doc.add_attribute(b, href).unwrap();

    assert_eq!(doc.attributes(a).count(), 0);
    assert_eq!(doc.attributes(b).collect::<Vec<_>>(), vec![href]);
    assert_eq!(doc.attribute(href).parent(), Some(b));
}

#[test]
fn test_remove_attribute() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let id = doc.create_attribute("id", "x");
    let class = doc.create_attribute("class", "y");
    doc.add_all(div, [id, class]).unwrap();

    doc.remove_attribute(id);
    // second removal is a no-op
    doc.remove_attribute(id);

    assert_eq!(doc.attribute(id).parent(), None);
    assert_eq!(doc.attributes(div).collect::<Vec<_>>(), vec![class]);
    assert_eq!(doc.attribute(class).previous_sibling(), None);
}

#[test]
fn test_set_attribute_value_keeps_name() {
    let mut doc = Document::new();
    let lang = doc.create_attribute("lang", "en");
    doc.set_attribute_value(lang, "fr");

    assert_eq!(doc.attribute(lang).name(), "lang");
    assert_eq!(doc.attribute(lang).value(), "fr");
    assert_eq!(doc.attribute(lang).to_string(), r#"lang="fr""#);
}

// ========== bulk add / replace ==========

#[test]
fn test_add_all_mixed_nodes() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let p = element(&mut doc, "p");
    let id = doc.create_attribute("id", "x");

    doc.add_all(div, [Node::from(p), Node::from(id)]).unwrap();

    assert_eq!(
        doc.elements_and_attributes(div).collect::<Vec<_>>(),
        vec![Node::Element(p), Node::Attribute(id)]
    );
}

#[test]
fn test_add_all_stops_at_first_failure_without_rollback() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");

    let result = doc.add_all(div, [a, div, b]);

    assert!(is_invalid_operation(result));
    assert_eq!(children(&doc, div), vec![a]);
    assert_eq!(doc.parent(b), None);
}

#[test]
fn test_replace_all() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let old_child = element(&mut doc, "old");
    let old_attr = doc.create_attribute("old", "1");
    doc.add_all(div, [Node::from(old_child), Node::from(old_attr)])
        .unwrap();

    let new_child = element(&mut doc, "new");
    let new_attr = doc.create_attribute("new", "2");
    doc.replace_all(div, [Node::from(new_attr), Node::from(new_child)])
        .unwrap();

    assert_eq!(children(&doc, div), vec![new_child]);
    assert_eq!(doc.attributes(div).collect::<Vec<_>>(), vec![new_attr]);
    assert_eq!(doc.parent(old_child), None);
    assert_eq!(doc.attribute(old_attr).parent(), None);
}

#[test]
fn test_replace_elements_keeps_attributes() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let class = doc.create_attribute("class", "c");
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");
    doc.add_all(div, [Node::from(class), Node::from(a)]).unwrap();

    doc.replace_elements(div, [b, a]).unwrap();

    assert_eq!(children(&doc, div), vec![b, a]);
    assert_eq!(doc.attributes(div).collect::<Vec<_>>(), vec![class]);
}

#[test]
fn test_replace_attributes_keeps_elements() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let a = element(&mut doc, "a");
    let old = doc.create_attribute("id", "old");
    let new = doc.create_attribute("id", "new");
    doc.add_all(div, [Node::from(a), Node::from(old)]).unwrap();

    doc.replace_attributes(div, [new]).unwrap();

    assert_eq!(children(&doc, div), vec![a]);
    assert_eq!(doc.attributes(div).collect::<Vec<_>>(), vec![new]);
}

// ========== removal ==========

#[test]
fn test_remove_from_parent_first_middle_last() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");
    let c = element(&mut doc, "c");
    let d = element(&mut doc, "d");
    doc.add_all(parent, [a, b, c, d]).unwrap();

    doc.remove_from_parent(a);
    assert_eq!(children(&doc, parent), vec![b, c, d]);
    assert_eq!(doc.element(b).previous_sibling(), None);

    doc.remove_from_parent(c);
    assert_eq!(children(&doc, parent), vec![b, d]);
    assert_eq!(doc.element(b).next_sibling(), Some(d));
    assert_eq!(doc.element(d).previous_sibling(), Some(b));

    doc.remove_from_parent(d);
    assert_eq!(children(&doc, parent), vec![b]);
    assert_eq!(doc.element(parent).children().last(), Some(b));

    for removed in [a, c, d] {
        assert_eq!(doc.parent(removed), None);
        assert_eq!(doc.element(removed).next_sibling(), None);
        assert_eq!(doc.element(removed).previous_sibling(), None);
    }
}

#[test]
fn test_remove_from_parent_when_detached_is_noop() {
    let mut doc = Document::new();
    let lonely = element(&mut doc, "p");

    doc.remove_from_parent(lonely);

    assert_eq!(doc.parent(lonely), None);
}

#[test]
fn test_removed_element_can_be_attached_again() {
    let mut doc = Document::new();
    let parent = element(&mut doc, "div");
    let child = element(&mut doc, "p");
    doc.add_element(parent, child).unwrap();
    doc.remove_from_parent(child);

    doc.add_element(parent, child).unwrap();

    assert_eq!(children(&doc, parent), vec![child]);
}

#[test]
fn test_remove_all_detaches_everything() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");
    let a = element(&mut doc, "a");
    let b = element(&mut doc, "b");
    let id = doc.create_attribute("id", "x");
    doc.add_all(div, [Node::from(a), Node::from(b), Node::from(id)])
        .unwrap();

    doc.remove_all(div).unwrap();

    assert!(doc.is_empty(div));
    assert_eq!(doc.element(div).children().first(), None);
    assert_eq!(doc.parent(a), None);
    assert_eq!(doc.parent(b), None);
    assert_eq!(doc.attribute(id).parent(), None);
    assert_eq!(doc.element(a).next_sibling(), None);
}

#[test]
fn test_void_element_rejects_content_mutation() {
    let mut doc = Document::new();
    let hr = doc.create_void_element("hr").unwrap();

    assert!(is_void_error(doc.set_inner_text(hr, "text")));
    assert!(is_void_error(doc.clear_inner_text(hr)));
    assert!(is_void_error(doc.remove_all(hr)));
    assert!(is_void_error(doc.remove_elements(hr)));
    assert!(is_void_error(doc.remove_attributes(hr)));
    assert!(is_void_error(doc.replace_all(hr, Vec::<Node>::new())));
    assert_eq!(doc.element(hr).inner_text(), None);
}

// ========== inner text and indentation bounds ==========

#[test]
fn test_set_and_clear_inner_text() {
    let mut doc = Document::new();
    let p = element(&mut doc, "p");

    doc.set_inner_text(p, "first").unwrap();
    doc.set_inner_text(p, "second").unwrap();
    assert_eq!(doc.element(p).inner_text(), Some("second"));

    doc.clear_inner_text(p).unwrap();
    assert_eq!(doc.element(p).inner_text(), None);
}

#[test]
fn test_indent_bounds_reject_inversion_in_either_order() {
    let mut doc = Document::new();
    let div = element(&mut doc, "div");

    doc.set_max_indent_depth(div, 4).unwrap();
    assert!(matches!(
        doc.set_min_indent_depth(div, 5),
        Err(DomError::InvalidArgument {
            name: "min_indent_depth",
            ..
        })
    ));

    doc.set_min_indent_depth(div, 3).unwrap();
    assert!(matches!(
        doc.set_max_indent_depth(div, 2),
        Err(DomError::InvalidArgument {
            name: "max_indent_depth",
            ..
        })
    ));

    // equal bounds are allowed
    doc.set_max_indent_depth(div, 3).unwrap();
    assert_eq!(doc.element(div).min_indent_depth(), 3);
    assert_eq!(doc.element(div).max_indent_depth(), 3);
}
