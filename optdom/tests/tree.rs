use optdom::{Adjacent, Document, DomError, ElementBuilder};

fn list_doc() -> (Document, optdom::NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let list = doc
        .mount(
            body,
            ElementBuilder::div()
                .id("list")
                .child(ElementBuilder::div().id("a"))
                .child(ElementBuilder::div().id("b")),
        )
        .unwrap();
    (doc, list)
}

fn by_id(doc: &Document, id: &str) -> optdom::NodeId {
    doc.query_selector(&format!("#{id}")).unwrap().unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_document_has_connected_body() {
    let doc = Document::new();
    assert_eq!(doc.tag_name(doc.body()), Some("body"));
    assert_eq!(doc.parent(doc.body()), Some(doc.root()));
    assert!(doc.is_connected(doc.body()));
    assert_eq!(doc.tag_name(doc.root()), None);
}

#[test]
fn test_created_element_is_detached() {
    let mut doc = Document::new();
    let div = doc.create_element("DIV");
    assert_eq!(doc.tag_name(div), Some("div"));
    assert_eq!(doc.parent(div), None);
    assert!(!doc.is_connected(div));
}

#[test]
fn test_mount_builds_subtree_in_order() {
    let (doc, list) = list_doc();
    let children = doc.children(list);
    assert_eq!(children.len(), 2);
    assert_eq!(doc.attr(children[0], "id"), Some("a"));
    assert_eq!(doc.attr(children[1], "id"), Some("b"));
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_insert_adjacent_before_begin() {
    let (mut doc, list) = list_doc();
    let b = by_id(&doc, "b");
    let new = doc.create_element("span");

    doc.insert_adjacent(b, Adjacent::BeforeBegin, new).unwrap();

    assert_eq!(doc.previous_element_sibling(b), Some(new));
    assert_eq!(doc.parent(new), Some(list));
    assert_eq!(doc.children(list).len(), 3);
}

#[test]
fn test_insert_adjacent_after_begin() {
    let (mut doc, list) = list_doc();
    let new = doc.create_element("span");

    doc.insert_adjacent(list, Adjacent::AfterBegin, new).unwrap();

    assert_eq!(doc.first_element_child(list), Some(new));
}

#[test]
fn test_insert_adjacent_before_end_and_after_end() {
    let (mut doc, list) = list_doc();
    let a = by_id(&doc, "a");
    let last = doc.create_element("span");
    let after = doc.create_element("span");

    doc.insert_adjacent(list, Adjacent::BeforeEnd, last).unwrap();
    doc.insert_adjacent(a, Adjacent::AfterEnd, after).unwrap();

    assert_eq!(doc.children(list).last(), Some(&last));
    assert_eq!(doc.next_element_sibling(a), Some(after));
}

#[test]
fn test_insert_adjacent_before_begin_requires_parent() {
    let mut doc = Document::new();
    let detached = doc.create_element("select");
    let input = doc.create_element("input");

    assert_eq!(
        doc.insert_adjacent(detached, Adjacent::BeforeBegin, input),
        Err(DomError::NoParent(detached))
    );
}

#[test]
fn test_insert_moves_attached_node() {
    let (mut doc, list) = list_doc();
    let a = by_id(&doc, "a");
    let b = by_id(&doc, "b");

    doc.append_child(list, a).unwrap();

    assert_eq!(doc.children(list), &[b, a]);
}

#[test]
fn test_insert_rejects_cycles() {
    let (mut doc, list) = list_doc();
    let a = by_id(&doc, "a");

    assert_eq!(
        doc.append_child(a, list),
        Err(DomError::HierarchyRequest {
            parent: a,
            child: list
        })
    );
    assert_eq!(
        doc.append_child(list, list),
        Err(DomError::HierarchyRequest {
            parent: list,
            child: list
        })
    );
}

#[test]
fn test_insert_before_rejects_foreign_reference() {
    let (mut doc, list) = list_doc();
    let body = doc.body();
    let new = doc.create_element("span");

    let result = doc.insert_before(body, new, Some(by_id(&doc, "a")));
    assert!(matches!(result, Err(DomError::NotAChild { .. })));
    assert_eq!(doc.parent(new), None);
    assert_eq!(doc.children(list).len(), 2);
}

#[test]
fn test_root_cannot_be_inserted() {
    let (mut doc, list) = list_doc();
    let root = doc.root();
    assert_eq!(doc.append_child(list, root), Err(DomError::NotAnElement(root)));
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_detaches_subtree() {
    let (mut doc, list) = list_doc();
    let a = by_id(&doc, "a");

    doc.remove(list).unwrap();

    assert!(!doc.is_connected(list));
    assert!(!doc.is_connected(a));
    assert_eq!(doc.parent(a), Some(list));
    assert_eq!(doc.query_selector("#a").unwrap(), None);
}
