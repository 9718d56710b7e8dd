use optdom::{Document, ElementBuilder, NodeId};
use option_filter::{ErrorKind, FilterParams, OptionFilter, OptionFilterError};

fn sample() -> Document {
    let mut doc = Document::new();
    let body = doc.body();
    doc.mount(
        body,
        ElementBuilder::section()
            .child(ElementBuilder::div().id("not-a-select"))
            .child(ElementBuilder::select().id("people").child(ElementBuilder::option("a"))),
    )
    .unwrap();
    doc
}

// ============================================================================
// TargetMissing
// ============================================================================

#[test]
fn test_unknown_selector_is_missing() {
    let doc = sample();
    let err = OptionFilter::new(&doc, FilterParams::new("#nobody")).unwrap_err();

    assert!(err.is_target_missing());
    assert!(matches!(
        err.kind(),
        ErrorKind::TargetMissing { target } if target == "selector \"#nobody\""
    ));
}

#[test]
fn test_invalid_selector_is_missing() {
    let doc = sample();
    let err = OptionFilter::new(&doc, FilterParams::new("select > option")).unwrap_err();
    assert!(err.is_target_missing());
}

#[test]
fn test_foreign_node_is_missing() {
    let doc = sample();
    let mut bigger = Document::new();
    let foreign: NodeId = (0..16).map(|_| bigger.create_element("select")).last().unwrap();

    let err = OptionFilter::new(&doc, FilterParams::new(foreign)).unwrap_err();
    assert!(err.is_target_missing());
}

// ============================================================================
// TargetWrongType
// ============================================================================

#[test]
fn test_non_select_node_is_wrong_type() {
    let doc = sample();
    let div = doc.query_selector("#not-a-select").unwrap().unwrap();

    let err = OptionFilter::new(&doc, FilterParams::new(div)).unwrap_err();

    assert!(err.is_target_wrong_type());
    assert!(matches!(err.kind(), ErrorKind::TargetWrongType { tag } if tag == "div"));
}

#[test]
fn test_non_select_selector_is_wrong_type() {
    let doc = sample();
    let err = OptionFilter::new(&doc, FilterParams::new("section")).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TargetWrongType { tag } if tag == "section"));
}

#[test]
fn test_document_root_is_wrong_type() {
    let doc = sample();
    let err = OptionFilter::new(&doc, FilterParams::new(doc.root())).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TargetWrongType { tag } if tag == "#document"));
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn test_display_carries_name_message_and_call_site() {
    let doc = sample();
    let err = OptionFilter::new(&doc, FilterParams::new("#nobody")).unwrap_err();
    let line = line!() - 1;

    let rendered = err.to_string();
    assert!(rendered.starts_with("OptionFilterError:\n"), "{rendered}");
    assert!(rendered.contains("select element not found for selector \"#nobody\""));
    assert!(err.location().file().ends_with("errors.rs"));
    assert_eq!(err.location().line(), line);
    assert!(rendered.contains(&format!("errors.rs:{line}:")));
    assert_eq!(OptionFilterError::NAME, "OptionFilterError");
}

#[test]
fn test_apply_filter_requires_init() {
    let mut doc = sample();
    let filter = OptionFilter::new(&doc, FilterParams::new("#people")).unwrap();

    let err = filter.apply_filter(&mut doc).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::NotInitialized));
}
