use std::cell::RefCell;
use std::rc::Rc;

use optdom::{Document, DomError, ElementBuilder, Event, EventKind, NodeId};

fn doc_with_input() -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let input = doc.mount(body, ElementBuilder::input()).unwrap();
    (doc, input)
}

#[test]
fn test_dispatch_without_listeners() {
    let (mut doc, input) = doc_with_input();
    assert_eq!(doc.dispatch(Event::Input { target: input }), Ok(0));
}

#[test]
fn test_listeners_run_in_registration_order() {
    let (mut doc, input) = doc_with_input();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second"] {
        let seen = Rc::clone(&seen);
        doc.add_event_listener(input, EventKind::Input, move |doc, event| {
            seen.borrow_mut()
                .push(format!("{tag}:{}", doc.value(event.target())));
        })
        .unwrap();
    }

    doc.type_text(input, "abc").unwrap();

    assert_eq!(*seen.borrow(), ["first:abc", "second:abc"]);
    assert_eq!(doc.listener_count(input, EventKind::Input), 2);
}

#[test]
fn test_listener_can_mutate_document() {
    let (mut doc, input) = doc_with_input();
    let body = doc.body();
    let echo = doc.mount(body, ElementBuilder::div()).unwrap();

    doc.add_event_listener(input, EventKind::Input, move |doc, event| {
        let text = doc.value(event.target());
        doc.set_text(echo, &text).unwrap();
    })
    .unwrap();

    doc.type_text(input, "hello").unwrap();
    assert_eq!(doc.text(echo), "hello");

    doc.type_text(input, "").unwrap();
    assert_eq!(doc.text(echo), "");
}

#[test]
fn test_listener_added_during_dispatch_runs_next_time() {
    let (mut doc, input) = doc_with_input();
    let count = Rc::new(RefCell::new(0));

    let outer = Rc::clone(&count);
    doc.add_event_listener(input, EventKind::Input, move |doc, event| {
        let inner = Rc::clone(&outer);
        doc.add_event_listener(event.target(), EventKind::Input, move |_, _| {
            *inner.borrow_mut() += 1;
        })
        .unwrap();
    })
    .unwrap();

    assert_eq!(doc.dispatch(Event::Input { target: input }), Ok(1));
    assert_eq!(*count.borrow(), 0);
    assert_eq!(doc.dispatch(Event::Input { target: input }), Ok(2));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_set_value_does_not_fire() {
    let (mut doc, input) = doc_with_input();
    let fired = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&fired);
    doc.add_event_listener(input, EventKind::Input, move |_, _| {
        *flag.borrow_mut() = true;
    })
    .unwrap();

    doc.set_value(input, "quiet").unwrap();
    assert!(!*fired.borrow());
}

#[test]
fn test_listener_on_root_is_rejected() {
    let mut doc = Document::new();
    let root = doc.root();
    assert_eq!(
        doc.add_event_listener(root, EventKind::Input, |_, _| {}),
        Err(DomError::NotAnElement(root))
    );
}
