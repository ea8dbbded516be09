use std::collections::BTreeMap;

use blind::{construct, construct_with, state, BlindError, BlindOptions, BlindState};
use blind_dom::{Document, Element, NodeId, Value};

/// A document holding a source `<div title="I am the title">` and the blind
/// built around it.
fn default_blind() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new();
    let src = doc.mount(Element::div().title("I am the title"));
    let blind = construct(&mut doc, src).unwrap();
    (doc, src, blind)
}

fn title_of(doc: &Document, blind: NodeId) -> NodeId {
    doc.query_class(blind, "blind__title").unwrap()
}

fn content_of(doc: &Document, blind: NodeId) -> NodeId {
    doc.query_class(blind, "blind__content").unwrap()
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_accepts_an_element() {
    let mut doc = Document::new();
    let src = doc.create_element("div");
    assert!(construct(&mut doc, src).is_ok());
}

#[test]
fn test_requires_an_element() {
    let mut doc = Document::new();

    assert_eq!(construct(&mut doc, Value::Null), Err(BlindError::InvalidArgument));
    assert_eq!(construct(&mut doc, None::<NodeId>), Err(BlindError::InvalidArgument));
    assert_eq!(construct(&mut doc, 42_i32), Err(BlindError::InvalidArgument));
    assert_eq!(construct(&mut doc, true), Err(BlindError::InvalidArgument));
    assert_eq!(construct(&mut doc, "div"), Err(BlindError::InvalidArgument));
    assert_eq!(
        construct(&mut doc, BTreeMap::from([("title".to_string(), Value::from("x"))])),
        Err(BlindError::InvalidArgument)
    );
}

#[test]
fn test_rejects_text_and_removed_nodes() {
    let mut doc = Document::new();
    let text = doc.create_text("not an element");
    let gone = doc.create_element("div");
    doc.remove(gone).unwrap();

    assert_eq!(construct(&mut doc, text), Err(BlindError::InvalidArgument));
    assert_eq!(construct(&mut doc, gone), Err(BlindError::InvalidArgument));
}

#[test]
fn test_invalid_argument_creates_nothing() {
    let mut doc = Document::new();
    let before = doc.len();
    let _ = construct(&mut doc, Value::Null);
    assert_eq!(doc.len(), before);
}

#[test]
fn test_error_message() {
    assert_eq!(BlindError::InvalidArgument.to_string(), "an element is required");
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_returns_a_new_element() {
    let (doc, src, blind) = default_blind();
    assert!(doc.is_element(blind));
    assert_ne!(blind, src);
}

#[test]
fn test_creates_a_blind_container() {
    let (doc, _, blind) = default_blind();
    assert!(doc.has_class(blind, "blind"));
}

#[test]
fn test_creates_a_title_container() {
    let (doc, _, blind) = default_blind();
    let first = doc.first_child(blind).unwrap();
    assert!(doc.has_class(first, "blind__title"));
}

#[test]
fn test_uses_the_title_attribute_for_the_title() {
    let (doc, _, blind) = default_blind();
    let title = title_of(&doc, blind);
    assert_eq!(doc.text_content(title).as_deref(), Some("I am the title"));
}

#[test]
fn test_creates_a_content_container() {
    let (doc, _, blind) = default_blind();
    let second = doc.child(blind, 1).unwrap();
    assert!(doc.has_class(second, "blind__content"));
    assert_eq!(doc.children(blind).len(), 2);
}

#[test]
fn test_puts_the_content_inside_the_content_container() {
    let (doc, src, blind) = default_blind();
    let content = content_of(&doc, blind);
    assert_eq!(doc.children(content), &[src]);
    assert_eq!(doc.parent(src), Some(content));
}

#[test]
fn test_missing_title_gives_empty_title_bar() {
    let mut doc = Document::new();
    let src = doc.create_element("section");
    let blind = construct(&mut doc, src).unwrap();

    let title = title_of(&doc, blind);
    assert_eq!(doc.text_content(title).as_deref(), Some(""));
}

#[test]
fn test_title_is_read_once() {
    let (mut doc, src, blind) = default_blind();
    doc.set_attribute(src, "title", "Renamed").unwrap();

    let title = title_of(&doc, blind);
    assert_eq!(doc.text_content(title).as_deref(), Some("I am the title"));
}

#[test]
fn test_moves_element_out_of_its_old_parent() {
    let mut doc = Document::new();
    let page = doc.mount(
        Element::div()
            .child(Element::p().title("Details").text("body"))
            .child(Element::p().text("after")),
    );
    let src = doc.first_child(page).unwrap();

    let blind = construct(&mut doc, src).unwrap();
    assert_eq!(doc.children(page).len(), 1);
    assert!(!doc.children(page).contains(&src));
    assert_eq!(doc.parent(src), Some(content_of(&doc, blind)));
    assert_eq!(doc.text_content(src).as_deref(), Some("body"));
}

#[test]
fn test_renders_expected_markup() {
    let (doc, _, blind) = default_blind();
    assert_eq!(
        doc.outer_html(blind).as_deref(),
        Some(concat!(
            r#"<div class="blind">"#,
            r#"<div class="blind__title">I am the title</div>"#,
            r#"<div class="blind__content blind__content--closed">"#,
            r#"<div title="I am the title"></div>"#,
            "</div></div>",
        ))
    );
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn test_starts_closed() {
    let (doc, _, blind) = default_blind();
    let content = content_of(&doc, blind);
    assert!(doc.has_class(content, "blind__content--closed"));
    assert!(!doc.has_class(content, "blind__content--open"));
}

#[test]
fn test_opens_when_title_clicked() {
    let (mut doc, _, blind) = default_blind();
    let title = title_of(&doc, blind);
    let content = content_of(&doc, blind);

    doc.click(title).unwrap();

    assert!(doc.has_class(content, "blind__content--open"));
    assert!(!doc.has_class(content, "blind__content--closed"));
}

#[test]
fn test_closes_when_title_clicked_twice() {
    let (mut doc, _, blind) = default_blind();
    let title = title_of(&doc, blind);
    let content = content_of(&doc, blind);

    doc.click(title).unwrap();
    doc.click(title).unwrap();

    assert!(doc.has_class(content, "blind__content--closed"));
    assert!(!doc.has_class(content, "blind__content--open"));
}

#[test]
fn test_toggle_parity() {
    let (mut doc, _, blind) = default_blind();
    let title = title_of(&doc, blind);
    let options = BlindOptions::default();

    for clicks in 1..=7 {
        doc.click(title).unwrap();
        let expected = if clicks % 2 == 1 {
            BlindState::Open
        } else {
            BlindState::Closed
        };
        assert_eq!(state(&doc, blind, &options), Some(expected));
    }
}

#[test]
fn test_clicking_content_does_not_toggle() {
    let (mut doc, src, blind) = default_blind();
    let options = BlindOptions::default();

    doc.click(src).unwrap();
    doc.click(content_of(&doc, blind)).unwrap();
    doc.click(blind).unwrap();
    assert_eq!(state(&doc, blind, &options), Some(BlindState::Closed));
}

#[test]
fn test_click_inside_title_bubbles_to_title() {
    let (mut doc, _, blind) = default_blind();
    let title = title_of(&doc, blind);
    let text = doc.first_child(title).unwrap();

    doc.click(text).unwrap();
    assert_eq!(
        state(&doc, blind, &BlindOptions::default()),
        Some(BlindState::Open)
    );
}

#[test]
fn test_blinds_toggle_independently() {
    let mut doc = Document::new();
    let a = doc.mount(Element::div().title("A"));
    let b = doc.mount(Element::div().title("B"));
    let blind_a = construct(&mut doc, a).unwrap();
    let blind_b = construct(&mut doc, b).unwrap();
    let options = BlindOptions::default();

    doc.click(title_of(&doc, blind_a)).unwrap();
    assert_eq!(state(&doc, blind_a, &options), Some(BlindState::Open));
    assert_eq!(state(&doc, blind_b, &options), Some(BlindState::Closed));
}

#[test]
fn test_removing_blind_frees_everything() {
    let (mut doc, src, blind) = default_blind();
    doc.remove(blind).unwrap();
    assert!(!doc.contains(src));
    assert!(doc.is_empty());
}

// ============================================================================
// Options and state
// ============================================================================

#[test]
fn test_custom_block_name() {
    let mut doc = Document::new();
    let src = doc.mount(Element::p().title("FAQ"));
    let options = BlindOptions::new("faq").tag("section");
    let blind = construct_with(&mut doc, src, &options).unwrap();

    assert_eq!(doc.tag(blind), Some("section"));
    assert!(doc.has_class(blind, "faq"));
    let title = doc.query_class(blind, "faq__title").unwrap();
    let content = doc.query_class(blind, "faq__content").unwrap();
    assert!(doc.has_class(content, "faq__content--closed"));

    doc.click(title).unwrap();
    assert!(doc.has_class(content, "faq__content--open"));
    assert_eq!(state(&doc, blind, &options), Some(BlindState::Open));
    assert_eq!(state(&doc, blind, &BlindOptions::default()), None);
}

#[test]
fn test_state_of_non_blind() {
    let mut doc = Document::new();
    let plain = doc.mount(Element::div().class("blind"));
    assert_eq!(state(&doc, plain, &BlindOptions::default()), None);
}

#[test]
fn test_rejects_malformed_options() {
    let mut doc = Document::new();
    let src = doc.mount(Element::div().title("T"));
    let before = doc.len();

    for options in [
        BlindOptions::new(""),
        BlindOptions::new("my panel"),
        BlindOptions::default().tag(""),
    ] {
        assert!(matches!(
            construct_with(&mut doc, src, &options),
            Err(BlindError::InvalidOptions(_))
        ));
    }
    assert_eq!(doc.len(), before);
    assert_eq!(doc.parent(src), None);
}
