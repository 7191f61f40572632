use panedom::{ClassList, Document, DomError, Event, EventKind, Length, NodeSpec, Overflow};

fn chain(doc: &mut Document) -> (panedom::NodeKey, panedom::NodeKey, panedom::NodeKey) {
    let root = doc.insert(NodeSpec::new("BODY").id("UserContent"));
    let section = doc.create_child(root, NodeSpec::new("SECTION")).unwrap();
    let div = doc.create_child(section, NodeSpec::new("DIV")).unwrap();
    (root, section, div)
}

// ============================================================================
// Tree
// ============================================================================

#[test]
fn test_create_child_links_parent() {
    let mut doc = Document::new();
    let (root, section, div) = chain(&mut doc);

    assert_eq!(doc.parent(div).unwrap(), Some(section));
    assert_eq!(doc.parent(section).unwrap(), Some(root));
    assert_eq!(doc.parent(root).unwrap(), None);
    assert_eq!(doc.get(root).unwrap().children, vec![section]);
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_ancestors_nearest_first() {
    let mut doc = Document::new();
    let (_, _, div) = chain(&mut doc);

    let names: Vec<&str> = doc.ancestors(div).map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["DIV", "SECTION", "BODY"]);
}

#[test]
fn test_append_child_rejects_cycle() {
    let mut doc = Document::new();
    let (root, _, div) = chain(&mut doc);

    assert_eq!(
        doc.append_child(div, root),
        Err(DomError::WouldCycle {
            parent: div,
            child: root
        })
    );
    assert_eq!(
        doc.append_child(div, div),
        Err(DomError::WouldCycle {
            parent: div,
            child: div
        })
    );
}

#[test]
fn test_append_child_moves_node() {
    let mut doc = Document::new();
    let (root, section, div) = chain(&mut doc);

    doc.append_child(root, div).unwrap();
    assert_eq!(doc.parent(div).unwrap(), Some(root));
    assert!(doc.get(section).unwrap().children.is_empty());
    assert_eq!(doc.get(root).unwrap().children, vec![section, div]);
}

#[test]
fn test_lookup_by_uuid_and_dom_id() {
    let mut doc = Document::new();
    let (root, section, _) = chain(&mut doc);
    let uuid = doc.get(section).unwrap().uuid;

    assert_eq!(doc.find_by_uuid(uuid), Some(section));
    assert_eq!(doc.find_by_dom_id("UserContent"), Some(root));
    assert_eq!(doc.find_by_dom_id("missing"), None);
}

#[test]
fn test_unknown_node_from_other_document() {
    let mut big = Document::new();
    chain(&mut big);
    let foreign = big.insert(NodeSpec::new("P"));

    let doc = Document::new();
    assert!(!doc.contains(foreign));
    assert_eq!(doc.get(foreign).err(), Some(DomError::UnknownNode(foreign)));
    assert_eq!(doc.ancestors(foreign).count(), 0);
}

#[test]
fn test_same_index_from_other_document_is_rejected() {
    let mut a = Document::new();
    let mut b = Document::new();
    let (a_root, _, _) = chain(&mut a);
    let (b_root, _, _) = chain(&mut b);

    assert_eq!(a_root.index(), b_root.index());
    assert!(!a.contains(b_root));
    assert_eq!(a.get(b_root).err(), Some(DomError::UnknownNode(b_root)));
    assert!(a.add_event_listener(b_root, EventKind::Click).is_err());
}

#[test]
fn test_insert_with_uuid_rejects_duplicate() {
    let mut doc = Document::new();
    let uuid = uuid::Uuid::new_v4();
    let first = doc.insert_with_uuid(NodeSpec::new("DIV"), uuid).unwrap();

    assert_eq!(
        doc.insert_with_uuid(NodeSpec::new("SPAN"), uuid),
        Err(DomError::DuplicateUuid {
            uuid,
            existing: first
        })
    );
    assert_eq!(doc.find_by_uuid(uuid), Some(first));
    assert_eq!(doc.len(), 1);
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_list_toggle() {
    let mut list = ClassList::new();
    assert!(list.toggle("a"));
    assert!(list.contains("a"));
    assert!(!list.toggle("a"));
    assert!(!list.contains("a"));
    assert!(list.is_empty());
}

#[test]
fn test_class_list_no_duplicates() {
    let list: ClassList = ["a", "b", "a"].into_iter().collect();
    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_document_class_helpers() {
    let mut doc = Document::new();
    let node = doc.insert(NodeSpec::new("DIV").class("panel"));

    assert!(doc.has_class(node, "panel").unwrap());
    assert!(doc.add_class(node, "open").unwrap());
    assert!(!doc.add_class(node, "open").unwrap());
    assert!(doc.remove_class(node, "open").unwrap());
    assert!(!doc.remove_class(node, "open").unwrap());
}

// ============================================================================
// Style
// ============================================================================

#[test]
fn test_offset_height_prefers_pinned_px() {
    let mut doc = Document::new();
    let node = doc.insert(NodeSpec::new("DIV").layout_height(80));

    assert_eq!(doc.offset_height(node).unwrap(), 80);
    doc.set_height(node, Length::Px(20)).unwrap();
    assert_eq!(doc.offset_height(node).unwrap(), 20);
    doc.set_height(node, Length::Auto).unwrap();
    assert_eq!(doc.offset_height(node).unwrap(), 80);
}

#[test]
fn test_inline_overflow_overrides_sheet() {
    let mut doc = Document::new();
    let node = doc.insert(NodeSpec::new("DIV").overflow(Overflow::Scroll));

    assert_eq!(doc.computed_overflow(node).unwrap(), Overflow::Scroll);
    doc.set_overflow(node, Overflow::Hidden).unwrap();
    assert_eq!(doc.computed_overflow(node).unwrap(), Overflow::Hidden);
}

#[test]
fn test_style_keywords() {
    assert_eq!(Length::Px(42).to_string(), "42px");
    assert_eq!(Length::Auto.to_string(), "auto");
    assert_eq!("hidden".parse::<Overflow>().unwrap(), Overflow::Hidden);
    assert_eq!(Overflow::Auto.to_string(), "auto");
    assert!("clip-ish".parse::<Overflow>().is_err());
}

// ============================================================================
// Listeners and events
// ============================================================================

#[test]
fn test_listener_registration() {
    let mut doc = Document::new();
    let node = doc.insert(NodeSpec::new("BUTTON"));

    assert!(doc.add_event_listener(node, EventKind::Click).unwrap());
    assert!(!doc.add_event_listener(node, EventKind::Click).unwrap());
    assert!(doc.has_event_listener(node, EventKind::Click));
    assert!(!doc.has_event_listener(node, EventKind::TransitionEnd));
    assert!(doc.remove_event_listener(node, EventKind::Click));
    assert!(!doc.has_event_listener(node, EventKind::Click));
}

#[test]
fn test_event_target_and_kind() {
    let mut doc = Document::new();
    let node = doc.insert(NodeSpec::new("BUTTON"));

    let event = Event::Action {
        target: node,
        value: "x".into(),
    };
    assert_eq!(event.target(), node);
    assert_eq!(event.kind(), EventKind::Action);
    assert_eq!(Event::TransitionEnd { target: node }.kind(), EventKind::TransitionEnd);
}
