use semtab_core::alignment::{
    AlignmentGraph, AlignmentNode, ColumnNode, GraphError, InternalNode, LabeledLink, LinkKind,
    LinkLabel,
};

fn person() -> AlignmentNode {
    AlignmentNode::Internal(InternalNode::new(
        "x:person",
        "Person",
        "http://example.org/Person",
    ))
}

fn name_column() -> AlignmentNode {
    AlignmentNode::Column(ColumnNode::new("c:name", "name", "h1", 0))
}

fn has_name(id: &str) -> LabeledLink {
    LabeledLink::new(
        id,
        LinkLabel::new("hasName", "http://example.org/hasName"),
        LinkKind::DataProperty,
    )
}

#[test]
fn test_add_and_lookup_nodes() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();
    graph.add_node(name_column()).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert!(!graph.is_empty());
    assert_eq!(graph.node_by_id("x:person").unwrap().label(), "Person");
    assert!(graph.node_by_id("missing").is_none());
}

#[test]
fn test_duplicate_node_id_rejected() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();

    let err = graph.add_node(person()).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode(id) if id == "x:person"));
}

#[test]
fn test_link_with_unknown_endpoint_rejected() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();

    let err = graph
        .add_link("x:person", "c:missing", has_name("l1"), 1.0)
        .unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode(id) if id == "c:missing"));
    assert_eq!(graph.link_count(), 0);
}

#[test]
fn test_parallel_links_between_same_nodes() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();
    graph.add_node(name_column()).unwrap();

    graph
        .add_link("x:person", "c:name", has_name("l1"), 1.0)
        .unwrap();
    graph
        .add_link("x:person", "c:name", has_name("l2"), 2.0)
        .unwrap();

    assert_eq!(graph.link_count(), 2);
    let ids: Vec<&str> = graph.links().map(|l| l.link.id.as_str()).collect();
    assert!(ids.contains(&"l1"));
    assert!(ids.contains(&"l2"));
}

#[test]
fn test_resolved_links_carry_endpoints_and_weight() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();
    graph.add_node(name_column()).unwrap();
    graph
        .add_link("x:person", "c:name", has_name("l1"), 0.5)
        .unwrap();

    let resolved: Vec<_> = graph.links().collect();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].source.id(), "x:person");
    assert_eq!(resolved[0].target.id(), "c:name");
    assert_eq!(resolved[0].weight, 0.5);
}

#[test]
fn test_has_outgoing() {
    let mut graph = AlignmentGraph::new();
    graph.add_node(person()).unwrap();
    graph.add_node(name_column()).unwrap();
    graph
        .add_link("x:person", "c:name", has_name("l1"), 1.0)
        .unwrap();

    assert!(graph.has_outgoing("x:person"));
    assert!(!graph.has_outgoing("c:name"));
    assert!(!graph.has_outgoing("missing"));
}
