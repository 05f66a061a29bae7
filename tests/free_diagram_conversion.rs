mod util;

use free_diagrams::{
    DiscreteDiagram, EdgeId, FreeDiagram, InvalidDiagram, Multicospan, Multispan, NodeKey,
    ParallelMorphisms, SquareDiagram,
};
use util::Path;

fn vertex_labels(diagram: &FreeDiagram<String, Path>) -> Vec<String> {
    diagram.vertices().map(|(_, ob)| ob.clone()).collect()
}

fn edge_labels(diagram: &FreeDiagram<String, Path>) -> Vec<Path> {
    diagram.edges().map(|(_, hom)| hom.clone()).collect()
}

fn endpoints(diagram: &FreeDiagram<String, Path>) -> Vec<(NodeKey, NodeKey)> {
    diagram
        .edges()
        .map(|(e, _)| (diagram.src(e).unwrap(), diagram.tgt(e).unwrap()))
        .collect()
}

#[test]
fn discrete_diagram_converts_to_vertices_only() {
    let discrete = DiscreteDiagram::new(vec!["A".to_owned(), "B".to_owned(), "C".to_owned()]);
    let diagram: FreeDiagram<String, Path> = discrete.into();
    assert_eq!(vertex_labels(&diagram), vec!["A", "B", "C"]);
    assert_eq!(diagram.edge_count(), 0);
}

#[test]
fn multispan_converts_apex_first_then_feet_in_leg_order() {
    let legs = vec![
        Path::generator("f", "A", "B"),
        Path::generator("g", "A", "C"),
        Path::generator("h", "A", "D"),
    ];
    let span = Multispan::from_legs(legs.clone()).unwrap();
    let diagram: FreeDiagram<String, Path> = span.into();

    assert_eq!(vertex_labels(&diagram), vec!["A", "B", "C", "D"]);
    assert_eq!(edge_labels(&diagram), legs);
    assert_eq!(
        endpoints(&diagram),
        vec![
            (NodeKey(0), NodeKey(1)),
            (NodeKey(0), NodeKey(2)),
            (NodeKey(0), NodeKey(3)),
        ]
    );
}

#[test]
fn multicospan_converts_feet_first_then_base() {
    let legs = vec![
        Path::generator("f", "A", "D"),
        Path::generator("g", "B", "D"),
        Path::generator("h", "C", "D"),
    ];
    let cospan = Multicospan::from_legs(legs.clone()).unwrap();
    let diagram: FreeDiagram<String, Path> = cospan.into();

    assert_eq!(vertex_labels(&diagram), vec!["A", "B", "C", "D"]);
    assert_eq!(edge_labels(&diagram), legs);
    assert_eq!(
        endpoints(&diagram),
        vec![
            (NodeKey(0), NodeKey(3)),
            (NodeKey(1), NodeKey(3)),
            (NodeKey(2), NodeKey(3)),
        ]
    );
}

#[test]
fn parallel_family_converts_to_parallel_edges() {
    let homs = vec![
        Path::generator("f", "D", "C"),
        Path::generator("g", "D", "C"),
        Path::generator("h", "D", "C"),
    ];
    let family = ParallelMorphisms::new(homs.clone()).unwrap();
    let diagram: FreeDiagram<String, Path> = family.into();

    assert_eq!(vertex_labels(&diagram), vec!["D", "C"]);
    assert_eq!(edge_labels(&diagram), homs);
    assert_eq!(
        endpoints(&diagram),
        vec![
            (NodeKey(0), NodeKey(1)),
            (NodeKey(0), NodeKey(1)),
            (NodeKey(0), NodeKey(1)),
        ]
    );
}

#[test]
fn square_converts_with_the_pinned_vertex_and_edge_order() {
    let t = Path::generator("t", "A", "C");
    let b = Path::generator("b", "B", "D");
    let l = Path::generator("l", "A", "B");
    let r = Path::generator("r", "C", "D");
    let square = SquareDiagram::new(t.clone(), b.clone(), l.clone(), r.clone()).unwrap();
    let diagram: FreeDiagram<String, Path> = square.into();

    assert_eq!(vertex_labels(&diagram), vec!["A", "B", "C", "D"]);
    assert_eq!(edge_labels(&diagram), vec![t, b, l, r]);
    assert_eq!(
        endpoints(&diagram),
        vec![
            (NodeKey(0), NodeKey(2)),
            (NodeKey(1), NodeKey(3)),
            (NodeKey(0), NodeKey(1)),
            (NodeKey(2), NodeKey(3)),
        ]
    );
}

#[test]
fn from_parts_builds_a_labeled_multigraph() {
    let objects = vec!["A".to_owned(), "B".to_owned()];
    let edges = vec![
        (0, 1, Path::generator("f", "A", "B")),
        (0, 1, Path::generator("g", "A", "B")),
        (1, 1, Path::generator("loop", "B", "B")),
    ];
    let diagram = FreeDiagram::from_parts(objects, edges).unwrap();
    assert_eq!(diagram.vertex_count(), 2);
    assert_eq!(diagram.edge_count(), 3);
    assert_eq!(diagram.src(EdgeId(2)), Some(NodeKey(1)));
    assert_eq!(diagram.tgt(EdgeId(2)), Some(NodeKey(1)));
    assert_eq!(
        diagram.hom(EdgeId(1)),
        Some(&Path::generator("g", "A", "B"))
    );
}

#[test_log::test]
fn from_parts_rejects_mismatched_endpoint_labels() {
    let objects = vec!["A".to_owned(), "B".to_owned()];

    let err = FreeDiagram::from_parts(
        objects.clone(),
        vec![(0, 1, Path::generator("f", "X", "B"))],
    )
    .unwrap_err();
    assert_eq!(
        *err.current_context(),
        InvalidDiagram::SourceMismatch { index: 0 }
    );

    let err = FreeDiagram::from_parts(
        objects.clone(),
        vec![
            (0, 1, Path::generator("f", "A", "B")),
            (1, 0, Path::generator("g", "B", "X")),
        ],
    )
    .unwrap_err();
    assert_eq!(
        *err.current_context(),
        InvalidDiagram::TargetMismatch { index: 1 }
    );

    let err = FreeDiagram::from_parts(objects, vec![(0, 5, Path::generator("f", "A", "B"))])
        .unwrap_err();
    assert_eq!(
        *err.current_context(),
        InvalidDiagram::VertexOutOfBounds {
            index: 0,
            vertex: 5,
            len: 2
        }
    );
}

#[test_log::test]
fn incremental_builder_checks_the_labeling_invariant() {
    let mut diagram = FreeDiagram::<String, Path>::new();
    let a = diagram.add_vertex("A".to_owned());
    let b = diagram.add_vertex("B".to_owned());

    let e = diagram
        .add_edge(a, b, Path::generator("f", "A", "B"))
        .unwrap();
    assert_eq!(diagram.hom(e), Some(&Path::generator("f", "A", "B")));

    let err = diagram
        .add_edge(a, b, Path::generator("g", "B", "B"))
        .unwrap_err();
    assert_eq!(
        *err.current_context(),
        InvalidDiagram::SourceMismatch { index: 1 }
    );

    let err = diagram
        .add_edge(a, NodeKey(9), Path::generator("g", "A", "B"))
        .unwrap_err();
    assert_eq!(
        *err.current_context(),
        InvalidDiagram::UnknownVertex { vertex: NodeKey(9) }
    );
}

#[test]
fn bulk_inserts_preserve_order() {
    let mut diagram = FreeDiagram::<String, Path>::new();
    let keys = diagram.add_vertices(["A".to_owned(), "B".to_owned(), "C".to_owned()]);
    assert_eq!(keys, vec![NodeKey(0), NodeKey(1), NodeKey(2)]);

    let edges = diagram
        .add_edges(vec![
            (keys[0], keys[1], Path::generator("f", "A", "B")),
            (keys[1], keys[2], Path::generator("g", "B", "C")),
        ])
        .unwrap();
    assert_eq!(edges, vec![EdgeId(0), EdgeId(1)]);
    assert_eq!(
        edge_labels(&diagram),
        vec![
            Path::generator("f", "A", "B"),
            Path::generator("g", "B", "C"),
        ]
    );
}
