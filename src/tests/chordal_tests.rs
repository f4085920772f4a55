use crate::core::{UndirectedEdge, UndirectedGraph};
use crate::tests::utils::{square, triangle};
use crate::triangulation::{is_chordal, mcs_ordering};

#[test]
fn empty_graph_is_chordal() {
    assert!(is_chordal(&UndirectedGraph::new()));
}

#[test]
fn single_vertex_is_chordal() {
    let mut graph = UndirectedGraph::new();
    graph.insert_vertex("a");
    assert!(is_chordal(&graph));
}

#[test]
fn edgeless_graph_is_chordal() {
    let mut graph = UndirectedGraph::new();
    for vertex in ["a", "b", "c", "d"] {
        graph.insert_vertex(vertex);
    }
    assert!(is_chordal(&graph));
}

#[test]
fn triangle_is_chordal() {
    assert!(is_chordal(&triangle()));
}

#[test]
fn path_is_chordal() {
    let path = UndirectedGraph::from_edges([
        UndirectedEdge::new("a", "b"),
        UndirectedEdge::new("b", "c"),
        UndirectedEdge::new("c", "d"),
    ]);
    assert!(is_chordal(&path));
}

#[test]
fn chordless_square_is_not_chordal() {
    assert!(!is_chordal(&square()));
}

#[test]
fn square_with_a_diagonal_is_chordal() {
    let mut braced = square();
    braced.insert_edge(UndirectedEdge::new("a", "c"));
    assert!(is_chordal(&braced));
}

#[test]
fn chordless_pentagon_is_not_chordal() {
    let pentagon = UndirectedGraph::from_edges([
        UndirectedEdge::new("a", "b"),
        UndirectedEdge::new("b", "c"),
        UndirectedEdge::new("c", "d"),
        UndirectedEdge::new("d", "e"),
        UndirectedEdge::new("e", "a"),
    ]);
    assert!(!is_chordal(&pentagon));
}

#[test]
fn disconnected_triangles_are_chordal() {
    let graph = UndirectedGraph::from_edges([
        UndirectedEdge::new("a", "b"),
        UndirectedEdge::new("b", "c"),
        UndirectedEdge::new("c", "a"),
        UndirectedEdge::new("x", "y"),
        UndirectedEdge::new("y", "z"),
        UndirectedEdge::new("z", "x"),
    ]);
    assert!(is_chordal(&graph));
}

#[test]
fn mcs_ordering_is_deterministic_and_complete() {
    let graph = square();
    let first = mcs_ordering(&graph);
    let second = mcs_ordering(&graph);
    assert_eq!(first, second);
    assert_eq!(first.len(), graph.vertex_count());
    // all weights start at zero, so the lowest identifier goes first
    assert_eq!(first[0], "a");
}
