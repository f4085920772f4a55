use rand::thread_rng;

use crate::core::{BayesNetBuilder, UndirectedGraph};
use crate::tests::utils::{random_network, square, triangle};
use crate::triangulation::{
    chordal_graph, is_chordal, moralize, triangulate, triangulate_batch, EliminationOrder,
    TriangulationError,
};

#[test]
fn chordal_input_is_returned_unchanged() {
    let input = triangle();
    let output = triangulate(&input, EliminationOrder::MinDegree).unwrap();
    assert_eq!(input, output);
}

#[test]
fn square_gets_a_diagonal() {
    let input = square();
    let output = triangulate(&input, EliminationOrder::MinDegree).unwrap();
    assert!(is_chordal(&output));
    assert!(output.is_superset_of(&input));
    assert_eq!(output.edge_count(), 5);
    assert!(output.contains_edge("a", "c") || output.contains_edge("b", "d"));
}

#[test]
fn empty_graph_triangulates_to_an_empty_graph() {
    let output = triangulate(&UndirectedGraph::new(), EliminationOrder::MinDegree).unwrap();
    assert_eq!(output.edge_count(), 0);
    assert_eq!(output.vertex_count(), 0);
}

#[test]
fn triangulation_is_idempotent() {
    let once = triangulate(&square(), EliminationOrder::MinDegree).unwrap();
    let twice = triangulate(&once, EliminationOrder::MinDegree).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn custom_order_is_trusted_verbatim() {
    let base = square();
    let order = EliminationOrder::Custom {
        vertices: vec![
            "d".to_owned(),
            "c".to_owned(),
            "b".to_owned(),
            "a".to_owned(),
        ],
        edges: base.clone(),
    };
    let output = triangulate(&base, order).unwrap();
    // eliminating d first connects its neighbors a and c
    assert!(output.contains_edge("a", "c"));
    assert!(is_chordal(&output));
    assert!(output.is_superset_of(&base));
}

#[test]
fn custom_order_may_name_isolated_vertices() {
    let mut base = square();
    base.insert_vertex("e");
    let order = EliminationOrder::Custom {
        vertices: vec![
            "e".to_owned(),
            "a".to_owned(),
            "b".to_owned(),
            "c".to_owned(),
            "d".to_owned(),
        ],
        edges: square(),
    };
    let output = triangulate(&base, order).unwrap();
    assert!(is_chordal(&output));
}

#[test]
fn custom_order_naming_unknown_vertices_is_rejected() {
    let base = square();
    let order = EliminationOrder::Custom {
        vertices: vec!["z".to_owned(), "a".to_owned()],
        edges: base.clone(),
    };
    let error = triangulate(&base, order).unwrap_err();
    assert_eq!(
        error,
        TriangulationError::InconsistentEdgeOverride {
            unknown: vec!["z".to_owned()],
        },
    );
}

#[test]
fn pipeline_handles_a_non_chordal_moral_graph() {
    // the moral graph is the 5-cycle a-b-c-d-e-a plus the married pair a-d,
    // which leaves the chordless square a-b-c-d
    let mut builder = BayesNetBuilder::new();
    for name in ["a", "b", "c", "d", "e"] {
        builder.add_vertex(name, ["t", "f"]).unwrap();
    }
    builder.add_edge("a", "b").unwrap();
    builder.add_edge("b", "c").unwrap();
    builder.add_edge("c", "d").unwrap();
    builder.add_edge("d", "e").unwrap();
    builder.add_edge("a", "e").unwrap();
    let network = builder.build().unwrap();

    let moral = moralize(&network).unwrap();
    assert!(moral.contains_edge("a", "d"));
    assert!(!is_chordal(&moral));

    let chordal = chordal_graph(&network).unwrap();
    assert!(is_chordal(&chordal));
    assert!(chordal.is_superset_of(&moral));
}

#[test]
fn batch_matches_individual_runs() {
    let graphs = vec![square(), triangle(), UndirectedGraph::new()];
    let batch = triangulate_batch(&graphs);
    assert_eq!(batch.len(), graphs.len());
    for (graph, result) in graphs.iter().zip(&batch) {
        let individual = triangulate(graph, EliminationOrder::MinDegree).unwrap();
        assert_eq!(result.as_ref().unwrap(), &individual);
    }
}

#[test]
fn random_networks_satisfy_the_postconditions() {
    let mut rng = thread_rng();
    for _ in 0..20 {
        let network = random_network(&mut rng, 12, 0.3);
        let moral = moralize(&network).unwrap();
        let chordal = triangulate(&moral, EliminationOrder::MinDegree).unwrap();
        assert!(is_chordal(&chordal));
        assert!(chordal.is_superset_of(&moral));
        let again = triangulate(&chordal, EliminationOrder::MinDegree).unwrap();
        assert_eq!(chordal, again);
    }
}
