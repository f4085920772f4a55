use rand::{seq::SliceRandom, Rng};

use crate::core::{BayesNet, BayesNetBuilder, UndirectedEdge, UndirectedGraph};

/// Generates a random DAG over binary variables: every vertex gets a random
/// rank and candidate edges are oriented from the lower rank to the higher
/// one, so no cycle can appear
pub(super) fn random_network(
    rng: &mut impl Rng,
    vertices_number: usize,
    edge_probability: f64,
) -> BayesNet {
    let names: Vec<String> = (0..vertices_number).map(|i| format!("v{:03}", i)).collect();
    let mut ranks: Vec<usize> = (0..vertices_number).collect();
    ranks.shuffle(rng);
    let mut builder = BayesNetBuilder::new();
    for name in &names {
        builder.add_vertex(name.clone(), ["t", "f"]).unwrap();
    }
    for i in 0..vertices_number {
        for j in 0..vertices_number {
            if ranks[i] < ranks[j] && rng.gen::<f64>() < edge_probability {
                builder.add_edge(names[i].clone(), names[j].clone()).unwrap();
            }
        }
    }
    builder.build().unwrap()
}

/// A chordless 4-cycle a-b-c-d, the smallest non-chordal graph
pub(super) fn square() -> UndirectedGraph {
    UndirectedGraph::from_edges([
        UndirectedEdge::new("a", "b"),
        UndirectedEdge::new("b", "c"),
        UndirectedEdge::new("c", "d"),
        UndirectedEdge::new("d", "a"),
    ])
}

/// A triangle a-b-c
pub(super) fn triangle() -> UndirectedGraph {
    UndirectedGraph::from_edges([
        UndirectedEdge::new("a", "b"),
        UndirectedEdge::new("b", "c"),
        UndirectedEdge::new("c", "a"),
    ])
}
