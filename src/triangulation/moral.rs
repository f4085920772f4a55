use log::debug;

use crate::core::{BayesNet, UndirectedEdge, UndirectedGraph};
use crate::triangulation::error::{TriangulationError, TriangulationResult};

// ------------------------------------------------------------------------------------------

/// Computes the moral graph of a Bayesian network.
///
/// Every directed edge is kept as an undirected connection and every
/// unordered pair of distinct parents of a vertex gets connected; duplicates
/// across orientation are impossible because edges are stored in canonical
/// form. The network is never mutated, the moral graph owns its own storage.
///
/// # Notes
///
/// Returns [`TriangulationError::MalformedNetwork`] if a listed vertex has
/// no data record, declares no outcome values, or references a parent that
/// does not belong to the network. Networks assembled by
/// [`BayesNetBuilder`](crate::core::BayesNetBuilder) never trigger these.
///
/// # Example
///
/// ```
/// use chordalize::core::BayesNetBuilder;
/// use chordalize::triangulation::moralize;
///
/// // Two independent causes of the same effect
/// let mut builder = BayesNetBuilder::new();
/// builder.add_vertex("A", ["t", "f"]).unwrap();
/// builder.add_vertex("B", ["t", "f"]).unwrap();
/// builder.add_vertex("C", ["t", "f"]).unwrap();
/// builder.add_edge("A", "C").unwrap();
/// builder.add_edge("B", "C").unwrap();
/// let network = builder.build().unwrap();
///
/// // The parent pair gets married
/// let moral = moralize(&network).unwrap();
/// assert!(moral.contains_edge("A", "B"));
/// assert_eq!(moral.edge_count(), 3);
/// ```
pub fn moralize(network: &BayesNet) -> TriangulationResult<UndirectedGraph> {
    let mut moral = UndirectedGraph::new();
    for vertex in network.vertices() {
        moral.insert_vertex(vertex.clone());
    }
    for (from, to) in network.directed_edges() {
        moral.insert_edge(UndirectedEdge::new(from.clone(), to.clone()));
    }

    let mut married_pairs = 0usize;
    for vertex in network.vertices() {
        let data = network
            .vertex(vertex)
            .ok_or_else(|| TriangulationError::MalformedNetwork {
                vertex: vertex.clone(),
                problem: "the vertex has no data record".to_owned(),
            })?;
        if data.vals().is_empty() {
            return Err(TriangulationError::MalformedNetwork {
                vertex: vertex.clone(),
                problem: "the list of outcome values is empty".to_owned(),
            });
        }
        let parents = data.parents();
        for parent in parents {
            if !network.contains_vertex(parent) {
                return Err(TriangulationError::MalformedNetwork {
                    vertex: vertex.clone(),
                    problem: format!("the parent {} does not belong to the network", parent),
                });
            }
        }
        for (i, p1) in parents.iter().enumerate() {
            for p2 in &parents[i + 1..] {
                if p1 != p2 && moral.insert_edge(UndirectedEdge::new(p1.clone(), p2.clone())) {
                    married_pairs += 1;
                }
            }
        }
    }
    debug!("moralization connected {} parent pairs", married_pairs);
    Ok(moral)
}
