use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::core::{BayesNet, UndirectedEdge, UndirectedGraph};
use crate::triangulation::chordal::is_chordal;
use crate::triangulation::error::{TriangulationError, TriangulationResult};
use crate::triangulation::moral::moralize;

// ------------------------------------------------------------------------------------------

/// Selection of the vertex elimination order used by [`triangulate`]
#[derive(Debug, Clone)]
pub enum EliminationOrder {
    /// Vertices ordered ascending by their degree in the input graph, ties
    /// broken by the lowest identifier. A bounded-quality greedy heuristic:
    /// minimal fill-in is NP-hard, lowest-degree-first only minimizes the
    /// fill-in cost of each single step
    MinDegree,

    /// A caller-provided elimination order and starting edge set, trusted
    /// verbatim instead of recomputing degrees
    Custom {
        /// Vertices in the order they are eliminated
        vertices: Vec<String>,

        /// Starting edge set replacing the input graph's edges
        edges: UndirectedGraph,
    },
}

/// Triangulates an undirected graph, returning a chordal supergraph of it.
///
/// An already chordal input is returned unchanged, as an equal edge set.
/// Otherwise the elimination game of Cano & Moral ("Heuristic Algorithms
/// for the Triangulation of Graphs") runs: vertices are eliminated one by
/// one and the still-present neighbors of each eliminated vertex are
/// connected pairwise. The accumulated fill-in edges make the result
/// chordal by construction.
///
/// # Arguments
///
/// * `graph` - The graph to triangulate, typically a moral graph
/// * `order` - The elimination order policy, see [`EliminationOrder`]
///
/// # Notes
///
/// The input is never mutated and shares no storage with the result: the
/// accumulating chordal graph and the shrinking working graph are two
/// explicit copies. Each elimination step scans a neighbor set and may add
/// O(degree^2) fill-in edges, so the worst case is O(V * maxdegree^2).
///
/// A vertex named by a custom order but isolated in the custom edge set
/// contributes no fill-in and is not an error; a custom order naming a
/// vertex absent from the base graph is rejected with
/// [`TriangulationError::InconsistentEdgeOverride`].
///
/// # Example
///
/// ```
/// use chordalize::core::{UndirectedEdge, UndirectedGraph};
/// use chordalize::triangulation::{is_chordal, triangulate, EliminationOrder};
///
/// let square = UndirectedGraph::from_edges([
///     UndirectedEdge::new("a", "b"),
///     UndirectedEdge::new("b", "c"),
///     UndirectedEdge::new("c", "d"),
///     UndirectedEdge::new("d", "a"),
/// ]);
/// let chordal = triangulate(&square, EliminationOrder::MinDegree).unwrap();
/// assert!(is_chordal(&chordal));
/// assert!(chordal.is_superset_of(&square));
/// ```
pub fn triangulate(
    graph: &UndirectedGraph,
    order: EliminationOrder,
) -> TriangulationResult<UndirectedGraph> {
    if is_chordal(graph) {
        debug!("the input graph is already chordal, no fill-in needed");
        return Ok(graph.clone());
    }

    let (candidates, mut chordal) = match order {
        EliminationOrder::MinDegree => {
            let mut vertices: Vec<String> = graph.vertices().map(str::to_owned).collect();
            vertices.sort_by_key(|vertex| (graph.degree(vertex), vertex.clone()));
            (vertices, graph.clone())
        }
        EliminationOrder::Custom { vertices, edges } => {
            let mut unknown = BTreeSet::new();
            for vertex in vertices.iter().filter(|v| !graph.contains_vertex(v)) {
                unknown.insert(vertex.clone());
            }
            for vertex in edges.vertices().filter(|v| !graph.contains_vertex(v)) {
                unknown.insert(vertex.to_owned());
            }
            if !unknown.is_empty() {
                return Err(TriangulationError::InconsistentEdgeOverride {
                    unknown: unknown.into_iter().collect(),
                });
            }
            (vertices, edges)
        }
    };

    let mut working = chordal.clone();
    let edges_before = chordal.edge_count();
    for vertex in &candidates {
        let adjacent: Vec<String> = working
            .neighbors(vertex)
            .into_iter()
            .map(str::to_owned)
            .collect();
        for (i, a1) in adjacent.iter().enumerate() {
            for a2 in &adjacent[i + 1..] {
                if chordal.insert_edge(UndirectedEdge::new(a1.clone(), a2.clone())) {
                    working.insert_edge(UndirectedEdge::new(a1.clone(), a2.clone()));
                }
            }
        }
        working.remove_vertex(vertex);
    }
    debug!(
        "triangulation added {} fill-in edges",
        chordal.edge_count() - edges_before,
    );
    Ok(chordal)
}

/// Moralizes a Bayesian network and triangulates the moral graph with the
/// lowest-degree-first heuristic.
///
/// This is the preprocessing pipeline an exact inference engine runs before
/// building its clique tree; the returned graph is what such an engine
/// consumes, no assumption is made here about how it represents cliques.
///
/// # Example
///
/// ```
/// use chordalize::core::BayesNetBuilder;
/// use chordalize::triangulation::{chordal_graph, is_chordal};
///
/// let mut builder = BayesNetBuilder::new();
/// builder.add_vertex("A", ["t", "f"]).unwrap();
/// builder.add_vertex("B", ["t", "f"]).unwrap();
/// builder.add_vertex("C", ["t", "f"]).unwrap();
/// builder.add_edge("A", "C").unwrap();
/// builder.add_edge("B", "C").unwrap();
/// let network = builder.build().unwrap();
///
/// // the moral graph is a triangle, already chordal
/// let chordal = chordal_graph(&network).unwrap();
/// assert!(is_chordal(&chordal));
/// assert_eq!(chordal.edge_count(), 3);
/// ```
pub fn chordal_graph(network: &BayesNet) -> TriangulationResult<UndirectedGraph> {
    let moral = moralize(network)?;
    triangulate(&moral, EliminationOrder::MinDegree)
}

/// Triangulates independent graphs in parallel with the
/// lowest-degree-first heuristic.
///
/// A single triangulation run is inherently sequential, every elimination
/// step depends on the fill-ins of the previous ones. Independent graphs
/// share no state though, so a batch of them maps cleanly onto a rayon
/// worker pool, one result per input graph
pub fn triangulate_batch(
    graphs: &[UndirectedGraph],
) -> Vec<TriangulationResult<UndirectedGraph>> {
    graphs
        .par_iter()
        .map(|graph| triangulate(graph, EliminationOrder::MinDegree))
        .collect()
}
