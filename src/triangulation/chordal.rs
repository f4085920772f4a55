use std::collections::BTreeMap;

use crate::core::UndirectedGraph;

// ------------------------------------------------------------------------------------------

/// Computes a maximum cardinality search ordering of the graph's vertices:
/// the next vertex is always an unvisited one with the largest number of
/// already visited neighbors, ties broken by the lowest identifier so the
/// ordering is deterministic.
///
/// The reverse of this ordering is a perfect elimination ordering exactly
/// when the graph is chordal, which is what [`is_chordal`] verifies.
pub fn mcs_ordering(graph: &UndirectedGraph) -> Vec<String> {
    let mut weights: BTreeMap<&str, usize> = graph.vertices().map(|v| (v, 0)).collect();
    let mut order = Vec::with_capacity(weights.len());
    while !weights.is_empty() {
        // the first strict maximum in identifier order is the tie-break winner
        let mut next = None;
        for (vertex, weight) in &weights {
            match next {
                Some((_, best)) if best >= *weight => {}
                _ => next = Some((*vertex, *weight)),
            }
        }
        let (next, _) = match next {
            Some(found) => found,
            None => break,
        };
        weights.remove(next);
        for neighbor in graph.neighbors(next) {
            if let Some(weight) = weights.get_mut(neighbor) {
                *weight += 1;
            }
        }
        order.push(next.to_owned());
    }
    order
}

/// Decides whether a graph is chordal, i.e. whether every cycle of length
/// four or more has a chord.
///
/// Runs a maximum cardinality search and verifies that the reverse of the
/// visit order is a perfect elimination ordering: for every vertex, the
/// neighbors visited strictly earlier must form a clique in the graph.
/// Graphs without vertices and graphs without edges are chordal by
/// definition. The input is never mutated.
///
/// # Notes
///
/// The clique verification scans every pair of earlier neighbors of every
/// vertex, so the worst case is O(V * maxdegree^2) edge membership checks.
///
/// # Example
///
/// ```
/// use chordalize::core::{UndirectedEdge, UndirectedGraph};
/// use chordalize::triangulation::is_chordal;
///
/// let square = UndirectedGraph::from_edges([
///     UndirectedEdge::new("a", "b"),
///     UndirectedEdge::new("b", "c"),
///     UndirectedEdge::new("c", "d"),
///     UndirectedEdge::new("d", "a"),
/// ]);
/// assert!(!is_chordal(&square));
///
/// let mut braced = square.clone();
/// braced.insert_edge(UndirectedEdge::new("a", "c"));
/// assert!(is_chordal(&braced));
/// ```
pub fn is_chordal(graph: &UndirectedGraph) -> bool {
    let order = mcs_ordering(graph);
    let position: BTreeMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, vertex)| (vertex.as_str(), i))
        .collect();
    for (visited_at, vertex) in order.iter().enumerate() {
        let earlier: Vec<&str> = graph
            .neighbors(vertex)
            .into_iter()
            .filter(|neighbor| position.get(*neighbor).map_or(false, |p| *p < visited_at))
            .collect();
        for i in 0..earlier.len() {
            for j in i + 1..earlier.len() {
                if !graph.contains_edge(earlier[i], earlier[j]) {
                    return false;
                }
            }
        }
    }
    true
}
