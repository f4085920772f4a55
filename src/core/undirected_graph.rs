use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::edge::UndirectedEdge;

// ------------------------------------------------------------------------------------------

/// An undirected graph owning its vertex and edge sets.
///
/// Instances are derived views (moral graphs, chordal graphs) that never
/// alias the network they were computed from; callers create one per
/// triangulation request and discard it afterwards. `BTreeSet` storage
/// makes edge membership checks logarithmic and keeps iteration order
/// deterministic. Isolated vertices are representable: the vertex set is
/// not required to equal the set of edge endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedGraph {
    vertices: BTreeSet<String>,
    edges: BTreeSet<UndirectedEdge>,
}

impl UndirectedGraph {
    /// Creates an empty graph
    #[inline]
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Creates a graph from an edge iterator; the vertex set is the set
    /// of all endpoints
    ///
    /// # Example
    ///
    /// ```
    /// use chordalize::core::{UndirectedEdge, UndirectedGraph};
    ///
    /// let triangle = UndirectedGraph::from_edges([
    ///     UndirectedEdge::new("a", "b"),
    ///     UndirectedEdge::new("b", "c"),
    ///     UndirectedEdge::new("c", "a"),
    /// ]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// assert_eq!(triangle.edge_count(), 3);
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = UndirectedEdge>) -> Self {
        let mut graph = UndirectedGraph::new();
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Adds a vertex without edges; returns `false` if it was already present
    #[inline]
    pub fn insert_vertex(&mut self, vertex: impl Into<String>) -> bool {
        self.vertices.insert(vertex.into())
    }

    /// Adds an edge, registering both endpoints as vertices; returns `false`
    /// if the edge was already present in either orientation
    pub fn insert_edge(&mut self, edge: UndirectedEdge) -> bool {
        let (x, y) = edge.endpoints();
        self.vertices.insert(x.to_owned());
        self.vertices.insert(y.to_owned());
        self.edges.insert(edge)
    }

    /// Removes a vertex together with all its incident edges
    pub fn remove_vertex(&mut self, vertex: &str) {
        self.vertices.remove(vertex);
        self.edges.retain(|edge| !edge.touches(vertex));
    }

    /// Returns `true` if the two vertices are connected, in whichever
    /// orientation the query is phrased
    #[inline]
    pub fn contains_edge(&self, x: &str, y: &str) -> bool {
        self.edges.contains(&UndirectedEdge::new(x, y))
    }

    /// Returns `true` if the vertex belongs to the graph
    #[inline]
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns the set of vertices adjacent to `vertex`
    pub fn neighbors(&self, vertex: &str) -> BTreeSet<&str> {
        self.edges
            .iter()
            .filter_map(|edge| edge.opposite(vertex))
            .collect()
    }

    /// Returns the number of edges incident to `vertex`
    pub fn degree(&self, vertex: &str) -> usize {
        self.edges.iter().filter(|edge| edge.touches(vertex)).count()
    }

    /// Iterates over the vertices in identifier order
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    /// Iterates over the edges in canonical order
    pub fn edges(&self) -> impl Iterator<Item = &UndirectedEdge> {
        self.edges.iter()
    }

    /// Returns the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if every edge of `other` is present in this graph
    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.edges.is_subset(&self.edges)
    }
}
