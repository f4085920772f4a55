use std::collections::{BTreeMap, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------

/// Per-vertex data of a Bayesian network: the ordered outcome values of the
/// random variable, its family links and its conditional probability table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexData {
    vals: Vec<String>,
    parents: Vec<String>,
    children: Vec<String>,
    cprob: Array2<f64>,
}

impl VertexData {
    /// Creates a vertex record.
    ///
    /// # Arguments
    ///
    /// * `vals` - Ordered outcome values of the variable
    /// * `parents` - Identifiers of the parent vertices
    /// * `children` - Identifiers of the child vertices
    /// * `cprob` - Conditional probability table; rows enumerate
    ///     combinations of parent values, columns the variable's own values
    pub fn new(
        vals: Vec<String>,
        parents: Vec<String>,
        children: Vec<String>,
        cprob: Array2<f64>,
    ) -> Self {
        VertexData {
            vals,
            parents,
            children,
            cprob,
        }
    }

    /// Returns the ordered outcome values
    #[inline]
    pub fn vals(&self) -> &[String] {
        &self.vals
    }

    /// Returns the number of outcomes of the variable
    #[inline]
    pub fn num_outcomes(&self) -> usize {
        self.vals.len()
    }

    /// Returns the parent identifiers
    #[inline]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Returns the child identifiers
    #[inline]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns the conditional probability table
    #[inline]
    pub fn cprob(&self) -> &Array2<f64> {
        &self.cprob
    }
}

// ------------------------------------------------------------------------------------------

/// A Bayesian network: a directed acyclic graph of random variables with a
/// conditional probability table attached to each vertex.
///
/// A network is assembled once, either by [`BayesNetBuilder`](crate::core::BayesNetBuilder)
/// or by an external construction layer via [`BayesNet::from_parts`], and is
/// treated as read-only by the triangulation subsystem. The acyclicity
/// invariant is enforced by the builder and assumed everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesNet {
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
    data: BTreeMap<String, VertexData>,
}

impl BayesNet {
    /// Assembles a network from raw parts without any validation.
    ///
    /// # Notes
    ///
    /// Construction layers that already guarantee consistency can use this
    /// directly. Inconsistencies (a vertex without a data record, a parent
    /// reference to an unknown vertex, an empty outcome list) are not
    /// rejected here; they surface later as
    /// [`MalformedNetwork`](crate::triangulation::TriangulationError::MalformedNetwork)
    /// when the network is moralized.
    pub fn from_parts(
        vertices: Vec<String>,
        edges: Vec<(String, String)>,
        data: BTreeMap<String, VertexData>,
    ) -> Self {
        BayesNet {
            vertices,
            edges,
            data,
        }
    }

    /// Returns the vertices in insertion order
    #[inline]
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Returns the directed edges as `(from, to)` pairs
    #[inline]
    pub fn directed_edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Returns the data record of a vertex, if it exists
    #[inline]
    pub fn vertex(&self, name: &str) -> Option<&VertexData> {
        self.data.get(name)
    }

    /// Returns `true` if the vertex has a data record
    #[inline]
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Returns the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the vertices ordered so that every parent precedes all of its
    /// children, or `None` if the directed edges contain a cycle.
    ///
    /// # Example
    ///
    /// ```
    /// use chordalize::core::BayesNetBuilder;
    ///
    /// let mut builder = BayesNetBuilder::new();
    /// builder.add_vertex("rain", ["yes", "no"]).unwrap();
    /// builder.add_vertex("wet", ["yes", "no"]).unwrap();
    /// builder.add_edge("rain", "wet").unwrap();
    /// let network = builder.build().unwrap();
    ///
    /// let order = network.topological_order().unwrap();
    /// assert_eq!(order, vec!["rain".to_owned(), "wet".to_owned()]);
    /// ```
    pub fn topological_order(&self) -> Option<Vec<String>> {
        let mut indegree: BTreeMap<&str, usize> =
            self.vertices.iter().map(|v| (v.as_str(), 0)).collect();
        for (_, to) in &self.edges {
            if let Some(degree) = indegree.get_mut(to.as_str()) {
                *degree += 1;
            }
        }
        let mut ready: VecDeque<&str> = self
            .vertices
            .iter()
            .map(String::as_str)
            .filter(|v| indegree[v] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.vertices.len());
        while let Some(vertex) = ready.pop_front() {
            order.push(vertex.to_owned());
            for (from, to) in &self.edges {
                if from == vertex {
                    if let Some(degree) = indegree.get_mut(to.as_str()) {
                        *degree -= 1;
                        if *degree == 0 {
                            ready.push_back(to);
                        }
                    }
                }
            }
        }
        if order.len() == self.vertices.len() {
            Some(order)
        } else {
            None
        }
    }
}
