use std::{
    collections::{BTreeMap, BTreeSet},
    error::Error,
    fmt::Display,
};

use ndarray::Array2;

use crate::core::network::{BayesNet, VertexData};

// ------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
/// Errors that could appear in network builder's methods
pub enum BayesNetBuilderError {
    /// A vertex with the same identifier was already added
    DuplicateVertex(String),

    /// A vertex was declared with an empty list of outcome values
    EmptyOutcomes(String),

    /// A vertex was declared with a repeated outcome value
    DuplicateOutcome(String, String),

    /// An edge or a probability table references an identifier that does
    /// not belong to any added vertex
    UnknownVertex(String),

    /// A probability table does not match the shape implied by the family
    CptShapeMismatch {
        /// Vertex owning the table
        vertex: String,

        /// Rows and columns implied by the parent and own outcome counts
        expected: (usize, usize),

        /// Rows and columns of the supplied table
        found: (usize, usize),
    },

    /// The directed edges contain a cycle, so the network is not a DAG
    CycleDetected,
}

impl Display for BayesNetBuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BayesNetBuilderError::DuplicateVertex(name) => {
                write!(f, "A vertex named {} was already added", name)
            }
            BayesNetBuilderError::EmptyOutcomes(name) => {
                write!(f, "Vertex {} has an empty list of outcome values", name)
            }
            BayesNetBuilderError::DuplicateOutcome(name, value) => {
                write!(f, "Vertex {} lists the outcome value {} twice", name, value)
            }
            BayesNetBuilderError::UnknownVertex(name) => {
                write!(f, "The identifier {} does not name an added vertex", name)
            }
            BayesNetBuilderError::CptShapeMismatch {
                vertex,
                expected,
                found,
            } => write!(
                f,
                "The probability table of vertex {} has shape {:?} while its family implies {:?}",
                vertex, found, expected,
            ),
            BayesNetBuilderError::CycleDetected => {
                write!(f, "The directed edges contain a cycle")
            }
        }
    }
}

impl Error for BayesNetBuilderError {}

/// Network builder's methods result type
pub type BayesNetBuilderResult<T> = Result<T, BayesNetBuilderError>;

// ------------------------------------------------------------------------------------------

/// A Bayesian network builder.
///
/// Collects vertices, directed edges and optional probability tables, then
/// validates the whole structure in [`build`](BayesNetBuilder::build). This
/// is the construction layer the triangulation subsystem relies on for the
/// acyclicity and table-shape invariants of [`BayesNet`].
#[derive(Debug, Default)]
pub struct BayesNetBuilder {
    vertices: Vec<String>,
    vals: BTreeMap<String, Vec<String>>,
    edges: Vec<(String, String)>,
    cprobs: BTreeMap<String, Array2<f64>>,
}

impl BayesNetBuilder {
    /// Creates an empty builder
    #[inline]
    pub fn new() -> Self {
        BayesNetBuilder {
            vertices: Vec::new(),
            vals: BTreeMap::new(),
            edges: Vec::new(),
            cprobs: BTreeMap::new(),
        }
    }

    /// Adds a random variable with its ordered outcome values
    ///
    /// # Example
    ///
    /// ```
    /// use chordalize::core::BayesNetBuilder;
    ///
    /// let mut builder = BayesNetBuilder::new();
    /// builder.add_vertex("weather", ["sunny", "rainy", "cloudy"]).unwrap();
    /// assert!(builder.add_vertex("weather", ["hot", "cold"]).is_err());
    /// ```
    pub fn add_vertex(
        &mut self,
        name: impl Into<String>,
        vals: impl IntoIterator<Item = impl Into<String>>,
    ) -> BayesNetBuilderResult<()> {
        let name = name.into();
        if self.vals.contains_key(&name) {
            return Err(BayesNetBuilderError::DuplicateVertex(name));
        }
        let vals: Vec<String> = vals.into_iter().map(Into::into).collect();
        if vals.is_empty() {
            return Err(BayesNetBuilderError::EmptyOutcomes(name));
        }
        let mut seen = BTreeSet::new();
        for value in &vals {
            if !seen.insert(value.as_str()) {
                return Err(BayesNetBuilderError::DuplicateOutcome(name, value.clone()));
            }
        }
        self.vertices.push(name.clone());
        self.vals.insert(name, vals);
        Ok(())
    }

    /// Adds a directed dependency from `parent` to `child`; both vertices
    /// must have been added before. Adding the same edge twice is a no-op
    pub fn add_edge(
        &mut self,
        parent: impl Into<String>,
        child: impl Into<String>,
    ) -> BayesNetBuilderResult<()> {
        let (parent, child) = (parent.into(), child.into());
        if !self.vals.contains_key(&parent) {
            return Err(BayesNetBuilderError::UnknownVertex(parent));
        }
        if !self.vals.contains_key(&child) {
            return Err(BayesNetBuilderError::UnknownVertex(child));
        }
        let edge = (parent, child);
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
        Ok(())
    }

    /// Sets the conditional probability table of a vertex. The shape is
    /// validated against the family at build time, once all edges are known
    pub fn set_cprob(&mut self, name: &str, cprob: Array2<f64>) -> BayesNetBuilderResult<()> {
        if !self.vals.contains_key(name) {
            return Err(BayesNetBuilderError::UnknownVertex(name.to_owned()));
        }
        self.cprobs.insert(name.to_owned(), cprob);
        Ok(())
    }

    /// Validates the accumulated structure and returns the network.
    ///
    /// Family links are derived from the edges in insertion order. Vertices
    /// without an explicit probability table get a uniform one. Tables whose
    /// shape disagrees with `(product of parent outcome counts, own outcome
    /// count)` and edge sets that close a cycle are rejected
    pub fn build(mut self) -> BayesNetBuilderResult<BayesNet> {
        let mut parents: BTreeMap<String, Vec<String>> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        let mut children: BTreeMap<String, Vec<String>> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for (from, to) in &self.edges {
            if let Some(family) = parents.get_mut(to.as_str()) {
                family.push(from.clone());
            }
            if let Some(family) = children.get_mut(from.as_str()) {
                family.push(to.clone());
            }
        }

        let mut data = BTreeMap::new();
        for name in &self.vertices {
            let vals = &self.vals[name];
            let vertex_parents = parents.remove(name.as_str()).unwrap_or_default();
            let vertex_children = children.remove(name.as_str()).unwrap_or_default();
            let rows: usize = vertex_parents
                .iter()
                .map(|p| self.vals[p].len())
                .product();
            let cols = vals.len();
            let cprob = match self.cprobs.remove(name) {
                Some(cprob) => {
                    if cprob.dim() != (rows, cols) {
                        return Err(BayesNetBuilderError::CptShapeMismatch {
                            vertex: name.clone(),
                            expected: (rows, cols),
                            found: cprob.dim(),
                        });
                    }
                    cprob
                }
                None => Array2::from_elem((rows, cols), 1f64 / cols as f64),
            };
            data.insert(
                name.clone(),
                VertexData::new(vals.clone(), vertex_parents, vertex_children, cprob),
            );
        }

        let network = BayesNet::from_parts(self.vertices, self.edges, data);
        if network.topological_order().is_none() {
            return Err(BayesNetBuilderError::CycleDetected);
        }
        Ok(network)
    }
}
