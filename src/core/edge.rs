use std::fmt::Display;

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------

/// An undirected edge between two vertices kept in a canonical form: the
/// lexicographically smaller identifier is always the first endpoint, so
/// `(a, b)` and `(b, a)` denote the same value and cannot coexist in a set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UndirectedEdge {
    first: String,
    second: String,
}

impl UndirectedEdge {
    /// Creates an edge from two endpoints given in any order
    ///
    /// # Example
    ///
    /// ```
    /// use chordalize::core::UndirectedEdge;
    ///
    /// assert_eq!(UndirectedEdge::new("b", "a"), UndirectedEdge::new("a", "b"));
    /// ```
    #[inline]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        let (x, y) = (x.into(), y.into());
        if x <= y {
            UndirectedEdge { first: x, second: y }
        } else {
            UndirectedEdge { first: y, second: x }
        }
    }

    /// Returns both endpoints in canonical order
    #[inline]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Returns `true` if `vertex` is one of the endpoints
    #[inline]
    pub fn touches(&self, vertex: &str) -> bool {
        self.first == vertex || self.second == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex`
    /// is not an endpoint of this edge
    #[inline]
    pub fn opposite(&self, vertex: &str) -> Option<&str> {
        if self.first == vertex {
            Some(&self.second)
        } else if self.second == vertex {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl Display for UndirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.first, self.second)
    }
}
