use std::{error::Error, fmt::Display};

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Errors that could appear in the triangulation subsystem's methods
pub enum TriangulationError {
    /// A vertex record required for moralization is missing or inconsistent
    MalformedNetwork {
        /// Vertex whose record is unusable
        vertex: String,

        /// What exactly is missing or inconsistent
        problem: String,
    },

    /// A custom elimination order references vertices absent from the base graph
    InconsistentEdgeOverride {
        /// Identifiers present in the override but not in the base graph
        unknown: Vec<String>,
    },
}

impl Display for TriangulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriangulationError::MalformedNetwork { vertex, problem } => {
                write!(f, "Vertex {} cannot be moralized: {}", vertex, problem)
            }
            TriangulationError::InconsistentEdgeOverride { unknown } => write!(
                f,
                "The custom elimination order references vertices absent from the base graph: {:?}",
                unknown,
            ),
        }
    }
}

impl Error for TriangulationError {}

/// Triangulation subsystem's methods result type
pub type TriangulationResult<T> = Result<T, TriangulationError>;
