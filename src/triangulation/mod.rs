mod chordal;
mod error;
mod moral;
mod triangulate;

pub use chordal::{is_chordal, mcs_ordering};
pub use error::{TriangulationError, TriangulationResult};
pub use moral::moralize;
pub use triangulate::{chordal_graph, triangulate, triangulate_batch, EliminationOrder};
