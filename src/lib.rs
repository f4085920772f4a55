/// A module containing the Bayesian network model and undirected graph primitives
pub mod core;
/// A module containing moralization, the chordality test and the triangulation heuristic
pub mod triangulation;

#[cfg(test)]
mod tests;
