mod edge;
mod network;
mod network_builder;
mod undirected_graph;

pub use edge::UndirectedEdge;
pub use network::{BayesNet, VertexData};
pub use network_builder::{BayesNetBuilder, BayesNetBuilderError, BayesNetBuilderResult};
pub use undirected_graph::UndirectedGraph;
