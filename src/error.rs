use thiserror::Error;

use crate::{NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("Negative cycle reachable from source (edge {from} -> {to} still relaxes)")]
    NegativeCycle { from: NodeId, to: NodeId },
}

pub type Result<T> = std::result::Result<T, RoutingError>;
