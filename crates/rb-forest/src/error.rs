use thiserror::Error;

use crate::types::NodeId;

/// A structural fault found by [`check_invariants`](crate::red_black::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node {0} is outside the arena")]
    OutOfBounds(NodeId),
    #[error("root {0} has a parent")]
    RootHasParent(NodeId),
    #[error("root {0} is red")]
    RedRoot(NodeId),
    #[error("node {child} does not link back to its parent {parent}")]
    BrokenParentLink { parent: NodeId, child: NodeId },
    #[error("red node {parent} has red child {child}")]
    RedRed { parent: NodeId, child: NodeId },
    #[error("black height mismatch under {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },
    #[error("node {0} is reachable twice")]
    Cycle(NodeId),
    #[error("node {prev} is ordered after its successor {next}")]
    OrderViolation { prev: NodeId, next: NodeId },
}
