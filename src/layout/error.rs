use serde::Serialize;
use thiserror::Error;

use crate::ir::SpecializationKind;

/// Structural problems found while placing nodes. Every variant is
/// recoverable: the caller skips the affected node, edge or subtree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LayoutError {
    #[error("node {node} has no group")]
    NoGroup { node: u64 },
    #[error("group {group} does not exist for node {node} ({name})")]
    GroupNotFound { node: u64, name: String, group: u64 },
    #[error("orbit {orbit} of node {node} is not described by the tree constants")]
    OrbitOutOfRange { node: u64, orbit: usize },
    #[error("{} {name} has no group holding its start node", .kind.class_name())]
    AnchorNotFound {
        kind: SpecializationKind,
        name: String,
    },
}

impl LayoutError {
    /// Virtual nodes are expected to lack a group; everything else points at
    /// broken input data.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, Self::NoGroup { .. })
    }
}
