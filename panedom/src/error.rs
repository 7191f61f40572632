use thiserror::Error;
use uuid::Uuid;

use crate::node::NodeKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} is not part of this document")]
    UnknownNode(NodeKey),

    /// Appending would make a node its own ancestor.
    #[error("appending {child} under {parent} would create a cycle")]
    WouldCycle { parent: NodeKey, child: NodeKey },

    #[error("uuid {uuid} already belongs to node {existing}")]
    DuplicateUuid { uuid: Uuid, existing: NodeKey },
}
