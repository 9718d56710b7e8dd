//! Document error types

use crate::node::NodeId;

/// Errors raised by tree mutation and selector queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The id does not belong to this document.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The operation needs an element but got the document root.
    #[error("{0} is not an element")]
    NotAnElement(NodeId),

    /// A reference node is not a direct child of the given parent.
    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The insertion would place a node inside itself or move the root.
    #[error("cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// A sibling-relative insertion was requested on a detached node.
    #[error("{0} has no parent")]
    NoParent(NodeId),

    /// The selector could not be parsed.
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}
