use crate::document::Document;
use crate::node::NodeId;

/// Event categories a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The value of a text field changed.
    Input,
}

/// Events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited a text field. Read the new text with
    /// [`Document::value`].
    Input { target: NodeId },
}

impl Event {
    pub fn target(&self) -> NodeId {
        match self {
            Self::Input { target } => *target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Input { .. } => EventKind::Input,
        }
    }
}

/// A callback attached to a node.
///
/// Listeners get the whole document so they can mutate other nodes.
pub type Listener = Box<dyn FnMut(&mut Document, &Event)>;

pub(crate) struct Registered {
    pub(crate) kind: EventKind,
    pub(crate) listener: Listener,
}
