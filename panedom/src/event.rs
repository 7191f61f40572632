use crate::node::NodeKey;

/// Events delivered to nodes by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on a node.
    Click { target: NodeKey },
    /// Activation of a control carrying a value (e.g. a trail button).
    Action { target: NodeKey, value: String },
    /// A CSS transition on the node finished.
    TransitionEnd { target: NodeKey },
}

impl Event {
    pub fn target(&self) -> NodeKey {
        match self {
            Event::Click { target }
            | Event::Action { target, .. }
            | Event::TransitionEnd { target } => *target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::Action { .. } => EventKind::Action,
            Event::TransitionEnd { .. } => EventKind::TransitionEnd,
        }
    }
}

/// Event type used as a listener registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Action,
    TransitionEnd,
}
