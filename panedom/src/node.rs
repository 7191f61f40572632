use std::fmt;

use uuid::Uuid;

use crate::class_list::ClassList;
use crate::types::{InlineStyle, Overflow};

/// Handle to a node inside a [`crate::Document`].
///
/// Copying a key never keeps a node alive. Each key carries the id of the
/// document that issued it, and other documents reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub(crate) doc: u64,
    pub(crate) index: usize,
}

impl NodeKey {
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.doc, self.index)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    // Identity
    pub key: NodeKey,
    /// Stable identifier, unique across documents.
    pub uuid: Uuid,
    /// Tag name, e.g. "DIV".
    pub name: String,
    /// Value of the `id` attribute.
    pub dom_id: Option<String>,

    // Tree
    pub parent: Option<NodeKey>,
    pub children: Vec<NodeKey>,

    // Visual
    pub classes: ClassList,
    pub style: InlineStyle,
    /// Overflow as resolved from the stylesheet, before inline overrides.
    pub sheet_overflow: Overflow,
    /// Height the layout pass gives the node when no inline height pins it.
    pub layout_height: u32,
}

impl Node {
    pub fn computed_overflow(&self) -> Overflow {
        self.style.overflow.unwrap_or(self.sheet_overflow)
    }
}

/// Builder describing a node before it is inserted into a document.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub name: String,
    pub dom_id: Option<String>,
    pub classes: ClassList,
    pub sheet_overflow: Overflow,
    pub layout_height: u32,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.sheet_overflow = overflow;
        self
    }

    pub fn layout_height(mut self, height: u32) -> Self {
        self.layout_height = height;
        self
    }
}
