//! Headless document: an arena of nodes plus listener registrations.
//!
//! Nodes are never removed once inserted, so a [`NodeKey`] handed out by a
//! document stays valid for that document's lifetime.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;
use uuid::Uuid;

use crate::error::DomError;
use crate::event::EventKind;
use crate::node::{Node, NodeKey, NodeSpec};
use crate::types::{Length, Overflow};

static NEXT_DOC_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct Document {
    id: u64,
    nodes: Vec<Node>,
    by_uuid: HashMap<Uuid, NodeKey>,
    listeners: HashSet<(NodeKey, EventKind)>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            id: NEXT_DOC_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            by_uuid: HashMap::new(),
            listeners: HashSet::new(),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: NodeKey) -> Option<usize> {
        (key.doc == self.id && key.index < self.nodes.len()).then_some(key.index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Tree
    // =========================================================================

    /// Insert a detached node with a freshly generated uuid.
    pub fn insert(&mut self, spec: NodeSpec) -> NodeKey {
        self.push(spec, Uuid::new_v4())
    }

    /// Insert a detached node under a caller-chosen uuid.
    pub fn insert_with_uuid(&mut self, spec: NodeSpec, uuid: Uuid) -> Result<NodeKey, DomError> {
        if let Some(&existing) = self.by_uuid.get(&uuid) {
            return Err(DomError::DuplicateUuid { uuid, existing });
        }
        Ok(self.push(spec, uuid))
    }

    fn push(&mut self, spec: NodeSpec, uuid: Uuid) -> NodeKey {
        let key = NodeKey {
            doc: self.id,
            index: self.nodes.len(),
        };
        self.nodes.push(Node {
            key,
            uuid,
            name: spec.name,
            dom_id: spec.dom_id,
            parent: None,
            children: Vec::new(),
            classes: spec.classes,
            style: Default::default(),
            sheet_overflow: spec.sheet_overflow,
            layout_height: spec.layout_height,
        });
        self.by_uuid.insert(uuid, key);
        key
    }

    /// Insert a node and append it under `parent`.
    pub fn create_child(&mut self, parent: NodeKey, spec: NodeSpec) -> Result<NodeKey, DomError> {
        self.get(parent)?;
        let child = self.insert(spec);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Move `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), DomError> {
        self.get(child)?;
        self.get(parent)?;

        let mut cursor = Some(parent);
        while let Some(key) = cursor {
            if key == child {
                return Err(DomError::WouldCycle { parent, child });
            }
            cursor = self.nodes[key.index].parent;
        }

        if let Some(old) = self.nodes[child.index].parent {
            self.nodes[old.index].children.retain(|&c| c != child);
        }
        self.nodes[child.index].parent = Some(parent);
        self.nodes[parent.index].children.push(child);
        trace!("append_child: {} -> {}", child, parent);
        Ok(())
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.slot(key).is_some()
    }

    pub fn get(&self, key: NodeKey) -> Result<&Node, DomError> {
        self.slot(key)
            .map(|i| &self.nodes[i])
            .ok_or(DomError::UnknownNode(key))
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Result<&mut Node, DomError> {
        match self.slot(key) {
            Some(i) => Ok(&mut self.nodes[i]),
            None => Err(DomError::UnknownNode(key)),
        }
    }

    pub fn parent(&self, key: NodeKey) -> Result<Option<NodeKey>, DomError> {
        Ok(self.get(key)?.parent)
    }

    pub fn find_by_uuid(&self, uuid: Uuid) -> Option<NodeKey> {
        self.by_uuid.get(&uuid).copied()
    }

    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeKey> {
        self.nodes
            .iter()
            .find(|n| n.dom_id.as_deref() == Some(dom_id))
            .map(|n| n.key)
    }

    /// Iterate from `key` (inclusive) up to the root.
    pub fn ancestors(&self, key: NodeKey) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.contains(key).then_some(key),
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub fn has_class(&self, key: NodeKey, class: &str) -> Result<bool, DomError> {
        Ok(self.get(key)?.classes.contains(class))
    }

    pub fn add_class(&mut self, key: NodeKey, class: &str) -> Result<bool, DomError> {
        Ok(self.get_mut(key)?.classes.add(class))
    }

    pub fn remove_class(&mut self, key: NodeKey, class: &str) -> Result<bool, DomError> {
        Ok(self.get_mut(key)?.classes.remove(class))
    }

    pub fn toggle_class(&mut self, key: NodeKey, class: &str) -> Result<bool, DomError> {
        Ok(self.get_mut(key)?.classes.toggle(class))
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn height(&self, key: NodeKey) -> Result<Option<Length>, DomError> {
        Ok(self.get(key)?.style.height)
    }

    pub fn set_height(&mut self, key: NodeKey, height: Length) -> Result<(), DomError> {
        self.get_mut(key)?.style.height = Some(height);
        Ok(())
    }

    pub fn set_overflow(&mut self, key: NodeKey, overflow: Overflow) -> Result<(), DomError> {
        self.get_mut(key)?.style.overflow = Some(overflow);
        Ok(())
    }

    pub fn computed_overflow(&self, key: NodeKey) -> Result<Overflow, DomError> {
        Ok(self.get(key)?.computed_overflow())
    }

    /// Rendered height: a pinned pixel height wins, otherwise layout decides.
    pub fn offset_height(&self, key: NodeKey) -> Result<u32, DomError> {
        let node = self.get(key)?;
        Ok(match node.style.height {
            Some(Length::Px(px)) => px,
            _ => node.layout_height,
        })
    }

    /// Feed a new natural height from the layout pass.
    pub fn set_layout_height(&mut self, key: NodeKey, height: u32) -> Result<(), DomError> {
        self.get_mut(key)?.layout_height = height;
        Ok(())
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register interest in `kind` events on `key`. Returns false if already registered.
    pub fn add_event_listener(&mut self, key: NodeKey, kind: EventKind) -> Result<bool, DomError> {
        self.get(key)?;
        Ok(self.listeners.insert((key, kind)))
    }

    pub fn remove_event_listener(&mut self, key: NodeKey, kind: EventKind) -> bool {
        self.listeners.remove(&(key, kind))
    }

    pub fn has_event_listener(&self, key: NodeKey, kind: EventKind) -> bool {
        self.listeners.contains(&(key, kind))
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeKey>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.doc.get(self.next?).ok()?;
        self.next = node.parent;
        Some(node)
    }
}
