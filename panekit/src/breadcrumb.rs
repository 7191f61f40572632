//! Breadcrumb - trail of containers from the sentinel down to the current one.
//!
//! The trail is rebuilt from scratch whenever the container changes. Picking
//! an earlier entry truncates the trail at that entry and publishes its node
//! as the application's current selected container.

use std::any::Any;

use log::{debug, trace, warn};
use panedom::{Document, Event, EventKind, NodeKey};
use uuid::Uuid;

use crate::component::Component;
use crate::config::BreadcrumbConfig;
use crate::error::{BreadcrumbError, ConfigurationError, Error};
use crate::state::{State, Watch};

/// One step of the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntry {
    /// Node this entry points at. Display only; the document owns the node.
    pub node: NodeKey,
    /// Stable identifier of the node, used to match trail activations.
    pub id: Uuid,
    pub label: String,
}

pub struct Breadcrumb {
    config: BreadcrumbConfig,
    /// Control that emits `Action` events carrying an entry id.
    button: NodeKey,
    container: Option<NodeKey>,
    trail: Vec<TrailEntry>,
    /// Application-level "current selected container".
    selection: Watch<Option<NodeKey>>,
}

impl Breadcrumb {
    pub fn new(
        doc: &Document,
        button: NodeKey,
        selection: State<Option<NodeKey>>,
        config: BreadcrumbConfig,
    ) -> Result<Self, ConfigurationError> {
        if !doc.contains(button) {
            return Err(ConfigurationError::MissingButton(button));
        }
        Ok(Self {
            config,
            button,
            container: None,
            trail: Vec::new(),
            selection: selection.watch(),
        })
    }

    pub fn container(&self) -> Option<NodeKey> {
        self.container
    }

    /// Trail entries, root first.
    pub fn trail(&self) -> &[TrailEntry] {
        &self.trail
    }

    pub fn labels(&self) -> Vec<&str> {
        self.trail.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn selection(&self) -> State<Option<NodeKey>> {
        self.selection.state().clone()
    }

    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// Point the breadcrumb at `node` and rebuild the trail.
    ///
    /// On error the previous container and trail are kept.
    pub fn set_container(&mut self, doc: &Document, node: NodeKey) -> Result<(), BreadcrumbError> {
        if self.container == Some(node) {
            return Ok(());
        }
        self.trail = self.build_trail(doc, node)?;
        self.container = Some(node);
        debug!("breadcrumb: container {} -> {:?}", node, self.labels());
        Ok(())
    }

    fn build_trail(&self, doc: &Document, node: NodeKey) -> Result<Vec<TrailEntry>, BreadcrumbError> {
        doc.get(node)?;

        let sentinel = self.config.sentinel_id.as_str();
        let mut trail = Vec::new();

        for ancestor in doc.ancestors(node) {
            if ancestor.dom_id.as_deref() == Some(sentinel) {
                trail.push(TrailEntry {
                    node: ancestor.key,
                    id: ancestor.uuid,
                    label: self.config.root_label.clone(),
                });
                trail.reverse();
                return Ok(trail);
            }
            trail.push(TrailEntry {
                node: ancestor.key,
                id: ancestor.uuid,
                label: ancestor.name.clone(),
            });
        }

        Err(BreadcrumbError::SentinelNotFound {
            container: node,
            sentinel: sentinel.to_string(),
        })
    }

    /// React to a trail item being picked.
    ///
    /// Returns the newly selected node, or `None` when nothing changed:
    /// the id is the current container, or no entry carries it.
    pub fn handle_action(&mut self, selected: Uuid) -> Option<NodeKey> {
        let current = self.trail.last()?.id;
        if selected == current {
            trace!("breadcrumb: {} is already the container", selected);
            return None;
        }

        let Some(pos) = self.trail.iter().rposition(|e| e.id == selected) else {
            warn!(
                "breadcrumb: activated id {} is not on the trail {:?}, ignoring",
                selected,
                self.labels()
            );
            return None;
        };

        self.trail.truncate(pos + 1);
        let node = self.trail[pos].node;
        self.container = Some(node);
        self.selection.state().set(Some(node));
        debug!("breadcrumb: selected {} -> {:?}", node, self.labels());
        Some(node)
    }

    /// Alias of [`Breadcrumb::handle_action`] under the trail-item name.
    pub fn on_trail_item_activated(&mut self, selected: Uuid) -> Option<NodeKey> {
        self.handle_action(selected)
    }

    /// Follow the shared selection if someone else changed it.
    ///
    /// Returns true if the selection changed since the last sync. Other
    /// readers of the selection keep their own view of what is new.
    pub fn sync(&mut self, doc: &Document) -> Result<bool, BreadcrumbError> {
        if !self.selection.take_changed() {
            return Ok(false);
        }
        if let Some(node) = self.selection.get() {
            self.set_container(doc, node)?;
        }
        Ok(true)
    }
}

impl Component for Breadcrumb {
    fn name(&self) -> &'static str {
        "breadcrumb"
    }

    fn prepare_for_draw(&mut self, doc: &mut Document) -> Result<(), Error> {
        doc.add_event_listener(self.button, EventKind::Action)?;
        Ok(())
    }

    fn handle_event(&mut self, _doc: &mut Document, event: &Event) -> Result<bool, Error> {
        let Event::Action { target, value } = event else {
            return Ok(false);
        };
        if *target != self.button {
            return Ok(false);
        }
        match Uuid::parse_str(value) {
            Ok(selected) => {
                self.handle_action(selected);
            }
            Err(e) => warn!("breadcrumb: bad action value {:?}: {}", value, e),
        }
        Ok(true)
    }

    fn needs_draw(&self) -> bool {
        self.selection.is_changed()
    }

    fn draw(&mut self, doc: &mut Document) -> Result<(), Error> {
        match self.sync(doc) {
            Err(BreadcrumbError::SentinelNotFound { container, sentinel }) => {
                warn!(
                    "breadcrumb: selection {} is outside \"{}\", keeping trail",
                    container, sentinel
                );
                Ok(())
            }
            other => other.map(|_| ()).map_err(Error::from),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
