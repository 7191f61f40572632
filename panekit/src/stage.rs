//! Stage - host runtime for mounted components.
//!
//! Owns the document and the components, routes events to whichever
//! component listens on the target, and runs one draw pass per `flush`.

use log::{debug, trace};
use panedom::{Document, Event, NodeKey};

use crate::component::Component;
use crate::error::Error;
use crate::state::State;

/// Index of a mounted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

/// Result of event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No listener on the target, or no component claimed the event.
    NotHandled,
    /// Event was handled by the given component.
    Handled(ComponentId),
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

pub struct Stage {
    doc: Document,
    components: Vec<Box<dyn Component>>,
    /// Application-level "current selected container".
    selection: State<Option<NodeKey>>,
    frame: u64,
}

impl Stage {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            components: Vec::new(),
            selection: State::new(None),
            frame: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Shared selection field; hand a clone to components that publish to it.
    pub fn selection(&self) -> State<Option<NodeKey>> {
        self.selection.clone()
    }

    /// Number of completed flushes.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Mount a component and run its one-time setup.
    pub fn mount(&mut self, mut component: impl Component) -> Result<ComponentId, Error> {
        component.prepare_for_draw(&mut self.doc)?;
        let id = ComponentId(self.components.len());
        debug!("stage: mounted {} as {:?}", component.name(), id);
        self.components.push(Box::new(component));
        Ok(id)
    }

    pub fn component<T: Component>(&self, id: ComponentId) -> Option<&T> {
        self.components.get(id.0)?.as_any().downcast_ref::<T>()
    }

    /// Borrow a component together with the document, for direct calls such
    /// as `Collapser::toggle`.
    pub fn component_mut<T: Component>(&mut self, id: ComponentId) -> Option<(&mut T, &mut Document)> {
        let component = self.components.get_mut(id.0)?.as_any_mut().downcast_mut::<T>()?;
        Some((component, &mut self.doc))
    }

    /// Deliver an event to the component listening on its target.
    pub fn dispatch(&mut self, event: &Event) -> Result<DispatchResult, Error> {
        if !self.doc.has_event_listener(event.target(), event.kind()) {
            trace!("stage: no listener for {:?}", event);
            return Ok(DispatchResult::NotHandled);
        }
        for (index, component) in self.components.iter_mut().enumerate() {
            if component.handle_event(&mut self.doc, event)? {
                trace!("stage: {:?} handled by {}", event, component.name());
                return Ok(DispatchResult::Handled(ComponentId(index)));
            }
        }
        Ok(DispatchResult::NotHandled)
    }

    pub fn needs_draw(&self) -> bool {
        self.components.iter().any(|c| c.needs_draw())
    }

    /// Run one draw pass over dirty components. Returns how many were drawn.
    pub fn flush(&mut self) -> Result<usize, Error> {
        let mut drawn = 0;
        for component in self.components.iter_mut() {
            if component.needs_draw() {
                component.draw(&mut self.doc)?;
                drawn += 1;
            }
        }
        self.frame += 1;
        if drawn > 0 {
            trace!("stage: frame {} drew {} component(s)", self.frame, drawn);
        }
        Ok(drawn)
    }
}
