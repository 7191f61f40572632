//! Lifecycle trait shared by everything mounted on a [`crate::Stage`].

use std::any::Any;

use panedom::{Document, Event};

use crate::error::Error;

/// A widget driven by the stage's event dispatch and draw cycle.
///
/// The stage calls `prepare_for_draw` once at mount, `handle_event` for each
/// event whose target has a listener registered, and `draw` at most once per
/// `flush` while `needs_draw` reports true.
pub trait Component: Any {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// One-time setup: register listeners and apply initial visual state.
    fn prepare_for_draw(&mut self, doc: &mut Document) -> Result<(), Error>;

    /// Handle an event. Returns true if the event was meant for this component.
    fn handle_event(&mut self, doc: &mut Document, event: &Event) -> Result<bool, Error>;

    fn needs_draw(&self) -> bool;

    /// Apply pending visual changes. Must leave `needs_draw` false.
    fn draw(&mut self, doc: &mut Document) -> Result<(), Error>;

    /// Get as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get as mutable Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
