//! Collapser - expand/collapse a content node by clicking a clicker node.
//!
//! A click only records intent (`is_collapsing`) and asks for a draw. The
//! draw pass performs the change, reading the direction from the content's
//! collapsed class rather than from the state the click computed. Rapid
//! repeated clicks therefore always flip whatever is currently on screen.
//!
//! With animation on, the transition class stays on the content until the
//! host reports `TransitionEnd`; without it, completion runs synchronously
//! inside the draw.

use std::any::Any;

use log::{debug, trace};
use panedom::{Document, DomError, Event, EventKind, Length, NodeKey, Overflow};

use crate::component::Component;
use crate::config::CollapserConfig;
use crate::error::{ConfigurationError, Error};

/// Below this cached height a transition would not be visible, so the draw
/// completes it immediately instead of waiting for `TransitionEnd`.
pub const MIN_TRANSITION_HEIGHT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseState {
    Expanded,
    Collapsed,
}

type LabelClickEvent = Box<dyn FnMut(bool)>;

pub struct Collapser {
    clicker: NodeKey,
    content: NodeKey,

    is_collapsed: bool,
    is_collapsing: bool,
    needs_draw: bool,
    content_height: u32,

    is_animated: bool,
    /// Animation setting to come back to once a bypassed toggle finishes.
    animated_before_bypass: Option<bool>,
    bypass_animation: bool,
    collapsed_class: String,
    transition_class: String,
    is_label_clickable: bool,

    /// Content overflow as computed before we started forcing it.
    orig_overflow: Overflow,
    label_click_event: Option<LabelClickEvent>,
}

impl Collapser {
    pub fn new(
        doc: &Document,
        clicker: NodeKey,
        content: NodeKey,
        config: CollapserConfig,
    ) -> Result<Self, ConfigurationError> {
        if !doc.contains(clicker) {
            return Err(ConfigurationError::MissingClicker(clicker));
        }
        if !doc.contains(content) {
            return Err(ConfigurationError::MissingContent(content));
        }
        Ok(Self {
            clicker,
            content,
            is_collapsed: config.is_collapsed,
            is_collapsing: false,
            needs_draw: false,
            content_height: config.content_height,
            is_animated: config.is_animated,
            animated_before_bypass: None,
            bypass_animation: config.bypass_animation,
            collapsed_class: config.collapsed_class,
            transition_class: config.transition_class,
            is_label_clickable: config.is_label_clickable,
            orig_overflow: Overflow::Visible,
            label_click_event: None,
        })
    }

    /// Set a callback run on every toggle with the current bypass flag.
    pub fn on_label_click(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.label_click_event = Some(Box::new(f));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn clicker(&self) -> NodeKey {
        self.clicker
    }

    pub fn content(&self) -> NodeKey {
        self.content
    }

    pub fn state(&self) -> CollapseState {
        if self.is_collapsed {
            CollapseState::Collapsed
        } else {
            CollapseState::Expanded
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn is_collapsing(&self) -> bool {
        self.is_collapsing
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    pub fn set_content_height(&mut self, px: u32) {
        self.content_height = px;
    }

    pub fn is_animated(&self) -> bool {
        self.is_animated
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.is_animated = animated;
    }

    pub fn bypass_animation(&self) -> bool {
        self.bypass_animation
    }

    pub fn set_bypass_animation(&mut self, bypass: bool) {
        self.bypass_animation = bypass;
    }

    pub fn orig_overflow(&self) -> Overflow {
        self.orig_overflow
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        if collapsed != self.is_collapsed {
            self.is_collapsed = collapsed;
            self.needs_draw = true;
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Expand or collapse programmatically.
    pub fn toggle(&mut self, doc: &mut Document) -> Result<(), DomError> {
        if self.bypass_animation {
            self.animated_before_bypass.get_or_insert(self.is_animated);
            self.is_animated = false;
        }
        doc.remove_class(self.content, &self.transition_class)?;
        self.handle_label_click(doc)
    }

    /// Same path as a user click on the clicker.
    pub fn handle_label_click(&mut self, doc: &mut Document) -> Result<(), DomError> {
        if !doc.has_class(self.content, &self.collapsed_class)? {
            self.content_height = doc.offset_height(self.content)?;
            // Pin a literal height so the collapse starts from px, not auto.
            doc.set_height(self.content, Length::Px(self.content_height))?;
            self.set_collapsed(true);
        } else {
            self.set_collapsed(false);
        }
        self.is_collapsing = true;
        self.needs_draw = true;
        trace!(
            "collapser {}: click, target {:?}, height {}",
            self.content,
            self.state(),
            self.content_height
        );

        let bypass = self.bypass_animation;
        if let Some(callback) = self.label_click_event.as_mut() {
            callback(bypass);
        }
        Ok(())
    }

    /// Realize a pending toggle. Does nothing visible unless a click is pending.
    pub fn redraw(&mut self, doc: &mut Document) -> Result<(), DomError> {
        self.needs_draw = false;
        if !self.is_collapsing {
            return Ok(());
        }
        doc.remove_class(self.content, &self.transition_class)?;

        if self.is_animated {
            doc.add_class(self.content, &self.transition_class)?;
            doc.add_event_listener(self.content, EventKind::TransitionEnd)?;
            doc.set_overflow(self.content, Overflow::Hidden)?;
        }

        if doc.has_class(self.content, &self.collapsed_class)? {
            debug!("collapser {}: expanding to {}px", self.content, self.content_height);
            doc.set_height(self.content, Length::Px(self.content_height))?;
            self.is_collapsed = false;
        } else {
            debug!("collapser {}: collapsing", self.content);
            doc.set_height(self.content, Length::Px(0))?;
            self.is_collapsed = true;
            if self.orig_overflow != Overflow::Hidden {
                doc.set_overflow(self.content, Overflow::Hidden)?;
            }
        }

        doc.toggle_class(self.content, &self.collapsed_class)?;
        doc.toggle_class(self.clicker, &self.collapsed_class)?;
        self.is_collapsing = false;

        if !self.is_animated || self.content_height < MIN_TRANSITION_HEIGHT {
            self.handle_transition_end(doc)?;
        }
        Ok(())
    }

    /// Finish a transition, either on `TransitionEnd` or synchronously.
    pub fn handle_transition_end(&mut self, doc: &mut Document) -> Result<(), DomError> {
        if self.is_animated {
            doc.remove_event_listener(self.content, EventKind::TransitionEnd);
            doc.remove_class(self.content, &self.transition_class)?;
        }

        if !doc.has_class(self.content, &self.collapsed_class)? {
            doc.set_height(self.content, Length::Auto)?;
            if self.orig_overflow != Overflow::Hidden {
                doc.set_overflow(self.content, self.orig_overflow)?;
            }
        }

        if self.bypass_animation {
            self.bypass_animation = false;
            self.is_animated = self.animated_before_bypass.take().unwrap_or(true);
        }
        trace!("collapser {}: transition done, {:?}", self.content, self.state());
        Ok(())
    }
}

impl Component for Collapser {
    fn name(&self) -> &'static str {
        "collapser"
    }

    fn prepare_for_draw(&mut self, doc: &mut Document) -> Result<(), Error> {
        if self.is_label_clickable {
            doc.add_event_listener(self.clicker, EventKind::Click)?;
        }
        self.orig_overflow = doc.computed_overflow(self.content)?;

        if self.is_collapsed {
            doc.set_height(self.content, Length::Px(0))?;
            if self.orig_overflow != Overflow::Hidden {
                doc.set_overflow(self.content, Overflow::Hidden)?;
            }
            doc.add_class(self.content, &self.collapsed_class)?;
            doc.add_class(self.clicker, &self.collapsed_class)?;
        } else {
            doc.set_height(self.content, Length::Auto)?;
            doc.remove_class(self.content, &self.collapsed_class)?;
            doc.remove_class(self.clicker, &self.collapsed_class)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, doc: &mut Document, event: &Event) -> Result<bool, Error> {
        match event {
            Event::Click { target } if *target == self.clicker => {
                self.handle_label_click(doc)?;
                Ok(true)
            }
            Event::TransitionEnd { target } if *target == self.content => {
                self.handle_transition_end(doc)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn needs_draw(&self) -> bool {
        self.needs_draw
    }

    fn draw(&mut self, doc: &mut Document) -> Result<(), Error> {
        Ok(self.redraw(doc)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
