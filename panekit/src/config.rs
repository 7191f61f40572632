//! Component configuration types.
//!
//! Both configs deserialize from JSON with every field optional, so a host
//! can describe a panel declaratively and only spell out what differs from
//! the defaults.

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Configuration for a [`crate::Collapser`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollapserConfig {
    /// Start with the content collapsed.
    pub is_collapsed: bool,

    /// Apply `transition_class` while expanding or collapsing.
    pub is_animated: bool,

    /// Class put on clicker and content while collapsed.
    pub collapsed_class: String,

    /// Class put on content for the duration of an animated transition.
    pub transition_class: String,

    /// Listen for clicks on the clicker. Turn off for panels that are only
    /// driven through `toggle()`.
    pub is_label_clickable: bool,

    /// Expanded height in px. Only needed when starting collapsed with
    /// animation on; otherwise the first collapse measures it.
    pub content_height: u32,

    /// Skip the animation for the next toggle only.
    pub bypass_animation: bool,
}

impl Default for CollapserConfig {
    fn default() -> Self {
        Self {
            is_collapsed: false,
            is_animated: false,
            collapsed_class: "collapsible-collapsed".into(),
            transition_class: "collapsible-transition".into(),
            is_label_clickable: true,
            content_height: 0,
            bypass_animation: false,
        }
    }
}

impl CollapserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.is_collapsed = collapsed;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.is_animated = animated;
        self
    }

    pub fn collapsed_class(mut self, class: impl Into<String>) -> Self {
        self.collapsed_class = class.into();
        self
    }

    pub fn transition_class(mut self, class: impl Into<String>) -> Self {
        self.transition_class = class.into();
        self
    }

    pub fn label_clickable(mut self, clickable: bool) -> Self {
        self.is_label_clickable = clickable;
        self
    }

    pub fn content_height(mut self, px: u32) -> Self {
        self.content_height = px;
        self
    }

    pub fn bypass_animation(mut self, bypass: bool) -> Self {
        self.bypass_animation = bypass;
        self
    }
}

/// Configuration for a [`crate::Breadcrumb`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreadcrumbConfig {
    /// DOM id of the ancestor where the trail walk stops.
    pub sentinel_id: String,
    /// Label of the first trail entry, which stands for the sentinel.
    pub root_label: String,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            sentinel_id: "UserContent".into(),
            root_label: "Body".into(),
        }
    }
}

impl BreadcrumbConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sentinel_id(mut self, id: impl Into<String>) -> Self {
        self.sentinel_id = id.into();
        self
    }

    pub fn root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }
}
