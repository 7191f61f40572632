//! Error types for panekit components.

use panedom::{DomError, NodeKey};
use thiserror::Error;

/// Component was built with references it cannot work with.
///
/// Raised at construction time; a component that constructed successfully
/// never reports a configuration error later.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("collapser clicker {0} is not in the document")]
    MissingClicker(NodeKey),

    #[error("collapser content {0} is not in the document")]
    MissingContent(NodeKey),

    #[error("breadcrumb button {0} is not in the document")]
    MissingButton(NodeKey),

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreadcrumbError {
    /// The ancestor walk reached the document root without meeting the sentinel.
    #[error("container {container} has no ancestor with id \"{sentinel}\"")]
    SentinelNotFound { container: NodeKey, sentinel: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Any error surfaced through the [`crate::Stage`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Breadcrumb(#[from] BreadcrumbError),
}
