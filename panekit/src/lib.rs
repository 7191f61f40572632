pub mod breadcrumb;
pub mod collapser;
pub mod component;
pub mod config;
pub mod error;
pub mod stage;
pub mod state;

pub use breadcrumb::{Breadcrumb, TrailEntry};
pub use collapser::{CollapseState, Collapser, MIN_TRANSITION_HEIGHT};
pub use component::Component;
pub use config::{BreadcrumbConfig, CollapserConfig};
pub use error::{BreadcrumbError, ConfigurationError, Error};
pub use stage::{ComponentId, DispatchResult, Stage};
pub use state::{State, Watch};

pub mod prelude {
    pub use crate::breadcrumb::{Breadcrumb, TrailEntry};
    pub use crate::collapser::{CollapseState, Collapser};
    pub use crate::component::Component;
    pub use crate::config::{BreadcrumbConfig, CollapserConfig};
    pub use crate::error::{BreadcrumbError, ConfigurationError, Error};
    pub use crate::stage::{ComponentId, DispatchResult, Stage};
    pub use crate::state::{State, Watch};

    pub use panedom::{Document, Event, EventKind, Length, NodeKey, NodeSpec, Overflow};
}
