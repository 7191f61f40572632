pub mod class_list;
pub mod document;
pub mod error;
pub mod event;
pub mod node;
pub mod types;

pub use class_list::ClassList;
pub use document::Document;
pub use error::DomError;
pub use event::{Event, EventKind};
pub use node::{Node, NodeKey, NodeSpec};
pub use types::*;
