//! A small in-memory host document.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. The document understands just enough form semantics
//! (`select`, `option`, `input`) for widgets that enhance native controls.

pub mod builder;
pub mod document;
pub mod error;
pub mod event;
pub mod html;
pub mod node;
pub mod rect;
pub mod selector;
pub mod style;

pub use builder::ElementBuilder;
pub use document::{Adjacent, Document};
pub use error::DomError;
pub use event::{Event, EventKind, Listener};
pub use node::NodeId;
pub use rect::Rect;
pub use selector::Selector;
pub use style::{Display, InlineStyle, Length};
