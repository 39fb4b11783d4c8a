//! The consumed styling-engine interface.
//!
//! The core never generates class names or injects stylesheet rules itself;
//! it hands a compiled style tree to an external CSS-in-JS engine through
//! [`StyleEngine`]. The engine instance is constructed once at [`init`]
//! time from the merged media-query table and the design-token table.
//!
//! [`init`]: crate::init

use serde::Serialize;

use crate::value::StyleTree;

/// An external CSS-in-JS engine that turns compiled style trees into
/// renderable components.
///
/// Values inside the tree are passed through unsanitized; any failure on
/// malformed CSS values surfaces from the engine, not from the core.
pub trait StyleEngine {
    /// Registers `style` for `tag` and returns a renderable descriptor.
    fn styled(&self, tag: &str, style: &StyleTree) -> ComponentDescriptor;
}

/// A renderable component descriptor issued by a [`StyleEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    /// The element tag the styles are bound to.
    pub tag: String,
    /// The engine-issued class name.
    pub class_name: String,
}
