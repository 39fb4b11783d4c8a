//! Style operation families.
//!
//! Each module contributes one family: an `impl Chain` block of typed
//! fluent methods, the pure functions they delegate to, and a `register`
//! hook exposing the same operations by name for dynamic dispatch.
//!
//! Registration order matters only for name collisions, which resolve by
//! silent replacement: the border family registers `stroke` over its own
//! `border` logic, and the accessibility family's `selection` replaces the
//! color family's.

use crate::chain::Payload;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

pub mod accessibility;
pub mod align;
pub mod aspect;
pub mod backdrop;
pub mod border;
pub mod box_sides;
pub mod boxes;
pub mod colors;
pub mod cursor;
pub mod flex;
pub mod grid;
pub mod outline;
pub mod responsive;
pub mod scroll;
pub mod selectors;
pub mod shadow;
pub mod size;
pub mod spacing;
pub mod text;
pub mod transform;
pub mod transition;

pub(crate) fn register_all(registry: &mut Registry) {
    align::register(registry);
    aspect::register(registry);
    border::register(registry);
    boxes::register(registry);
    colors::register(registry);
    cursor::register(registry);
    size::register(registry);
    outline::register(registry);
    shadow::register(registry);
    spacing::register(registry);
    text::register(registry);
    transition::register(registry);
    scroll::register(registry);
    flex::register(registry);
    selectors::register(registry);
    responsive::register(registry);
    grid::register(registry);
    transform::register(registry);
    accessibility::register(registry);
    backdrop::register(registry);
}

// Dynamic-argument readers shared by the registered operation wrappers.
// Missing or mistyped arguments coerce to None so every family can fall
// back to its documented default instead of erroring.

pub(crate) fn arg<'a>(args: &'a [Value], index: usize) -> Option<&'a Value> {
    args.get(index)
}

pub(crate) fn str_arg<'a>(args: &'a [Value], index: usize) -> Option<&'a str> {
    args.get(index).and_then(Value::as_str)
}

pub(crate) fn num_arg(args: &[Value], index: usize) -> Option<f64> {
    args.get(index).and_then(Value::as_num)
}

pub(crate) fn tree_arg<'a>(args: &'a [Value], index: usize) -> Option<&'a StyleTree> {
    args.get(index).and_then(Value::as_tree)
}

/// Reads a selector/variant payload argument: a tree argument passes
/// through, anything else becomes an empty payload.
pub(crate) fn payload_arg(args: &[Value], index: usize) -> Payload {
    Payload::Tree(tree_arg(args, index).cloned().unwrap_or_default())
}

pub(crate) fn str_field(tree: &StyleTree, key: &str) -> Option<String> {
    tree.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn num_field(tree: &StyleTree, key: &str) -> Option<f64> {
    tree.get(key).and_then(Value::as_num)
}

pub(crate) fn bool_field(tree: &StyleTree, key: &str) -> Option<bool> {
    tree.get(key).and_then(Value::as_bool)
}
