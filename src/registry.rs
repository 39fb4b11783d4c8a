//! The operation registry: a name to operation-function lookup built once
//! from every style family's `register` hook.
//!
//! The registry backs [`Chain::op`](crate::Chain::op), the dynamic
//! dispatch path for data-driven styling. Registering a name that already
//! exists silently replaces the earlier entry; this is the mechanism by
//! which `stroke` aliases `border` and the accessibility family's
//! `selection` replaces the color family's.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::chain::{Payload, SelectorTable, VariantTable};
use crate::ops;
use crate::value::{StyleTree, Value};

/// The capability handle passed to registered operations: read access to
/// the current flat tree plus selector/variant registration.
///
/// Most operations only read the tree and return a partial update; the
/// selector-registering families (`on_hover`, `media`, `attr`, ...) use
/// the handle to attach subtrees as a side channel.
pub struct OpCtx<'a> {
    pub(crate) tree: &'a StyleTree,
    pub(crate) selectors: &'a mut SelectorTable,
    pub(crate) variants: &'a mut VariantTable,
}

impl OpCtx<'_> {
    /// The chain's current flat tree.
    pub fn tree(&self) -> &StyleTree {
        self.tree
    }

    /// Inserts/overwrites a selector payload on the owning chain.
    pub fn select(&mut self, selector: &str, payload: impl Into<Payload>) {
        self.selectors.insert(selector.to_string(), payload.into());
    }

    /// Appends a variant alternative on the owning chain.
    pub fn variant(
        &mut self,
        name: &str,
        discriminant: impl Into<Value>,
        payload: impl Into<Payload>,
    ) {
        self.variants
            .entry(name.to_string())
            .or_default()
            .push((discriminant.into(), payload.into()));
    }
}

/// A registered operation: parses its raw arguments per the family's
/// documented precedence and returns a partial tree to merge.
pub type OpFn = fn(&mut OpCtx<'_>, &[Value]) -> StyleTree;

/// Name to operation lookup.
#[derive(Default)]
pub struct Registry {
    ops: HashMap<&'static str, OpFn>,
}

impl Registry {
    fn new() -> Self {
        Self::default()
    }

    /// Registers `op` under `name`, silently replacing any earlier
    /// registration of the same name.
    pub fn add(&mut self, name: &'static str, op: OpFn) {
        self.ops.insert(name, op);
    }

    /// Looks up an operation by name.
    pub fn get(&self, name: &str) -> Option<OpFn> {
        self.ops.get(name).copied()
    }

    /// Iterates over all registered operation names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.keys().copied()
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    ops::register_all(&mut registry);
    registry
});

/// Looks up an operation in the shared registry.
pub(crate) fn get(name: &str) -> Option<OpFn> {
    REGISTRY.get(name)
}

/// All operation names known to the shared registry.
pub fn operation_names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.names().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_core_families() {
        for name in [
            "padding", "margin", "bg", "fg", "border", "stroke", "round", "shadow",
            "align", "flex", "vstack", "hstack", "grid", "rotate", "scale", "media",
            "on_hover", "attr", "text", "transition", "scroll", "overflow", "cursor",
            "outline", "backdrop", "selection", "opacity", "size",
        ] {
            assert!(get(name).is_some(), "missing operation {name}");
        }
    }

    #[test]
    fn test_add_replaces_silently() {
        fn first(_: &mut OpCtx<'_>, _: &[Value]) -> StyleTree {
            crate::tree! { "a" => 1 }
        }
        fn second(_: &mut OpCtx<'_>, _: &[Value]) -> StyleTree {
            crate::tree! { "a" => 2 }
        }

        let mut registry = Registry::new();
        registry.add("op", first);
        registry.add("op", second);

        let mut selectors = SelectorTable::new();
        let mut variants = VariantTable::new();
        let tree = StyleTree::new();
        let mut ctx = OpCtx {
            tree: &tree,
            selectors: &mut selectors,
            variants: &mut variants,
        };
        let out = registry.get("op").unwrap()(&mut ctx, &[]);
        assert_eq!(out, crate::tree! { "a" => 2 });
    }
}
