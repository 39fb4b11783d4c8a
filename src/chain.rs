//! The fluent builder engine.
//!
//! A [`Chain`] accumulates three structures as operations are chained onto
//! it: a flat style tree, a table of named variants, and a table of nested
//! selector subtrees. [`Chain::compile`] flattens all three into a single
//! deterministic output tree; [`Chain::element`] hands that tree to the
//! bound [`StyleEngine`].
//!
//! Style operations live in the [`ops`](crate::ops) modules, each adding
//! its family of chainable methods to `Chain`. Every method merges its
//! partial result into the flat tree last-write-wins and returns the
//! builder for further chaining. The same operations are reachable by name
//! through [`Chain::op`] for data-driven styling.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::engine::{ComponentDescriptor, StyleEngine};
use crate::error::OpError;
use crate::registry::{self, OpCtx};
use crate::value::{merge, StyleTree, Value};

/// Nested-selector payloads keyed by opaque selector strings.
///
/// Keys are never parsed or validated; malformed selectors pass through
/// verbatim into the compiled output.
pub type SelectorTable = IndexMap<String, Payload>;

/// Named variant alternatives: each name maps to an insertion-ordered
/// sequence of `(discriminant, payload)` pairs. A present name always has
/// at least one entry.
pub type VariantTable = IndexMap<String, Vec<(Value, Payload)>>;

/// A selector or variant payload: either a plain style tree or a nested
/// builder compiled recursively.
#[derive(Debug, Clone)]
pub enum Payload {
    Tree(StyleTree),
    Chain(Box<Chain>),
}

impl Payload {
    pub(crate) fn compile(&self) -> StyleTree {
        match self {
            Payload::Tree(tree) => tree.clone(),
            Payload::Chain(chain) => chain.compile(),
        }
    }
}

impl From<StyleTree> for Payload {
    fn from(tree: StyleTree) -> Self {
        Payload::Tree(tree)
    }
}

impl From<Chain> for Payload {
    fn from(chain: Chain) -> Self {
        Payload::Chain(Box::new(chain))
    }
}

/// The mutable fluent builder accumulating style state.
///
/// Created by the factory constructors on [`Styler`](crate::Styler), bound
/// to the configured engine and an optional element tag. Designed for
/// single-threaded use.
///
/// # Example
///
/// ```rust,ignore
/// let button = styler
///     .view("button")
///     .bg("$primary")
///     .padding([8, 16, 8, 16])
///     .rounded()
///     .on_hover(tree! { "opacity" => 0.8 })
///     .element();
/// ```
#[derive(Clone)]
pub struct Chain {
    pub(crate) engine: Rc<dyn StyleEngine>,
    pub(crate) tag: Option<String>,
    pub(crate) tree: StyleTree,
    pub(crate) variants: VariantTable,
    pub(crate) selectors: SelectorTable,
}

impl Chain {
    pub(crate) fn new(engine: Rc<dyn StyleEngine>, tag: Option<String>) -> Self {
        Self {
            engine,
            tag,
            tree: StyleTree::new(),
            variants: VariantTable::new(),
            selectors: SelectorTable::new(),
        }
    }

    /// The element tag this builder is bound to, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The current accumulated flat tree.
    pub fn tree(&self) -> &StyleTree {
        &self.tree
    }

    /// Merges raw declarations directly into the flat tree.
    ///
    /// An escape hatch for arbitrary low-level overrides; values are not
    /// transformed in any way. Later keys win.
    pub fn css(mut self, raw: StyleTree) -> Self {
        merge(&mut self.tree, raw);
        self
    }

    /// Registers `payload` under a nested selector, overwriting any
    /// payload previously registered for the same selector string.
    pub fn select(mut self, selector: &str, payload: impl Into<Payload>) -> Self {
        self.selectors.insert(selector.to_string(), payload.into());
        self
    }

    /// Appends a variant alternative under `name`, keyed by `discriminant`.
    ///
    /// Entries are never deduplicated at insert time; if the same
    /// discriminant is registered twice the later one wins at compile time.
    pub fn variant(
        mut self,
        name: &str,
        discriminant: impl Into<Value>,
        payload: impl Into<Payload>,
    ) -> Self {
        self.variants
            .entry(name.to_string())
            .or_default()
            .push((discriminant.into(), payload.into()));
        self
    }

    /// Returns a new builder seeded with copies of this one's state.
    ///
    /// Parent and child are fully independent afterwards.
    pub fn extend(&self) -> Chain {
        self.clone()
    }

    /// Applies a registered operation by name.
    ///
    /// Arguments are coerced per the operation family's documented
    /// precedence; unrecognized shapes fall back to family defaults rather
    /// than erroring.
    ///
    /// # Errors
    ///
    /// Returns [`OpError::UnknownOperation`] if no operation is registered
    /// under `name`.
    pub fn op(mut self, name: &str, args: &[Value]) -> Result<Self, OpError> {
        let op = registry::get(name).ok_or_else(|| OpError::UnknownOperation {
            name: name.to_string(),
        })?;
        let updates = {
            let mut ctx = OpCtx {
                tree: &self.tree,
                selectors: &mut self.selectors,
                variants: &mut self.variants,
            };
            op(&mut ctx, args)
        };
        merge(&mut self.tree, updates);
        Ok(self)
    }

    /// Compiles the accumulated state into one output tree.
    ///
    /// The output starts as a copy of the flat tree, gains a `variants`
    /// subtree (present even when empty) mapping variant name to
    /// discriminant to compiled payload, and finally one key per nested
    /// selector. Nested chains compile recursively; cycles are not
    /// detected. Pure: repeated calls without intervening mutation yield
    /// structurally equal output.
    pub fn compile(&self) -> StyleTree {
        let mut output = self.tree.clone();

        let mut variants = StyleTree::new();
        for (name, entries) in &self.variants {
            let mut table = StyleTree::new();
            for (discriminant, payload) in entries {
                table.insert(discriminant.key_text(), Value::Tree(payload.compile()));
            }
            variants.insert(name.clone(), Value::Tree(table));
        }
        output.insert("variants".to_string(), Value::Tree(variants));

        for (selector, payload) in &self.selectors {
            output.insert(selector.clone(), Value::Tree(payload.compile()));
        }

        output
    }

    /// Compiles and hands the result to the bound engine.
    ///
    /// Unbound builders default to the `div` tag. No caching: every call
    /// recompiles from scratch.
    pub fn element(&self) -> ComponentDescriptor {
        let compiled = self.compile();
        self.engine
            .styled(self.tag.as_deref().unwrap_or("div"), &compiled)
    }

    /// Like [`Chain::element`], with `extra` raw declarations shallow-merged
    /// on top of the compiled tree.
    pub fn element_css(&self, extra: StyleTree) -> ComponentDescriptor {
        let mut compiled = self.compile();
        merge(&mut compiled, extra);
        self.engine
            .styled(self.tag.as_deref().unwrap_or("div"), &compiled)
    }

    /// Merges a partial update into the flat tree, later keys winning.
    pub(crate) fn update(mut self, updates: StyleTree) -> Self {
        merge(&mut self.tree, updates);
        self
    }

    /// Registers a selector without consuming the builder; used by the
    /// selector-registering operation families.
    pub(crate) fn put_selector(&mut self, selector: &str, payload: Payload) {
        self.selectors.insert(selector.to_string(), payload);
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("tag", &self.tag)
            .field("tree", &self.tree)
            .field("variants", &self.variants)
            .field("selectors", &self.selectors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    pub(crate) struct StubEngine;

    impl StyleEngine for StubEngine {
        fn styled(&self, tag: &str, _style: &StyleTree) -> ComponentDescriptor {
            ComponentDescriptor {
                tag: tag.to_string(),
                class_name: "sc-test".to_string(),
            }
        }
    }

    pub(crate) fn chain() -> Chain {
        Chain::new(Rc::new(StubEngine), None)
    }

    pub(crate) fn tagged(tag: &str) -> Chain {
        Chain::new(Rc::new(StubEngine), Some(tag.to_string()))
    }
}
