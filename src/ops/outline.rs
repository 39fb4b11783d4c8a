//! Outlines.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
    pub width: Option<Value>,
    pub color: Option<String>,
    /// Defaults to `solid`.
    pub style: Option<String>,
    pub offset: Option<Value>,
}

impl OutlineOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            width: tree.get("width").cloned(),
            color: super::str_field(tree, "color"),
            style: super::str_field(tree, "style"),
            offset: tree.get("offset").cloned(),
        }
    }
}

/// An outline argument: a bare width or full options.
#[derive(Debug, Clone)]
pub enum OutlineArg {
    Width(Value),
    Options(OutlineOptions),
}

impl From<i32> for OutlineArg {
    fn from(n: i32) -> Self {
        OutlineArg::Width(n.into())
    }
}

impl From<&str> for OutlineArg {
    fn from(s: &str) -> Self {
        OutlineArg::Width(s.into())
    }
}

impl From<OutlineOptions> for OutlineArg {
    fn from(options: OutlineOptions) -> Self {
        OutlineArg::Options(options)
    }
}

impl Chain {
    /// Draws an outline; the style defaults to `solid`.
    pub fn outline(self, arg: impl Into<OutlineArg>) -> Self {
        self.update(apply_outline(&arg.into(), None))
    }

    /// Outline with a bare width plus extra options applied on top.
    pub fn outline_with(self, width: impl Into<Value>, options: OutlineOptions) -> Self {
        self.update(apply_outline(&OutlineArg::Width(width.into()), Some(&options)))
    }
}

fn apply_outline(arg: &OutlineArg, extra: Option<&OutlineOptions>) -> StyleTree {
    match arg {
        OutlineArg::Options(options) => apply_outline_options(options),
        OutlineArg::Width(width) => {
            let mut out = apply_outline_options(&OutlineOptions {
                width: Some(width.clone()),
                ..OutlineOptions::default()
            });
            if let Some(extra) = extra {
                merge(&mut out, apply_outline_options(extra));
            }
            out
        }
    }
}

fn apply_outline_options(options: &OutlineOptions) -> StyleTree {
    let mut out = StyleTree::new();
    if let Some(width) = &options.width {
        out.insert("outlineWidth".to_string(), width.clone());
    }
    if let Some(color) = &options.color {
        out.insert("outlineColor".to_string(), color.as_str().into());
    }
    out.insert(
        "outlineStyle".to_string(),
        options.style.as_deref().unwrap_or("solid").into(),
    );
    if let Some(offset) = &options.offset {
        out.insert("outlineOffset".to_string(), offset.clone());
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("outline", |_ctx, args| {
        let arg = match super::arg(args, 0) {
            Some(Value::Tree(tree)) => OutlineArg::Options(OutlineOptions::from_tree(tree)),
            Some(width) => OutlineArg::Width(width.clone()),
            None => return StyleTree::new(),
        };
        let extra = super::tree_arg(args, 1).map(OutlineOptions::from_tree);
        apply_outline(&arg, extra.as_ref())
    });
}
