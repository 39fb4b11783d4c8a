//! Flex containers and the stack shorthands.

use crate::chain::Chain;
use crate::registry::{OpCtx, Registry};
use crate::value::{merge, StyleTree, Value};

use super::align::{apply_flex_align, AlignArg};

#[derive(Debug, Clone, Default)]
pub struct FlexOptions {
    pub direction: Option<String>,
    pub justify: Option<String>,
    pub items: Option<String>,
    pub wrap: Option<String>,
    pub grow: Option<f64>,
    pub shrink: Option<f64>,
    pub basis: Option<Value>,
    pub align: Option<AlignArg>,
}

impl FlexOptions {
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            direction: super::str_field(tree, "direction"),
            justify: super::str_field(tree, "justify"),
            items: super::str_field(tree, "items"),
            wrap: super::str_field(tree, "wrap"),
            grow: super::num_field(tree, "grow"),
            shrink: super::num_field(tree, "shrink"),
            basis: tree.get("basis").cloned(),
            align: tree.get("align").map(AlignArg::from_value),
        }
    }
}

impl Chain {
    /// Makes this a flex container (`display: flex` always) and applies
    /// the given container/item options.
    pub fn flex(self, options: FlexOptions) -> Self {
        let updates = apply_flex(&self.tree, &options);
        self.update(updates)
    }

    /// A flex row.
    pub fn hstack(self) -> Self {
        self.hstack_with(FlexOptions::default())
    }

    pub fn hstack_with(self, options: FlexOptions) -> Self {
        let updates = apply_hstack(&self.tree, &options);
        self.update(updates)
    }

    /// A flex column.
    pub fn vstack(self) -> Self {
        self.vstack_with(FlexOptions::default())
    }

    pub fn vstack_with(self, options: FlexOptions) -> Self {
        let updates = apply_vstack(&self.tree, &options);
        self.update(updates)
    }

    /// A flex column with content centered on both axes.
    pub fn center(self) -> Self {
        self.center_with(FlexOptions::default())
    }

    pub fn center_with(self, options: FlexOptions) -> Self {
        let updates = apply_center(&self.tree, &options);
        self.update(updates)
    }
}

pub(crate) fn apply_flex(current: &StyleTree, options: &FlexOptions) -> StyleTree {
    let mut out = crate::tree! { "display" => "flex" };
    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value);
        }
    };

    put("flexDirection", options.direction.clone().map(Value::from));
    put("justifyContent", options.justify.clone().map(Value::from));
    put("alignItems", options.items.clone().map(Value::from));
    put("flexWrap", options.wrap.clone().map(Value::from));
    put("flexGrow", options.grow.map(Value::from));
    put("flexShrink", options.shrink.map(Value::from));
    put("flexBasis", options.basis.clone());

    if let Some(align) = &options.align {
        let mut scratch = current.clone();
        merge(&mut scratch, out.clone());
        merge(&mut out, apply_flex_align(&scratch, align));
    }

    out
}

fn apply_hstack(current: &StyleTree, options: &FlexOptions) -> StyleTree {
    apply_flex(current, &with_defaults(options, "row", None, None))
}

fn apply_vstack(current: &StyleTree, options: &FlexOptions) -> StyleTree {
    apply_flex(current, &with_defaults(options, "column", None, None))
}

fn apply_center(current: &StyleTree, options: &FlexOptions) -> StyleTree {
    apply_flex(
        current,
        &with_defaults(options, "column", Some("center"), Some("center")),
    )
}

fn with_defaults(
    options: &FlexOptions,
    direction: &str,
    justify: Option<&str>,
    items: Option<&str>,
) -> FlexOptions {
    FlexOptions {
        direction: options
            .direction
            .clone()
            .or_else(|| Some(direction.to_string())),
        justify: options
            .justify
            .clone()
            .or_else(|| justify.map(str::to_string)),
        items: options.items.clone().or_else(|| items.map(str::to_string)),
        ..options.clone()
    }
}

fn flex_op(
    ctx: &mut OpCtx<'_>,
    args: &[Value],
    apply: fn(&StyleTree, &FlexOptions) -> StyleTree,
) -> StyleTree {
    let options = super::tree_arg(args, 0)
        .map(FlexOptions::from_tree)
        .unwrap_or_default();
    apply(ctx.tree(), &options)
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("flex", |ctx, args| flex_op(ctx, args, apply_flex));
    registry.add("hstack", |ctx, args| flex_op(ctx, args, apply_hstack));
    registry.add("vstack", |ctx, args| flex_op(ctx, args, apply_vstack));
    registry.add("center", |ctx, args| flex_op(ctx, args, apply_center));
}
