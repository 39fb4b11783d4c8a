//! Borders and corner radii.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

use super::box_sides::{
    corner_props, corner_values_from, side_props, side_values_from, CornerValues, Corners,
    SideValues, Sides,
};

/// Default radius token for bare `rounded()` calls.
const DEFAULT_RADIUS: &str = "$sm";

#[derive(Debug, Clone, Default)]
pub struct BorderOptions {
    /// Width shorthand; when absent the `top`/`right`/`bottom`/`left`
    /// fields act as per-side widths.
    pub width: Option<SideValues>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub radius: Option<CornerValues>,
    pub top: Option<Value>,
    pub right: Option<Value>,
    pub bottom: Option<Value>,
    pub left: Option<Value>,
}

impl BorderOptions {
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            width: tree.get("width").map(side_values_from),
            style: super::str_field(tree, "style"),
            color: super::str_field(tree, "color"),
            radius: tree.get("radius").map(corner_values_from),
            top: tree.get("top").cloned(),
            right: tree.get("right").cloned(),
            bottom: tree.get("bottom").cloned(),
            left: tree.get("left").cloned(),
        }
    }

    fn widths(&self) -> SideValues {
        self.width.clone().unwrap_or_else(|| {
            SideValues::Sides(Sides {
                top: self.top.clone(),
                right: self.right.clone(),
                bottom: self.bottom.clone(),
                left: self.left.clone(),
                x: None,
                y: None,
            })
        })
    }
}

/// A border argument: a bare width or full options.
#[derive(Debug, Clone)]
pub enum BorderArg {
    Width(Value),
    Options(BorderOptions),
}

impl From<i32> for BorderArg {
    fn from(n: i32) -> Self {
        BorderArg::Width(n.into())
    }
}

impl From<f64> for BorderArg {
    fn from(n: f64) -> Self {
        BorderArg::Width(n.into())
    }
}

impl From<&str> for BorderArg {
    fn from(s: &str) -> Self {
        BorderArg::Width(s.into())
    }
}

impl From<BorderOptions> for BorderArg {
    fn from(options: BorderOptions) -> Self {
        BorderArg::Options(options)
    }
}

impl Chain {
    /// Draws a border. Every width expansion also stamps a matching
    /// style longhand, defaulting to `solid` unless the options or the
    /// tree already carry a border style.
    pub fn border(self, arg: impl Into<BorderArg>) -> Self {
        let updates = apply_border(&self.tree, &arg.into(), None);
        self.update(updates)
    }

    /// Border with a bare width plus extra options applied on top.
    pub fn border_with(self, width: impl Into<Value>, options: BorderOptions) -> Self {
        let updates = apply_border(&self.tree, &BorderArg::Width(width.into()), Some(&options));
        self.update(updates)
    }

    /// Alias for [`Chain::border`].
    pub fn stroke(self, arg: impl Into<BorderArg>) -> Self {
        self.border(arg)
    }

    /// Alias for [`Chain::border_with`].
    pub fn stroke_with(self, width: impl Into<Value>, options: BorderOptions) -> Self {
        self.border_with(width, options)
    }

    /// Rounds corners with the default radius token.
    pub fn rounded(self) -> Self {
        self.update(apply_round(None, None))
    }

    /// Rounds corners: a uniform value, an ordered
    /// `[topLeft, topRight, bottomRight, bottomLeft]` array, per-corner
    /// values, or per-side values expanded to their adjacent corners.
    pub fn round(self, values: impl Into<CornerValues>) -> Self {
        self.update(apply_round(Some(values.into()), None))
    }

    /// Like [`Chain::round`], with per-corner overrides applied on top.
    pub fn round_with(self, values: impl Into<CornerValues>, overrides: Corners) -> Self {
        self.update(apply_round(Some(values.into()), Some(&overrides)))
    }
}

fn apply_border(
    current: &StyleTree,
    arg: &BorderArg,
    extra: Option<&BorderOptions>,
) -> StyleTree {
    let mut out = match arg {
        BorderArg::Options(options) => apply_border_options(current, options),
        BorderArg::Width(width) => {
            let base = BorderOptions {
                width: Some(SideValues::Uniform(width.clone())),
                ..BorderOptions::default()
            };
            let mut out = apply_border_options(current, &base);
            if let Some(extra) = extra {
                let mut scratch = current.clone();
                merge(&mut scratch, out.clone());
                merge(&mut out, apply_border_options(&scratch, extra));
            }
            out
        }
    };

    let radius = match arg {
        BorderArg::Options(options) => options.radius.as_ref(),
        BorderArg::Width(_) => extra.and_then(|options| options.radius.as_ref()),
    };
    if let Some(radius) = radius {
        merge(&mut out, corner_props("border", radius, "Radius"));
    }

    out
}

fn apply_border_options(current: &StyleTree, options: &BorderOptions) -> StyleTree {
    let widths = options.widths();
    let style = options
        .style
        .clone()
        .or_else(|| super::str_field(current, "borderStyle"))
        .unwrap_or_else(|| "solid".to_string());
    let style = Value::from(style);

    let mut out = side_props("border", &widths, "Width", None);
    merge(&mut out, side_props("border", &widths, "Style", Some(&style)));

    if let Some(color) = &options.color {
        out.insert("borderColor".to_string(), color.as_str().into());
    }
    out
}

fn apply_round(values: Option<CornerValues>, overrides: Option<&Corners>) -> StyleTree {
    let values = values.unwrap_or_else(|| CornerValues::Uniform(DEFAULT_RADIUS.into()));
    let mut out = corner_props("border", &values, "Radius");
    if let Some(overrides) = overrides {
        let overrides = CornerValues::Corners(overrides.clone());
        merge(&mut out, corner_props("border", &overrides, "Radius"));
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("border", border_op);
    registry.add("stroke", border_op);
    registry.add("round", |_ctx, args| {
        let values = super::arg(args, 0).map(corner_values_from);
        let overrides = super::tree_arg(args, 1).map(Corners::from_tree);
        apply_round(values, overrides.as_ref())
    });
}

fn border_op(ctx: &mut crate::registry::OpCtx<'_>, args: &[Value]) -> StyleTree {
    let arg = match super::arg(args, 0) {
        Some(Value::Tree(tree)) => BorderArg::Options(BorderOptions::from_tree(tree)),
        Some(width) => BorderArg::Width(width.clone()),
        None => return StyleTree::new(),
    };
    let extra = super::tree_arg(args, 1).map(BorderOptions::from_tree);
    apply_border(ctx.tree(), &arg, extra.as_ref())
}
