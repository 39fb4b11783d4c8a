//! Margin, padding, and gap.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

use super::box_sides::{side_props, side_values_from, SideValues, Sides};

/// Options for the combined `space` operation.
#[derive(Debug, Clone, Default)]
pub struct SpacingOptions {
    pub gap: Option<Value>,
    /// Padding shorthand.
    pub inner: Option<SideValues>,
    /// Margin shorthand.
    pub outer: Option<SideValues>,
}

impl SpacingOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            gap: tree.get("gap").cloned(),
            inner: tree.get("inner").map(side_values_from),
            outer: tree.get("outer").map(side_values_from),
        }
    }
}

impl Chain {
    /// Sets gap, padding (`inner`), and margin (`outer`) in one call.
    pub fn space(self, options: SpacingOptions) -> Self {
        let updates = apply_space(&options);
        self.update(updates)
    }

    /// Sets margin from a uniform value, an ordered
    /// `[top, right, bottom, left]` array, or per-side values.
    pub fn margin(self, values: impl Into<SideValues>) -> Self {
        self.update(apply_margin(&values.into(), None))
    }

    /// Like [`Chain::margin`], with per-side overrides applied on top.
    pub fn margin_with(self, values: impl Into<SideValues>, overrides: Sides) -> Self {
        self.update(apply_margin(&values.into(), Some(&overrides)))
    }

    /// Sets padding from a uniform value, an ordered
    /// `[top, right, bottom, left]` array, or per-side values.
    pub fn padding(self, values: impl Into<SideValues>) -> Self {
        self.update(apply_padding(&values.into(), None))
    }

    /// Like [`Chain::padding`], with per-side overrides applied on top.
    pub fn padding_with(self, values: impl Into<SideValues>, overrides: Sides) -> Self {
        self.update(apply_padding(&values.into(), Some(&overrides)))
    }
}

fn apply_space(options: &SpacingOptions) -> StyleTree {
    let mut out = StyleTree::new();
    if let Some(inner) = &options.inner {
        merge(&mut out, side_props("padding", inner, "", None));
    }
    if let Some(outer) = &options.outer {
        merge(&mut out, side_props("margin", outer, "", None));
    }
    if let Some(gap) = &options.gap {
        out.insert("gap".to_string(), gap.clone());
    }
    out
}

fn apply_margin(values: &SideValues, overrides: Option<&Sides>) -> StyleTree {
    expand("margin", values, overrides)
}

fn apply_padding(values: &SideValues, overrides: Option<&Sides>) -> StyleTree {
    expand("padding", values, overrides)
}

fn expand(base: &str, values: &SideValues, overrides: Option<&Sides>) -> StyleTree {
    let mut out = side_props(base, values, "", None);
    if let Some(overrides) = overrides {
        let overrides = SideValues::Sides(overrides.clone());
        merge(&mut out, side_props(base, &overrides, "", None));
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("space", |_ctx, args| match super::tree_arg(args, 0) {
        Some(options) => apply_space(&SpacingOptions::from_tree(options)),
        None => StyleTree::new(),
    });
    registry.add("margin", |_ctx, args| match super::arg(args, 0) {
        Some(values) => {
            let overrides = super::tree_arg(args, 1).map(Sides::from_tree);
            apply_margin(&side_values_from(values), overrides.as_ref())
        }
        None => StyleTree::new(),
    });
    registry.add("padding", |_ctx, args| match super::arg(args, 0) {
        Some(values) => {
            let overrides = super::tree_arg(args, 1).map(Sides::from_tree);
            apply_padding(&side_values_from(values), overrides.as_ref())
        }
        None => StyleTree::new(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_uniform_margin_sets_shorthand() {
        let c = chain().margin(10);
        assert_eq!(c.tree(), &tree! { "margin" => 10 });
    }

    #[test]
    fn test_padding_ordered_values() {
        let c = chain().padding([1, 2, 3, 4]);
        assert_eq!(
            c.tree(),
            &tree! {
                "paddingTop" => 1,
                "paddingRight" => 2,
                "paddingBottom" => 3,
                "paddingLeft" => 4,
            }
        );
    }

    #[test]
    fn test_padding_with_override() {
        let c = chain().padding_with(20, Sides::new().right(15));
        assert_eq!(c.tree()["padding"], Value::from(20));
        assert_eq!(c.tree()["paddingRight"], Value::from(15));
    }

    #[test]
    fn test_space_combines_gap_inner_outer() {
        let c = chain().space(SpacingOptions {
            gap: Some(10.into()),
            inner: Some(20.into()),
            outer: Some(30.into()),
        });
        assert_eq!(
            c.tree(),
            &tree! { "padding" => 20, "margin" => 30, "gap" => 10 }
        );
    }

    #[test]
    fn test_dynamic_margin_parity() {
        let typed = chain().margin(Sides::new().x(8));
        let dynamic = chain()
            .op("margin", &[Value::Tree(tree! { "x" => 8 })])
            .unwrap();
        assert_eq!(typed.tree(), dynamic.tree());
    }
}
