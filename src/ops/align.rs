//! Stack alignment keywords.
//!
//! One alignment vocabulary serves both layout systems: the same keyword
//! maps to `flex-start`/`flex-end` in a flex container and `start`/`end`
//! in a grid container. Which mapping applies is decided by the `display`
//! value already present on the tree.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

/// Positional alignment keywords shared by the flex and grid mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAlignment {
    Top,
    Center,
    Bottom,
    Left,
    Right,
    Start,
    End,
    Leading,
    Trailing,
}

impl StackAlignment {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "top" => Self::Top,
            "center" => Self::Center,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "start" => Self::Start,
            "end" => Self::End,
            "leading" => Self::Leading,
            "trailing" => Self::Trailing,
            _ => return None,
        })
    }

    fn flex(self) -> &'static str {
        match self {
            Self::Top | Self::Left | Self::Start | Self::Leading => "flex-start",
            Self::Center => "center",
            Self::Bottom | Self::Right | Self::End | Self::Trailing => "flex-end",
        }
    }

    fn grid(self) -> &'static str {
        match self {
            Self::Top | Self::Left | Self::Start | Self::Leading => "start",
            Self::Center => "center",
            Self::Bottom | Self::Right | Self::End | Self::Trailing => "end",
        }
    }
}

/// An alignment argument: one keyword for both axes, a
/// `[horizontal, vertical]` pair, or independent axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignArg {
    Both(StackAlignment),
    Pair(StackAlignment, StackAlignment),
    Axes {
        horizontal: Option<StackAlignment>,
        vertical: Option<StackAlignment>,
    },
}

impl AlignArg {
    fn axes(&self) -> (Option<StackAlignment>, Option<StackAlignment>) {
        match self {
            AlignArg::Both(a) => (Some(*a), Some(*a)),
            AlignArg::Pair(h, v) => (Some(*h), Some(*v)),
            AlignArg::Axes {
                horizontal,
                vertical,
            } => (*horizontal, *vertical),
        }
    }

    /// Parses a dynamic alignment argument: a keyword string or a tree
    /// with `horizontal`/`vertical` (or `x`/`y`) keys. Unknown keywords
    /// align nothing.
    pub(crate) fn from_value(value: &Value) -> Self {
        match value {
            Value::Str(keyword) => match StackAlignment::from_keyword(keyword) {
                Some(alignment) => AlignArg::Both(alignment),
                None => AlignArg::Axes {
                    horizontal: None,
                    vertical: None,
                },
            },
            Value::Tree(tree) => {
                let axis = |primary: &str, fallback: &str| {
                    super::str_field(tree, primary)
                        .or_else(|| super::str_field(tree, fallback))
                        .and_then(|kw| StackAlignment::from_keyword(&kw))
                };
                AlignArg::Axes {
                    horizontal: axis("horizontal", "x"),
                    vertical: axis("vertical", "y"),
                }
            }
            _ => AlignArg::Axes {
                horizontal: None,
                vertical: None,
            },
        }
    }
}

impl From<StackAlignment> for AlignArg {
    fn from(alignment: StackAlignment) -> Self {
        AlignArg::Both(alignment)
    }
}

impl From<[StackAlignment; 2]> for AlignArg {
    fn from([horizontal, vertical]: [StackAlignment; 2]) -> Self {
        AlignArg::Pair(horizontal, vertical)
    }
}

impl From<&str> for AlignArg {
    fn from(keyword: &str) -> Self {
        AlignArg::from_value(&Value::from(keyword))
    }
}

impl Chain {
    /// Aligns content on both axes.
    ///
    /// Uses the grid mapping when the tree's `display` is `grid`, the
    /// flex mapping otherwise. In a flex column the axes swap onto
    /// `justifyContent`/`alignItems` accordingly.
    pub fn align(self, alignment: impl Into<AlignArg>) -> Self {
        let updates = apply_align(&self.tree, &alignment.into());
        self.update(updates)
    }
}

pub(crate) fn apply_align(current: &StyleTree, alignment: &AlignArg) -> StyleTree {
    let is_grid = current.get("display").and_then(Value::as_str) == Some("grid");
    if is_grid {
        apply_grid_align(alignment)
    } else {
        apply_flex_align(current, alignment)
    }
}

pub(crate) fn apply_flex_align(current: &StyleTree, alignment: &AlignArg) -> StyleTree {
    let (horizontal, vertical) = alignment.axes();
    let mut out = StyleTree::new();

    let is_row = current.get("flexDirection").and_then(Value::as_str) != Some("column");
    let main = if is_row { horizontal } else { vertical };
    let cross = if is_row { vertical } else { horizontal };

    if let Some(alignment) = main {
        out.insert("justifyContent".to_string(), alignment.flex().into());
    }
    if let Some(alignment) = cross {
        out.insert("alignItems".to_string(), alignment.flex().into());
    }
    out
}

pub(crate) fn apply_grid_align(alignment: &AlignArg) -> StyleTree {
    let (horizontal, vertical) = alignment.axes();
    let mut out = StyleTree::new();

    if let Some(alignment) = horizontal {
        out.insert("justifyContent".to_string(), alignment.grid().into());
    }
    if let Some(alignment) = vertical {
        out.insert("alignContent".to_string(), alignment.grid().into());
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    // align(keyword | {horizontal, vertical}) or align(hor, ver)
    registry.add("align", |ctx, args| {
        let alignment = match (super::str_arg(args, 0), super::str_arg(args, 1)) {
            (Some(h), Some(v)) => {
                match (
                    StackAlignment::from_keyword(h),
                    StackAlignment::from_keyword(v),
                ) {
                    (Some(h), Some(v)) => AlignArg::Pair(h, v),
                    _ => AlignArg::Axes {
                        horizontal: None,
                        vertical: None,
                    },
                }
            }
            _ => match super::arg(args, 0) {
                Some(value) => AlignArg::from_value(value),
                None => return StyleTree::new(),
            },
        };
        apply_align(ctx.tree(), &alignment)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_row_alignment() {
        let c = chain().css(tree! { "display" => "flex" }).align("center");
        assert_eq!(c.tree()["justifyContent"], Value::from("center"));
        assert_eq!(c.tree()["alignItems"], Value::from("center"));
    }

    #[test]
    fn test_column_swaps_axes() {
        let c = chain()
            .css(tree! { "display" => "flex", "flexDirection" => "column" })
            .align([StackAlignment::Left, StackAlignment::Bottom]);
        // vertical drives justifyContent in a column
        assert_eq!(c.tree()["justifyContent"], Value::from("flex-end"));
        assert_eq!(c.tree()["alignItems"], Value::from("flex-start"));
    }

    #[test]
    fn test_grid_uses_grid_keywords() {
        let c = chain()
            .css(tree! { "display" => "grid" })
            .align([StackAlignment::Top, StackAlignment::Trailing]);
        assert_eq!(c.tree()["justifyContent"], Value::from("start"));
        assert_eq!(c.tree()["alignContent"], Value::from("end"));
    }

    #[test]
    fn test_directional_keywords() {
        let c = chain().align([StackAlignment::Leading, StackAlignment::Top]);
        assert_eq!(c.tree()["justifyContent"], Value::from("flex-start"));
        assert_eq!(c.tree()["alignItems"], Value::from("flex-start"));
    }

    #[test]
    fn test_unknown_keyword_aligns_nothing() {
        let c = chain().align("diagonal");
        assert!(c.tree().is_empty());
    }

    #[test]
    fn test_dynamic_axes_tree() {
        let c = chain()
            .op("align", &[Value::Tree(tree! { "x" => "right" })])
            .unwrap();
        assert_eq!(c.tree()["justifyContent"], Value::from("flex-end"));
        assert!(!c.tree().contains_key("alignItems"));
    }
}
