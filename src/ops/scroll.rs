//! Overflow and scrolling, including the webkit custom-scrollbar block.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

/// A scroll argument: one toggle for both axes or per-axis toggles.
/// `true` scrolls, `false` hides overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollArg {
    All(bool),
    Axes { x: Option<bool>, y: Option<bool> },
}

impl ScrollArg {
    /// Both axes scrollable.
    pub fn both() -> Self {
        ScrollArg::Axes {
            x: Some(true),
            y: Some(true),
        }
    }

    pub fn x(on: bool) -> Self {
        ScrollArg::Axes {
            x: Some(on),
            y: None,
        }
    }

    pub fn y(on: bool) -> Self {
        ScrollArg::Axes {
            x: None,
            y: Some(on),
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(on) => ScrollArg::All(*on),
            Value::Tree(tree) => ScrollArg::Axes {
                x: super::bool_field(tree, "x"),
                y: super::bool_field(tree, "y"),
            },
            _ => ScrollArg::All(true),
        }
    }
}

impl From<bool> for ScrollArg {
    fn from(on: bool) -> Self {
        ScrollArg::All(on)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollbarOptions {
    pub x: bool,
    pub y: bool,
    pub width: Option<String>,
    pub track_bg: Option<String>,
    pub thumb_bg: Option<String>,
    pub border_radius: Option<String>,
    /// Show the thumb only while the element is hovered.
    pub hover_only: bool,
}

impl ScrollbarOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            x: super::bool_field(tree, "x").unwrap_or(false),
            y: super::bool_field(tree, "y").unwrap_or(false),
            width: super::str_field(tree, "width"),
            track_bg: super::str_field(tree, "trackBg"),
            thumb_bg: super::str_field(tree, "thumbBg"),
            border_radius: super::str_field(tree, "borderRadius"),
            hover_only: super::bool_field(tree, "hoverOnly").unwrap_or(false),
        }
    }
}

/// An overflow argument: a keyword, a visibility toggle (`true` is
/// `visible`, `false` is `hidden`), or per-axis keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverflowArg {
    Keyword(String),
    Toggle(bool),
    Axes {
        x: Option<String>,
        y: Option<String>,
    },
}

impl From<&str> for OverflowArg {
    fn from(keyword: &str) -> Self {
        OverflowArg::Keyword(keyword.to_string())
    }
}

impl From<bool> for OverflowArg {
    fn from(visible: bool) -> Self {
        OverflowArg::Toggle(visible)
    }
}

impl Chain {
    /// Toggles scrolling per axis or for both.
    pub fn scroll(self, arg: impl Into<ScrollArg>) -> Self {
        self.update(apply_scroll(&arg.into()))
    }

    /// Styles the webkit scrollbar, hiding native overflow and revealing
    /// overlay scrollbars on hover.
    pub fn scrollbar(self, options: ScrollbarOptions) -> Self {
        self.update(apply_scrollbar(&options))
    }

    /// Sets overflow from a keyword, toggle, or per-axis keywords.
    pub fn overflow(self, arg: impl Into<OverflowArg>) -> Self {
        self.update(apply_overflow(&arg.into()))
    }
}

pub(crate) fn apply_scroll(arg: &ScrollArg) -> StyleTree {
    let mut out = StyleTree::new();
    let keyword = |on: bool| if on { "scroll" } else { "hidden" };
    match arg {
        ScrollArg::All(on) => {
            out.insert("overflow".to_string(), keyword(*on).into());
        }
        ScrollArg::Axes { x, y } => {
            if let Some(x) = x {
                out.insert("overflowX".to_string(), keyword(*x).into());
            }
            if let Some(y) = y {
                out.insert("overflowY".to_string(), keyword(*y).into());
            }
        }
    }
    out
}

fn apply_scrollbar(options: &ScrollbarOptions) -> StyleTree {
    let width = options.width.clone().unwrap_or_else(|| "5px".to_string());
    let radius = options
        .border_radius
        .clone()
        .unwrap_or_else(|| "10px".to_string());
    let overlay = |on: bool| if on { "overlay" } else { "hidden" };

    let mut out = crate::tree! {
        "overflow" => "hidden",
        "&:hover" => crate::tree! {
            "overflowX" => overlay(options.x),
            "overflowY" => overlay(options.y),
        },
        "&::-webkit-scrollbar" => crate::tree! {
            "width" => width.as_str(),
            "opacity" => "0",
            "background" => "transparent",
            "position" => "absolute",
            "zIndex" => "9999999",
        },
        "&::-webkit-scrollbar-track" => crate::tree! {
            "background" => options.track_bg.clone().unwrap_or_default(),
        },
        "&::-webkit-scrollbar-thumb" => crate::tree! {
            "background" => options
                .thumb_bg
                .clone()
                .unwrap_or_else(|| "rgba(59, 63, 67)".to_string()),
            "borderRadius" => radius.as_str(),
            "width" => format!("calc({width} - 0.5px)"),
        },
        "&::-webkit-scrollbar:hover" => crate::tree! { "opacity" => "1" },
    };

    if options.hover_only {
        out.insert(
            "&:not(:hover)".to_string(),
            Value::Tree(crate::tree! {
                "&::-webkit-scrollbar-thumb" => crate::tree! {
                    "background" => "transparent",
                },
            }),
        );
    }
    out
}

fn apply_overflow(arg: &OverflowArg) -> StyleTree {
    match arg {
        OverflowArg::Keyword(keyword) => crate::tree! { "overflow" => keyword.as_str() },
        OverflowArg::Toggle(visible) => {
            crate::tree! { "overflow" => if *visible { "visible" } else { "hidden" } }
        }
        OverflowArg::Axes { x, y } => {
            let mut out = StyleTree::new();
            if let Some(x) = x {
                out.insert("overflowX".to_string(), x.as_str().into());
            }
            if let Some(y) = y {
                out.insert("overflowY".to_string(), y.as_str().into());
            }
            out
        }
    }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("scroll", |_ctx, args| match super::arg(args, 0) {
        Some(value) => apply_scroll(&ScrollArg::from_value(value)),
        None => apply_scroll(&ScrollArg::both()),
    });
    registry.add("scrollbar", |_ctx, args| {
        let options = super::tree_arg(args, 0)
            .map(ScrollbarOptions::from_tree)
            .unwrap_or_default();
        apply_scrollbar(&options)
    });
    registry.add("overflow", |_ctx, args| {
        let arg = match super::arg(args, 0) {
            Some(Value::Str(keyword)) => OverflowArg::Keyword(keyword.clone()),
            Some(Value::Bool(visible)) => OverflowArg::Toggle(*visible),
            Some(Value::Tree(tree)) => OverflowArg::Axes {
                x: super::str_field(tree, "x"),
                y: super::str_field(tree, "y"),
            },
            _ => return StyleTree::new(),
        };
        apply_overflow(&arg)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_scroll_toggle() {
        assert_eq!(
            chain().scroll(true).tree(),
            &tree! { "overflow" => "scroll" }
        );
        assert_eq!(
            chain().scroll(false).tree(),
            &tree! { "overflow" => "hidden" }
        );
    }

    #[test]
    fn test_scroll_axes() {
        let c = chain().scroll(ScrollArg::Axes {
            x: Some(true),
            y: Some(false),
        });
        assert_eq!(
            c.tree(),
            &tree! { "overflowX" => "scroll", "overflowY" => "hidden" }
        );
    }

    #[test]
    fn test_overflow_keyword_and_toggle() {
        assert_eq!(
            chain().overflow("auto").tree(),
            &tree! { "overflow" => "auto" }
        );
        assert_eq!(
            chain().overflow(true).tree(),
            &tree! { "overflow" => "visible" }
        );
    }

    #[test]
    fn test_scrollbar_defaults() {
        let c = chain().scrollbar(ScrollbarOptions::default());
        assert_eq!(c.tree()["overflow"], Value::from("hidden"));

        let bar = c.tree()["&::-webkit-scrollbar"].as_tree().unwrap();
        assert_eq!(bar["width"], Value::from("5px"));

        let thumb = c.tree()["&::-webkit-scrollbar-thumb"].as_tree().unwrap();
        assert_eq!(thumb["borderRadius"], Value::from("10px"));
        assert_eq!(thumb["width"], Value::from("calc(5px - 0.5px)"));
        assert!(!c.tree().contains_key("&:not(:hover)"));
    }

    #[test]
    fn test_scrollbar_hover_only() {
        let c = chain().scrollbar(ScrollbarOptions {
            y: true,
            hover_only: true,
            ..ScrollbarOptions::default()
        });
        let hover = c.tree()["&:hover"].as_tree().unwrap();
        assert_eq!(hover["overflowY"], Value::from("overlay"));
        assert!(c.tree().contains_key("&:not(:hover)"));
    }

    #[test]
    fn test_dynamic_overflow_axes() {
        let c = chain()
            .op(
                "overflow",
                &[Value::Tree(tree! { "x" => "hidden", "y" => "scroll" })],
            )
            .unwrap();
        assert_eq!(
            c.tree(),
            &tree! { "overflowX" => "hidden", "overflowY" => "scroll" }
        );
    }
}
