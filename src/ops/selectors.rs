//! Pseudo-class, pseudo-element, and attribute selectors.
//!
//! These operations write to the selector table instead of the flat
//! tree; the flat tree is left untouched.

use crate::chain::{Chain, Payload};
use crate::registry::{OpCtx, Registry};
use crate::value::{StyleTree, Value};

/// An attribute match: how the attribute value is compared, plus an
/// optional case-sensitivity flag rendered as the ` s`/` i` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    operator: &'static str,
    value: String,
    case_sensitive: Option<bool>,
}

impl AttrMatch {
    /// Exact match (`=`).
    pub fn eq(value: &str) -> Self {
        Self::new("=", value)
    }

    /// Substring match (`*=`).
    pub fn contains(value: &str) -> Self {
        Self::new("*=", value)
    }

    /// Prefix match (`^=`).
    pub fn starts_with(value: &str) -> Self {
        Self::new("^=", value)
    }

    /// Suffix match (`$=`).
    pub fn ends_with(value: &str) -> Self {
        Self::new("$=", value)
    }

    /// Whitespace-separated word match (`~=`).
    pub fn includes(value: &str) -> Self {
        Self::new("~=", value)
    }

    /// Hyphen-separated prefix match (`|=`).
    pub fn dash_match(value: &str) -> Self {
        Self::new("|=", value)
    }

    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = Some(sensitive);
        self
    }

    fn new(operator: &'static str, value: &str) -> Self {
        Self {
            operator,
            value: value.to_string(),
            case_sensitive: None,
        }
    }

    fn from_tree(tree: &StyleTree) -> Option<Self> {
        let keys = [
            ("eq", "="),
            ("contains", "*="),
            ("startsWith", "^="),
            ("endsWith", "$="),
            ("includes", "~="),
            ("dashMatch", "|="),
        ];
        let mut matcher = keys.iter().find_map(|(key, operator)| {
            super::str_field(tree, key).map(|value| Self {
                operator,
                value,
                case_sensitive: None,
            })
        })?;
        matcher.case_sensitive = super::bool_field(tree, "caseSensitive");
        Some(matcher)
    }
}

impl Chain {
    /// Registers `&:hover` styles.
    pub fn on_hover(mut self, payload: impl Into<Payload>) -> Self {
        self.put_selector("&:hover", payload.into());
        self
    }

    /// Registers `&:focus` styles.
    pub fn on_focus(mut self, payload: impl Into<Payload>) -> Self {
        self.put_selector("&:focus", payload.into());
        self
    }

    /// Registers `&:active` styles.
    pub fn on_active(mut self, payload: impl Into<Payload>) -> Self {
        self.put_selector("&:active", payload.into());
        self
    }

    /// Registers `&::before` styles.
    pub fn before(mut self, payload: impl Into<Payload>) -> Self {
        self.put_selector("&::before", payload.into());
        self
    }

    /// Registers `&::after` styles.
    pub fn after(mut self, payload: impl Into<Payload>) -> Self {
        self.put_selector("&::after", payload.into());
        self
    }

    /// Registers styles for attribute presence (`&[name]`).
    pub fn attr(mut self, name: &str, payload: impl Into<Payload>) -> Self {
        self.put_selector(&attr_selector(name, None), payload.into());
        self
    }

    /// Registers styles for an attribute match (`&[name*="v"]`, ...).
    pub fn attr_match(
        mut self,
        name: &str,
        matcher: AttrMatch,
        payload: impl Into<Payload>,
    ) -> Self {
        self.put_selector(&attr_selector(name, Some(&matcher)), payload.into());
        self
    }
}

fn attr_selector(name: &str, matcher: Option<&AttrMatch>) -> String {
    let mut selector = format!("&[{name}");
    if let Some(matcher) = matcher {
        selector.push_str(matcher.operator);
        selector.push('"');
        selector.push_str(&matcher.value);
        selector.push('"');
        match matcher.case_sensitive {
            Some(true) => selector.push_str(" s"),
            Some(false) => selector.push_str(" i"),
            None => {}
        }
    }
    selector.push(']');
    selector
}

fn pseudo_op(ctx: &mut OpCtx<'_>, args: &[Value], selector: &'static str) -> StyleTree {
    ctx.select(selector, super::payload_arg(args, 0));
    StyleTree::new()
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("on_hover", |ctx, args| pseudo_op(ctx, args, "&:hover"));
    registry.add("on_focus", |ctx, args| pseudo_op(ctx, args, "&:focus"));
    registry.add("on_active", |ctx, args| pseudo_op(ctx, args, "&:active"));
    registry.add("before", |ctx, args| pseudo_op(ctx, args, "&::before"));
    registry.add("after", |ctx, args| pseudo_op(ctx, args, "&::after"));
    // attr(name, payload) or attr(name, match-options, payload)
    registry.add("attr", |ctx, args| {
        let Some(name) = super::str_arg(args, 0) else {
            return StyleTree::new();
        };
        let (matcher, payload_index) = match super::tree_arg(args, 2) {
            Some(_) => (
                super::tree_arg(args, 1).and_then(AttrMatch::from_tree),
                2,
            ),
            None => (None, 1),
        };
        let selector = attr_selector(name, matcher.as_ref());
        ctx.select(&selector, super::payload_arg(args, payload_index));
        StyleTree::new()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_pseudo_classes() {
        let compiled = chain()
            .on_hover(tree! { "opacity" => 0.8 })
            .on_focus(tree! { "outlineWidth" => 2 })
            .on_active(tree! { "transform" => "scale(0.98)" })
            .compile();
        assert!(compiled.contains_key("&:hover"));
        assert!(compiled.contains_key("&:focus"));
        assert!(compiled.contains_key("&:active"));
    }

    #[test]
    fn test_pseudo_elements() {
        let compiled = chain()
            .before(tree! { "content" => "\"→\"" })
            .after(tree! { "content" => "\"←\"" })
            .compile();
        assert_eq!(
            compiled["&::before"].as_tree().unwrap()["content"],
            Value::from("\"→\"")
        );
        assert!(compiled.contains_key("&::after"));
    }

    #[test]
    fn test_attr_presence() {
        let compiled = chain()
            .attr("disabled", tree! { "opacity" => 0.5 })
            .compile();
        assert!(compiled.contains_key("&[disabled]"));
    }

    #[test]
    fn test_attr_operators() {
        let cases = [
            (AttrMatch::eq("a"), "&[href=\"a\"]"),
            (AttrMatch::contains("a"), "&[href*=\"a\"]"),
            (AttrMatch::starts_with("a"), "&[href^=\"a\"]"),
            (AttrMatch::ends_with("a"), "&[href$=\"a\"]"),
            (AttrMatch::includes("a"), "&[href~=\"a\"]"),
            (AttrMatch::dash_match("a"), "&[href|=\"a\"]"),
        ];
        for (matcher, expected) in cases {
            let compiled = chain()
                .attr_match("href", matcher, tree! { "color" => "blue" })
                .compile();
            assert!(compiled.contains_key(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_attr_case_flag() {
        let compiled = chain()
            .attr_match(
                "lang",
                AttrMatch::eq("en").case_sensitive(false),
                tree! { "color" => "blue" },
            )
            .compile();
        assert!(compiled.contains_key("&[lang=\"en\" i]"));
    }

    #[test]
    fn test_chain_payload() {
        let hover = chain().fg("red").on_active(tree! { "opacity" => 1 });
        let compiled = chain().on_hover(hover).compile();
        let subtree = compiled["&:hover"].as_tree().unwrap();
        assert_eq!(subtree["color"], Value::from("red"));
        assert!(subtree.contains_key("&:active"));
    }

    #[test]
    fn test_dynamic_attr_with_options() {
        let compiled = chain()
            .op(
                "attr",
                &[
                    Value::from("data-state"),
                    Value::Tree(tree! { "startsWith" => "open" }),
                    Value::Tree(tree! { "color" => "green" }),
                ],
            )
            .unwrap()
            .compile();
        assert!(compiled.contains_key("&[data-state^=\"open\"]"));
    }

    #[test]
    fn test_selector_ops_leave_flat_tree_untouched() {
        let c = chain().on_hover(tree! { "opacity" => 1 });
        assert!(c.tree().is_empty());
    }
}
