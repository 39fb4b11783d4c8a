//! Text-selection behavior and colors.
//!
//! Registers `selection` over the color family's plain two-color
//! version, adding the `userSelect` controls.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

use super::colors::selection_subtree;

/// `user-select` keywords plus the boolean shorthand (`true` is `auto`,
/// `false` is `none`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSelect {
    None,
    Auto,
    Text,
    All,
    Contain,
    Element,
}

impl UserSelect {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::Text => "text",
            Self::All => "all",
            Self::Contain => "contain",
            Self::Element => "element",
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(true) => Some(Self::Auto),
            Value::Bool(false) => Some(Self::None),
            Value::Str(keyword) => Some(match keyword.as_str() {
                "none" => Self::None,
                "auto" => Self::Auto,
                "text" => Self::Text,
                "all" => Self::All,
                "contain" => Self::Contain,
                "element" => Self::Element,
                _ => return None,
            }),
            _ => None,
        }
    }
}

impl From<bool> for UserSelect {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Auto
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionOptions {
    /// Selection highlight color, emitted into the `::selection` subtree.
    pub bg: Option<String>,
    /// Selected-text color, emitted into the `::selection` subtree.
    pub fg: Option<String>,
    /// Shorthand for `user_select`: `true` is `auto`, `false` is `none`.
    pub enabled: Option<bool>,
    pub user_select: Option<UserSelect>,
}

impl SelectionOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            bg: super::str_field(tree, "bg"),
            fg: super::str_field(tree, "fg"),
            enabled: super::bool_field(tree, "enabled"),
            user_select: tree.get("userSelect").and_then(UserSelect::from_value),
        }
    }
}

/// A selection argument: a bare toggle or full options.
#[derive(Debug, Clone)]
pub enum SelectionArg {
    Toggle(bool),
    Options(SelectionOptions),
}

impl From<bool> for SelectionArg {
    fn from(enabled: bool) -> Self {
        SelectionArg::Toggle(enabled)
    }
}

impl From<SelectionOptions> for SelectionArg {
    fn from(options: SelectionOptions) -> Self {
        SelectionArg::Options(options)
    }
}

impl Chain {
    /// Controls whether and how text can be selected, and the selection
    /// colors.
    pub fn selection(self, arg: impl Into<SelectionArg>) -> Self {
        let updates = apply_selection(&self.tree, &arg.into());
        self.update(updates)
    }
}

fn apply_selection(current: &StyleTree, arg: &SelectionArg) -> StyleTree {
    let options = match arg {
        SelectionArg::Toggle(enabled) => {
            return crate::tree! {
                "userSelect" => UserSelect::from(*enabled).as_str()
            };
        }
        SelectionArg::Options(options) => options,
    };

    let mut out = StyleTree::new();
    if options.bg.is_some() || options.fg.is_some() {
        merge(&mut out, selection_subtree(current, &options.bg, &options.fg));
    }
    if let Some(enabled) = options.enabled {
        out.insert(
            "userSelect".to_string(),
            UserSelect::from(enabled).as_str().into(),
        );
    }
    if let Some(user_select) = options.user_select {
        out.insert("userSelect".to_string(), user_select.as_str().into());
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    // replaces the color family's selection(bg, fg)
    registry.add("selection", |ctx, args| {
        let arg = match super::arg(args, 0) {
            Some(Value::Bool(enabled)) => SelectionArg::Toggle(*enabled),
            Some(Value::Tree(tree)) => SelectionArg::Options(SelectionOptions::from_tree(tree)),
            _ => return StyleTree::new(),
        };
        apply_selection(ctx.tree(), &arg)
    });
}
