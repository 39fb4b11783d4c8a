//! Typography.

use crate::chain::Chain;
use crate::registry::{OpCtx, Registry};
use crate::value::{merge, StyleTree, Value};

#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub color: Option<String>,
    /// Maps to `fontSize`.
    pub size: Option<Value>,
    /// Maps to `fontFamily`.
    pub family: Option<String>,
    /// Maps to `fontWeight`.
    pub weight: Option<Value>,
    /// Maps to `letterSpacing`.
    pub tracking: Option<Value>,
    /// Maps to `lineHeight`.
    pub leading: Option<Value>,
    /// Maps to `textAlign`.
    pub align: Option<String>,
    /// `upper`, `lower`, `capitalize`, or `normal`; maps to
    /// `textTransform`.
    pub case: Option<String>,
    /// Maps to `whiteSpace`.
    pub wrap: Option<String>,
    pub cursor: Option<String>,
    /// Maps to `textDecoration`.
    pub decoration: Option<String>,
    pub ellipsis: bool,
}

impl TextOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            color: super::str_field(tree, "color"),
            size: tree.get("size").cloned(),
            family: super::str_field(tree, "family"),
            weight: tree.get("weight").cloned(),
            tracking: tree.get("tracking").cloned(),
            leading: tree
                .get("leading")
                .or_else(|| tree.get("height"))
                .or_else(|| tree.get("lineHeight"))
                .cloned(),
            align: super::str_field(tree, "align"),
            case: super::str_field(tree, "case"),
            wrap: super::str_field(tree, "wrap")
                .or_else(|| super::str_field(tree, "whiteSpace")),
            cursor: super::str_field(tree, "cursor"),
            decoration: super::str_field(tree, "decoration"),
            ellipsis: super::bool_field(tree, "ellipsis").unwrap_or(false),
        }
    }
}

/// A text argument: a bare font size or full options.
#[derive(Debug, Clone)]
pub enum TextArg {
    Size(Value),
    Options(TextOptions),
}

impl From<i32> for TextArg {
    fn from(size: i32) -> Self {
        TextArg::Size(size.into())
    }
}

impl From<f64> for TextArg {
    fn from(size: f64) -> Self {
        TextArg::Size(size.into())
    }
}

impl From<&str> for TextArg {
    fn from(size: &str) -> Self {
        TextArg::Size(size.into())
    }
}

impl From<TextOptions> for TextArg {
    fn from(options: TextOptions) -> Self {
        TextArg::Options(options)
    }
}

impl Chain {
    /// Applies typography: a bare size or full options.
    pub fn text(self, arg: impl Into<TextArg>) -> Self {
        self.update(apply_text(&arg.into(), None))
    }

    /// Typography with the `$sans` family unless the options name one.
    pub fn sans(self, arg: impl Into<TextArg>) -> Self {
        self.update(apply_text(&arg.into(), Some("$sans")))
    }

    /// Typography with the `$mono` family unless the options name one.
    pub fn mono(self, arg: impl Into<TextArg>) -> Self {
        self.update(apply_text(&arg.into(), Some("$mono")))
    }

    /// Typography with the `$serif` family unless the options name one.
    pub fn serif(self, arg: impl Into<TextArg>) -> Self {
        self.update(apply_text(&arg.into(), Some("$serif")))
    }

    /// Single-line truncation with an ellipsis.
    pub fn ellipsis(self) -> Self {
        self.update(apply_ellipsis())
    }
}

fn apply_text(arg: &TextArg, family_default: Option<&str>) -> StyleTree {
    let mut options = match arg {
        TextArg::Size(size) => TextOptions {
            size: Some(size.clone()),
            ..TextOptions::default()
        },
        TextArg::Options(options) => options.clone(),
    };
    if options.family.is_none() {
        options.family = family_default.map(str::to_string);
    }
    apply_text_options(&options)
}

fn apply_text_options(options: &TextOptions) -> StyleTree {
    let mut out = StyleTree::new();
    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value);
        }
    };

    put("color", options.color.clone().map(Value::from));
    put("fontSize", options.size.clone());
    put("fontFamily", options.family.clone().map(Value::from));
    put("fontWeight", options.weight.clone());
    put("letterSpacing", options.tracking.clone());
    put("lineHeight", options.leading.clone());
    put("textAlign", options.align.clone().map(Value::from));
    put("whiteSpace", options.wrap.clone().map(Value::from));
    put("cursor", options.cursor.clone().map(Value::from));
    put("textDecoration", options.decoration.clone().map(Value::from));

    if let Some(case) = &options.case {
        let transform = match case.as_str() {
            "upper" => "uppercase",
            "lower" => "lowercase",
            "capitalize" => "capitalize",
            _ => "none",
        };
        out.insert("textTransform".to_string(), transform.into());
    }

    if options.ellipsis {
        merge(&mut out, apply_ellipsis());
    }

    out
}

fn apply_ellipsis() -> StyleTree {
    crate::tree! {
        "overflowX" => "hidden",
        "overflowY" => "hidden",
        "whiteSpace" => "nowrap",
        "textOverflow" => "ellipsis",
    }
}

fn text_op(args: &[Value], family: Option<&str>) -> StyleTree {
    let arg = match super::arg(args, 0) {
        None => return StyleTree::new(),
        Some(Value::Tree(tree)) => TextArg::Options(TextOptions::from_tree(tree)),
        Some(size) => match super::tree_arg(args, 1) {
            Some(extra) => TextArg::Options(TextOptions {
                size: Some(size.clone()),
                ..TextOptions::from_tree(extra)
            }),
            None => TextArg::Size(size.clone()),
        },
    };
    apply_text(&arg, family)
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("text", |_ctx, args| text_op(args, None));
    registry.add("sans", |_ctx, args| text_op(args, Some("$sans")));
    registry.add("mono", |_ctx, args| text_op(args, Some("$mono")));
    registry.add("serif", |_ctx, args| text_op(args, Some("$serif")));
    registry.add("ellipsis", |_ctx: &mut OpCtx<'_>, _args| apply_ellipsis());
}
