//! Foreground, background, and the color-adjacent pseudo selectors.
//!
//! `placeholder` and selection colors emit inline nested subtrees
//! (`&::placeholder`, `::selection`) inside the flat tree rather than
//! going through the selector table.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

#[derive(Debug, Clone, Default)]
pub struct ColorOptions {
    /// Maps to `color`.
    pub fg: Option<String>,
    /// A color string maps to `backgroundColor`; background options
    /// expand to their longhands.
    pub bg: Option<BgArg>,
    /// Maps to `borderColor`.
    pub border: Option<String>,
    /// Maps to `caretColor`.
    pub caret: Option<String>,
    pub outline: Option<String>,
    /// Emitted as a `&::placeholder` subtree.
    pub placeholder: Option<String>,
    /// Emitted into the `::selection` subtree.
    pub selection_bg: Option<String>,
    pub selection_fg: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BackgroundOptions {
    pub color: Option<String>,
    /// Wrapped in `url(...)`.
    pub url: Option<String>,
    /// A complete `backgroundImage` value, used verbatim.
    pub src: Option<String>,
    pub size: Option<String>,
    pub position: Option<String>,
    pub repeat: Option<String>,
}

impl BackgroundOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            color: super::str_field(tree, "color"),
            url: super::str_field(tree, "url"),
            src: super::str_field(tree, "src"),
            size: super::str_field(tree, "size"),
            position: super::str_field(tree, "position"),
            repeat: super::str_field(tree, "repeat"),
        }
    }
}

/// A background argument: a raw CSS `background` value or longhand
/// options.
#[derive(Debug, Clone)]
pub enum BgArg {
    Raw(String),
    Options(BackgroundOptions),
}

impl From<&str> for BgArg {
    fn from(s: &str) -> Self {
        BgArg::Raw(s.to_string())
    }
}

impl From<String> for BgArg {
    fn from(s: String) -> Self {
        BgArg::Raw(s)
    }
}

impl From<BackgroundOptions> for BgArg {
    fn from(options: BackgroundOptions) -> Self {
        BgArg::Options(options)
    }
}

impl Chain {
    /// Applies the combined color options.
    pub fn color(self, options: ColorOptions) -> Self {
        let updates = apply_color_options(&self.tree, &options);
        self.update(updates)
    }

    /// Text color.
    pub fn fg(self, color: &str) -> Self {
        self.css(crate::tree! { "color" => color })
    }

    /// Background: a string sets the `background` shorthand, options
    /// expand to the longhands.
    pub fn bg(self, arg: impl Into<BgArg>) -> Self {
        self.update(apply_background(&arg.into()))
    }

    /// Alias for [`Chain::bg`].
    pub fn fill(self, arg: impl Into<BgArg>) -> Self {
        self.bg(arg)
    }

    /// Placeholder text color, as a `&::placeholder` subtree.
    pub fn placeholder(self, color: &str) -> Self {
        self.color(ColorOptions {
            placeholder: Some(color.to_string()),
            ..ColorOptions::default()
        })
    }
}

fn apply_color_options(current: &StyleTree, options: &ColorOptions) -> StyleTree {
    let mut out = StyleTree::new();
    let mut put = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value.as_str().into());
        }
    };

    put("color", &options.fg);
    put("borderColor", &options.border);
    put("caretColor", &options.caret);
    put("outline", &options.outline);

    match &options.bg {
        Some(BgArg::Raw(color)) => {
            out.insert("backgroundColor".to_string(), color.as_str().into());
        }
        Some(arg @ BgArg::Options(_)) => merge(&mut out, apply_background(arg)),
        None => {}
    }

    if let Some(placeholder) = &options.placeholder {
        out.insert(
            "&::placeholder".to_string(),
            Value::Tree(crate::tree! { "color" => placeholder.as_str() }),
        );
    }

    if options.selection_bg.is_some() || options.selection_fg.is_some() {
        merge(
            &mut out,
            selection_subtree(current, &options.selection_bg, &options.selection_fg),
        );
    }

    out
}

/// Builds a `::selection` subtree merged over whatever the tree already
/// holds for it; also used by the accessibility family.
pub(crate) fn selection_subtree(
    current: &StyleTree,
    bg: &Option<String>,
    fg: &Option<String>,
) -> StyleTree {
    let mut selection = current
        .get("::selection")
        .and_then(Value::as_tree)
        .cloned()
        .unwrap_or_default();
    if let Some(bg) = bg {
        selection.insert("backgroundColor".to_string(), bg.as_str().into());
    }
    if let Some(fg) = fg {
        selection.insert("color".to_string(), fg.as_str().into());
    }
    crate::tree! { "::selection" => selection }
}

fn apply_background(arg: &BgArg) -> StyleTree {
    let options = match arg {
        BgArg::Raw(value) => {
            return crate::tree! { "background" => value.as_str() };
        }
        BgArg::Options(options) => options,
    };

    let mut out = StyleTree::new();
    if let Some(color) = &options.color {
        out.insert("backgroundColor".to_string(), color.as_str().into());
    }
    if let Some(url) = &options.url {
        out.insert("backgroundImage".to_string(), format!("url({url})").into());
    }
    if let Some(src) = &options.src {
        out.insert("backgroundImage".to_string(), src.as_str().into());
    }
    if let Some(size) = &options.size {
        out.insert("backgroundSize".to_string(), size.as_str().into());
    }
    if let Some(position) = &options.position {
        out.insert("backgroundPosition".to_string(), position.as_str().into());
    }
    if let Some(repeat) = &options.repeat {
        out.insert("backgroundRepeat".to_string(), repeat.as_str().into());
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("color", |ctx, args| match super::tree_arg(args, 0) {
        Some(tree) => {
            let options = ColorOptions {
                fg: super::str_field(tree, "fg"),
                bg: tree.get("bg").map(bg_from_value),
                border: super::str_field(tree, "border"),
                caret: super::str_field(tree, "caret"),
                outline: super::str_field(tree, "outline"),
                placeholder: super::str_field(tree, "placeholder"),
                selection_bg: super::str_field(tree, "selectionBg"),
                selection_fg: super::str_field(tree, "selectionFg"),
            };
            apply_color_options(ctx.tree(), &options)
        }
        None => StyleTree::new(),
    });
    registry.add("fg", |_ctx, args| match super::str_arg(args, 0) {
        Some(color) => crate::tree! { "color" => color },
        None => StyleTree::new(),
    });
    registry.add("bg", bg_op);
    registry.add("fill", bg_op);
    registry.add("placeholder", |ctx, args| match super::str_arg(args, 0) {
        Some(color) => apply_color_options(
            ctx.tree(),
            &ColorOptions {
                placeholder: Some(color.to_string()),
                ..ColorOptions::default()
            },
        ),
        None => StyleTree::new(),
    });
    // replaced by the accessibility family's richer selection op
    registry.add("selection", |ctx, args| {
        selection_subtree(
            ctx.tree(),
            &super::str_arg(args, 0).map(str::to_string),
            &super::str_arg(args, 1).map(str::to_string),
        )
    });
}

fn bg_op(_ctx: &mut crate::registry::OpCtx<'_>, args: &[Value]) -> StyleTree {
    match super::arg(args, 0) {
        Some(value) => apply_background(&bg_from_value(value)),
        None => StyleTree::new(),
    }
}

fn bg_from_value(value: &Value) -> BgArg {
    match value {
        Value::Tree(tree) => BgArg::Options(BackgroundOptions::from_tree(tree)),
        other => BgArg::Raw(other.css_text()),
    }
}
