//! General box options: dimensions, positioning, display, and the
//! positioning shorthands (`absolute`, `pin`, `relative`).

use crate::chain::Chain;
use crate::registry::{OpCtx, Registry};
use crate::value::{merge, StyleTree, Value};

use super::align::{apply_align, AlignArg};

/// The full grab-bag of box styling options. Shorthand keys (`justify`,
/// `items`, `flexDir`, `x`, `y`, `aspect`) map onto their longhand
/// properties; everything else passes through under its own name.
#[derive(Debug, Clone, Default)]
pub struct BoxOptions {
    pub width: Option<Value>,
    pub height: Option<Value>,
    pub max_width: Option<Value>,
    pub max_height: Option<Value>,
    pub min_width: Option<Value>,
    pub min_height: Option<Value>,
    pub top: Option<Value>,
    pub right: Option<Value>,
    pub bottom: Option<Value>,
    pub left: Option<Value>,
    /// Maps to `left`.
    pub x: Option<Value>,
    /// Maps to `top`.
    pub y: Option<Value>,
    pub position: Option<String>,
    /// Maps to `flexDirection`.
    pub flex_dir: Option<String>,
    /// Maps to `justifyContent`.
    pub justify: Option<String>,
    /// Maps to `alignItems`.
    pub items: Option<String>,
    /// Maps to `aspectRatio`.
    pub aspect: Option<Value>,
    pub display: Option<String>,
    pub align: Option<AlignArg>,
    pub place_self: Option<String>,
    pub align_self: Option<String>,
    pub opacity: Option<Value>,
    pub z_index: Option<f64>,
    pub content: Option<String>,
}

impl BoxOptions {
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            width: tree.get("width").cloned(),
            height: tree.get("height").cloned(),
            max_width: tree.get("maxWidth").cloned(),
            max_height: tree.get("maxHeight").cloned(),
            min_width: tree.get("minWidth").cloned(),
            min_height: tree.get("minHeight").cloned(),
            top: tree.get("top").cloned(),
            right: tree.get("right").cloned(),
            bottom: tree.get("bottom").cloned(),
            left: tree.get("left").cloned(),
            x: tree.get("x").cloned(),
            y: tree.get("y").cloned(),
            position: super::str_field(tree, "position"),
            flex_dir: super::str_field(tree, "flexDir"),
            justify: super::str_field(tree, "justify"),
            items: super::str_field(tree, "items"),
            aspect: tree.get("aspect").cloned(),
            display: super::str_field(tree, "display"),
            align: tree.get("align").map(AlignArg::from_value),
            place_self: super::str_field(tree, "placeSelf"),
            align_self: super::str_field(tree, "alignSelf"),
            opacity: tree.get("opacity").cloned(),
            z_index: super::num_field(tree, "zIndex"),
            content: super::str_field(tree, "content"),
        }
    }
}

/// Browser `appearance` keywords, applied with vendor prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    None,
    Auto,
    MenuList,
    TextField,
    Button,
    SearchField,
    Textarea,
}

impl Appearance {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Auto => "auto",
            Self::MenuList => "menulist",
            Self::TextField => "textfield",
            Self::Button => "button",
            Self::SearchField => "searchfield",
            Self::Textarea => "textarea",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "none" => Self::None,
            "auto" => Self::Auto,
            "menulist" => Self::MenuList,
            "textfield" => Self::TextField,
            "button" => Self::Button,
            "searchfield" => Self::SearchField,
            "textarea" => Self::Textarea,
            _ => return None,
        })
    }
}

impl Chain {
    /// Applies box options to the tree.
    pub fn boxed(self, options: BoxOptions) -> Self {
        let updates = apply_box(&self.tree, &options);
        self.update(updates)
    }

    /// Like [`Chain::boxed`], defaulting to a centered flex container.
    pub fn frame(self, options: BoxOptions) -> Self {
        let updates = apply_frame(&self.tree, &options);
        self.update(updates)
    }

    pub fn display(self, display: &str) -> Self {
        self.display_with(display, BoxOptions::default())
    }

    pub fn display_with(self, display: &str, mut options: BoxOptions) -> Self {
        options.display = Some(display.to_string());
        self.boxed(options)
    }

    /// `position: absolute`.
    pub fn absolute(self) -> Self {
        self.positioned("absolute", BoxOptions::default())
    }

    /// `position: absolute` at `(x, y)`.
    pub fn absolute_at(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.positioned("absolute", at(x, y))
    }

    /// `position: absolute` with box options.
    pub fn absolute_with(self, options: BoxOptions) -> Self {
        self.positioned("absolute", options)
    }

    /// Alias for [`Chain::absolute_at`].
    pub fn position_at(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.absolute_at(x, y)
    }

    /// `position: fixed`.
    pub fn pin(self) -> Self {
        self.positioned("fixed", BoxOptions::default())
    }

    /// `position: fixed` at `(x, y)`.
    pub fn pin_at(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.positioned("fixed", at(x, y))
    }

    /// `position: relative`.
    pub fn relative(self) -> Self {
        self.positioned("relative", BoxOptions::default())
    }

    /// `position: relative` offset by `(x, y)`.
    pub fn relative_at(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.positioned("relative", at(x, y))
    }

    pub fn opacity(self, value: impl Into<Value>) -> Self {
        self.css(crate::tree! { "opacity" => value.into() })
    }

    pub fn z_index(self, value: i32) -> Self {
        self.css(crate::tree! { "zIndex" => value })
    }

    /// Sets `content` for pseudo-elements; quote the string yourself
    /// (`content("\"→\"")`).
    pub fn content(self, value: &str) -> Self {
        self.css(crate::tree! { "content" => value })
    }

    /// Sets `appearance` with the WebKit and Mozilla prefixes.
    pub fn appear(self, value: Appearance) -> Self {
        self.update(apply_appearance(value))
    }

    fn positioned(self, position: &str, mut options: BoxOptions) -> Self {
        options.position = Some(position.to_string());
        self.boxed(options)
    }
}

fn at(x: impl Into<Value>, y: impl Into<Value>) -> BoxOptions {
    BoxOptions {
        x: Some(x.into()),
        y: Some(y.into()),
        ..BoxOptions::default()
    }
}

pub(crate) fn apply_box(current: &StyleTree, options: &BoxOptions) -> StyleTree {
    let mut out = StyleTree::new();
    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value);
        }
    };

    put("width", options.width.clone());
    put("height", options.height.clone());
    put("maxWidth", options.max_width.clone());
    put("maxHeight", options.max_height.clone());
    put("minWidth", options.min_width.clone());
    put("minHeight", options.min_height.clone());
    put("top", options.top.clone());
    put("right", options.right.clone());
    put("bottom", options.bottom.clone());
    put("left", options.left.clone());
    put("left", options.x.clone());
    put("top", options.y.clone());
    put("position", options.position.clone().map(Value::from));
    put("flexDirection", options.flex_dir.clone().map(Value::from));
    put("justifyContent", options.justify.clone().map(Value::from));
    put("alignItems", options.items.clone().map(Value::from));
    put("aspectRatio", options.aspect.clone());
    put("display", options.display.clone().map(Value::from));
    put("placeSelf", options.place_self.clone().map(Value::from));
    put("alignSelf", options.align_self.clone().map(Value::from));
    put("opacity", options.opacity.clone());
    put("zIndex", options.z_index.map(Value::from));
    put("content", options.content.clone().map(Value::from));

    if let Some(align) = &options.align {
        // alignment reads display/flexDirection from the merged view
        let mut scratch = current.clone();
        merge(&mut scratch, out.clone());
        merge(&mut out, apply_align(&scratch, align));
    }

    out
}

fn apply_frame(current: &StyleTree, options: &BoxOptions) -> StyleTree {
    let defaults = BoxOptions {
        display: options.display.clone().or_else(|| Some("flex".to_string())),
        justify: options
            .justify
            .clone()
            .or_else(|| Some("center".to_string())),
        items: options.items.clone().or_else(|| Some("center".to_string())),
        ..options.clone()
    };
    apply_box(current, &defaults)
}

fn apply_appearance(value: Appearance) -> StyleTree {
    crate::tree! {
        "appearance" => value.as_str(),
        "WebkitAppearance" => value.as_str(),
        "MozAppearance" => value.as_str(),
    }
}

fn positioned_op(ctx: &mut OpCtx<'_>, args: &[Value], position: &str) -> StyleTree {
    let mut options = match super::arg(args, 0) {
        None => BoxOptions::default(),
        Some(Value::Tree(tree)) => BoxOptions::from_tree(tree),
        Some(x) => {
            let mut options = BoxOptions {
                x: Some(x.clone()),
                ..BoxOptions::default()
            };
            match super::arg(args, 1) {
                Some(Value::Tree(tree)) => {
                    options = BoxOptions {
                        x: Some(x.clone()),
                        ..BoxOptions::from_tree(tree)
                    };
                }
                Some(y) => {
                    options.y = Some(y.clone());
                    if let Some(extra) = super::tree_arg(args, 2) {
                        let mut merged = BoxOptions::from_tree(extra);
                        merged.x = Some(x.clone());
                        merged.y = options.y.clone();
                        options = merged;
                    }
                }
                None => {}
            }
            options
        }
    };
    options.position = Some(position.to_string());
    apply_box(ctx.tree(), &options)
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("box", |ctx, args| match super::tree_arg(args, 0) {
        Some(tree) => apply_box(ctx.tree(), &BoxOptions::from_tree(tree)),
        None => StyleTree::new(),
    });
    registry.add("frame", |ctx, args| {
        let options = super::tree_arg(args, 0)
            .map(BoxOptions::from_tree)
            .unwrap_or_default();
        apply_frame(ctx.tree(), &options)
    });
    registry.add("display", |ctx, args| match super::str_arg(args, 0) {
        Some(display) => {
            let mut options = super::tree_arg(args, 1)
                .map(BoxOptions::from_tree)
                .unwrap_or_default();
            options.display = Some(display.to_string());
            apply_box(ctx.tree(), &options)
        }
        None => StyleTree::new(),
    });
    registry.add("absolute", |ctx, args| positioned_op(ctx, args, "absolute"));
    registry.add("position", |ctx, args| positioned_op(ctx, args, "absolute"));
    registry.add("pin", |ctx, args| positioned_op(ctx, args, "fixed"));
    registry.add("relative", |ctx, args| positioned_op(ctx, args, "relative"));
    registry.add("opacity", |_ctx, args| match super::arg(args, 0) {
        Some(value) => crate::tree! { "opacity" => value.clone() },
        None => StyleTree::new(),
    });
    registry.add("z_index", |_ctx, args| match super::num_arg(args, 0) {
        Some(value) => crate::tree! { "zIndex" => value },
        None => StyleTree::new(),
    });
    registry.add("content", |_ctx, args| match super::str_arg(args, 0) {
        Some(value) => crate::tree! { "content" => value },
        None => StyleTree::new(),
    });
    registry.add("appear", |_ctx, args| {
        match super::str_arg(args, 0).and_then(Appearance::from_keyword) {
            Some(value) => apply_appearance(value),
            None => StyleTree::new(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_shorthand_keys_map_to_longhands() {
        let c = chain().boxed(BoxOptions {
            justify: Some("center".to_string()),
            items: Some("stretch".to_string()),
            flex_dir: Some("row".to_string()),
            x: Some(10.into()),
            y: Some(20.into()),
            aspect: Some(1.into()),
            ..BoxOptions::default()
        });
        assert_eq!(c.tree()["justifyContent"], Value::from("center"));
        assert_eq!(c.tree()["alignItems"], Value::from("stretch"));
        assert_eq!(c.tree()["flexDirection"], Value::from("row"));
        assert_eq!(c.tree()["left"], Value::from(10));
        assert_eq!(c.tree()["top"], Value::from(20));
        assert_eq!(c.tree()["aspectRatio"], Value::from(1));
    }

    #[test]
    fn test_frame_defaults_center() {
        let c = chain().frame(BoxOptions::default());
        assert_eq!(
            c.tree(),
            &tree! {
                "justifyContent" => "center",
                "alignItems" => "center",
                "display" => "flex",
            }
        );
    }

    #[test]
    fn test_frame_caller_options_win() {
        let c = chain().frame(BoxOptions {
            justify: Some("flex-end".to_string()),
            ..BoxOptions::default()
        });
        assert_eq!(c.tree()["justifyContent"], Value::from("flex-end"));
        assert_eq!(c.tree()["alignItems"], Value::from("center"));
    }

    #[test]
    fn test_absolute_variants() {
        assert_eq!(
            chain().absolute().tree(),
            &tree! { "position" => "absolute" }
        );
        let c = chain().absolute_at(10, 20);
        assert_eq!(c.tree()["position"], Value::from("absolute"));
        assert_eq!(c.tree()["left"], Value::from(10));
        assert_eq!(c.tree()["top"], Value::from(20));
    }

    #[test]
    fn test_pin_and_relative() {
        assert_eq!(
            chain().pin().tree()["position"],
            Value::from("fixed")
        );
        assert_eq!(
            chain().relative_at(0, 4).tree()["position"],
            Value::from("relative")
        );
    }

    #[test]
    fn test_appear_sets_vendor_prefixes() {
        let c = chain().appear(Appearance::None);
        assert_eq!(c.tree()["appearance"], Value::from("none"));
        assert_eq!(c.tree()["WebkitAppearance"], Value::from("none"));
        assert_eq!(c.tree()["MozAppearance"], Value::from("none"));
    }

    #[test]
    fn test_box_align_sees_display_from_same_call() {
        let c = chain().boxed(BoxOptions {
            display: Some("grid".to_string()),
            align: Some(AlignArg::from("bottom")),
            ..BoxOptions::default()
        });
        assert_eq!(c.tree()["alignContent"], Value::from("end"));
    }

    #[test]
    fn test_dynamic_absolute_scalars() {
        let c = chain()
            .op("absolute", &[Value::from(5), Value::from(8)])
            .unwrap();
        assert_eq!(c.tree()["left"], Value::from(5));
        assert_eq!(c.tree()["top"], Value::from(8));
        assert_eq!(c.tree()["position"], Value::from("absolute"));
    }
}
