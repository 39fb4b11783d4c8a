//! Width, height, and min/max bounds.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

#[derive(Debug, Clone, Default)]
pub struct SizeOptions {
    pub width: Option<Value>,
    pub height: Option<Value>,
    pub min_width: Option<Value>,
    pub min_height: Option<Value>,
    pub max_width: Option<Value>,
    pub max_height: Option<Value>,
    /// Rendered as an `aspectRatio` string.
    pub aspect: Option<f64>,
}

impl SizeOptions {
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            width: tree.get("width").cloned(),
            height: tree.get("height").cloned(),
            min_width: tree.get("minWidth").cloned(),
            min_height: tree.get("minHeight").cloned(),
            max_width: tree.get("maxWidth").cloned(),
            max_height: tree.get("maxHeight").cloned(),
            aspect: super::num_field(tree, "aspect"),
        }
    }
}

impl Chain {
    /// Sets width and height together.
    pub fn size(self, width: impl Into<Value>, height: impl Into<Value>) -> Self {
        self.update(apply_size_options(&SizeOptions {
            width: Some(width.into()),
            height: Some(height.into()),
            ..SizeOptions::default()
        }))
    }

    /// Sets any combination of dimensions and bounds.
    pub fn sized(self, options: SizeOptions) -> Self {
        self.update(apply_size_options(&options))
    }

    pub fn width(self, width: impl Into<Value>) -> Self {
        self.update(apply_size_options(&SizeOptions {
            width: Some(width.into()),
            ..SizeOptions::default()
        }))
    }

    pub fn height(self, height: impl Into<Value>) -> Self {
        self.update(apply_size_options(&SizeOptions {
            height: Some(height.into()),
            ..SizeOptions::default()
        }))
    }

    pub fn min_width(self, value: impl Into<Value>) -> Self {
        self.css(crate::tree! { "minWidth" => value.into() })
    }

    pub fn max_width(self, value: impl Into<Value>) -> Self {
        self.css(crate::tree! { "maxWidth" => value.into() })
    }

    pub fn min_height(self, value: impl Into<Value>) -> Self {
        self.css(crate::tree! { "minHeight" => value.into() })
    }

    pub fn max_height(self, value: impl Into<Value>) -> Self {
        self.css(crate::tree! { "maxHeight" => value.into() })
    }
}

pub(crate) fn apply_size_options(options: &SizeOptions) -> StyleTree {
    let mut out = StyleTree::new();
    let mut put = |key: &str, value: &Option<Value>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value.clone());
        }
    };

    put("width", &options.width);
    put("height", &options.height);
    put("maxWidth", &options.max_width);
    put("maxHeight", &options.max_height);
    put("minWidth", &options.min_width);
    put("minHeight", &options.min_height);

    if let Some(aspect) = options.aspect {
        out.insert(
            "aspectRatio".to_string(),
            Value::from(Value::Num(aspect).css_text()),
        );
    }
    out
}

pub(crate) fn register(registry: &mut Registry) {
    // size accepts (width, height), (options), or a mix; options arguments
    // apply first, then the height scalar, then the width scalar.
    registry.add("size", |_ctx, args| {
        let mut out = StyleTree::new();
        for index in [0, 1] {
            if let Some(options) = super::tree_arg(args, index) {
                crate::value::merge(&mut out, apply_size_options(&SizeOptions::from_tree(options)));
            }
        }
        if let Some(height) = scalar(args, 1) {
            out.insert("height".to_string(), height);
        }
        if let Some(width) = scalar(args, 0) {
            out.insert("width".to_string(), width);
        }
        out
    });
    registry.add("width", |_ctx, args| {
        let mut options = SizeOptions {
            width: scalar(args, 0),
            ..SizeOptions::default()
        };
        if let Some(tree) = super::tree_arg(args, 1) {
            options.min_width = tree.get("min").cloned();
            options.max_width = tree.get("max").cloned();
        }
        apply_size_options(&options)
    });
    registry.add("height", |_ctx, args| {
        let mut options = SizeOptions {
            height: scalar(args, 0),
            ..SizeOptions::default()
        };
        if let Some(tree) = super::tree_arg(args, 1) {
            options.min_height = tree.get("min").cloned();
            options.max_height = tree.get("max").cloned();
        }
        apply_size_options(&options)
    });
}

fn scalar(args: &[Value], index: usize) -> Option<Value> {
    match super::arg(args, index) {
        Some(Value::Tree(_)) | None => None,
        Some(other) => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_size_sets_both_dimensions() {
        let c = chain().size(100, "50%");
        assert_eq!(c.tree(), &tree! { "width" => 100, "height" => "50%" });
    }

    #[test]
    fn test_sized_aspect_renders_as_string() {
        let c = chain().sized(SizeOptions {
            aspect: Some(1.5),
            ..SizeOptions::default()
        });
        assert_eq!(c.tree()["aspectRatio"], Value::from("1.5"));
    }

    #[test]
    fn test_bounds() {
        let c = chain()
            .width("100%")
            .max_width(640)
            .min_height(200);
        assert_eq!(c.tree()["width"], Value::from("100%"));
        assert_eq!(c.tree()["maxWidth"], Value::from(640));
        assert_eq!(c.tree()["minHeight"], Value::from(200));
    }

    #[test]
    fn test_dynamic_width_with_bounds() {
        let c = chain()
            .op(
                "width",
                &[Value::from(300), Value::Tree(tree! { "max" => 600 })],
            )
            .unwrap();
        assert_eq!(c.tree()["width"], Value::from(300));
        assert_eq!(c.tree()["maxWidth"], Value::from(600));
    }

    #[test]
    fn test_dynamic_size_scalar_wins_over_options() {
        // size(300, { width: 100 }): the scalar width applies last
        let c = chain()
            .op(
                "size",
                &[Value::from(300), Value::Tree(tree! { "width" => 100 })],
            )
            .unwrap();
        assert_eq!(c.tree()["width"], Value::from(300));
    }
}
