//! Box and text shadows.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{to_px, StyleTree, Value};

#[derive(Debug, Clone)]
pub struct ShadowOptions {
    pub x: Value,
    pub y: Value,
    pub blur: Value,
    pub spread: Value,
    pub color: String,
    pub inset: bool,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            x: 0.into(),
            y: 4.into(),
            blur: 4.into(),
            spread: 0.into(),
            color: "rgba(0, 0, 0, 0.25)".to_string(),
            inset: false,
        }
    }
}

impl ShadowOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        let defaults = Self::default();
        Self {
            x: tree.get("x").cloned().unwrap_or(defaults.x),
            y: tree.get("y").cloned().unwrap_or(defaults.y),
            blur: tree.get("blur").cloned().unwrap_or(defaults.blur),
            spread: tree.get("spread").cloned().unwrap_or(defaults.spread),
            color: super::str_field(tree, "color").unwrap_or(defaults.color),
            inset: super::bool_field(tree, "inset").unwrap_or(false),
        }
    }
}

/// A box-shadow argument. `true` and `Default` give the stock shadow,
/// `false`/`Off` remove any shadow, a number adjusts the stock shadow's
/// opacity (clamped to `0..=1`).
#[derive(Debug, Clone)]
pub enum ShadowArg {
    Default,
    Off,
    Opacity(f64),
    Options(ShadowOptions),
}

impl From<bool> for ShadowArg {
    fn from(on: bool) -> Self {
        if on {
            ShadowArg::Default
        } else {
            ShadowArg::Off
        }
    }
}

impl From<f64> for ShadowArg {
    fn from(opacity: f64) -> Self {
        ShadowArg::Opacity(opacity)
    }
}

impl From<ShadowOptions> for ShadowArg {
    fn from(options: ShadowOptions) -> Self {
        ShadowArg::Options(options)
    }
}

#[derive(Debug, Clone)]
pub struct TextShadowOptions {
    pub x: Value,
    pub y: Value,
    pub blur: Option<Value>,
    pub color: String,
}

impl Default for TextShadowOptions {
    fn default() -> Self {
        Self {
            x: 1.into(),
            y: 1.into(),
            blur: Some(2.into()),
            color: "rgba(0, 0, 0, 0.25)".to_string(),
        }
    }
}

impl TextShadowOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        let defaults = Self::default();
        Self {
            x: tree.get("x").cloned().unwrap_or(defaults.x),
            y: tree.get("y").cloned().unwrap_or(defaults.y),
            blur: tree.get("blur").cloned().or(defaults.blur),
            color: super::str_field(tree, "color").unwrap_or(defaults.color),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TextShadowArg {
    Default,
    Opacity(f64),
    Options(TextShadowOptions),
}

impl From<f64> for TextShadowArg {
    fn from(opacity: f64) -> Self {
        TextShadowArg::Opacity(opacity)
    }
}

impl From<TextShadowOptions> for TextShadowArg {
    fn from(options: TextShadowOptions) -> Self {
        TextShadowArg::Options(options)
    }
}

impl Chain {
    /// Applies a box shadow.
    pub fn shadow(self, arg: impl Into<ShadowArg>) -> Self {
        self.update(apply_shadow(&arg.into()))
    }

    /// Applies a text shadow.
    pub fn text_shadow(self, arg: impl Into<TextShadowArg>) -> Self {
        self.update(apply_text_shadow(&arg.into()))
    }
}

fn apply_shadow(arg: &ShadowArg) -> StyleTree {
    let options = match arg {
        ShadowArg::Default => ShadowOptions::default(),
        ShadowArg::Off => return crate::tree! { "boxShadow" => "none" },
        ShadowArg::Opacity(opacity) => ShadowOptions {
            color: rgba(*opacity),
            ..ShadowOptions::default()
        },
        ShadowArg::Options(options) => options.clone(),
    };

    let inset = if options.inset { "inset " } else { "" };
    let value = format!(
        "{inset}{} {} {} {} {}",
        to_px(&options.x),
        to_px(&options.y),
        to_px(&options.blur),
        to_px(&options.spread),
        options.color
    );
    crate::tree! { "boxShadow" => value }
}

fn apply_text_shadow(arg: &TextShadowArg) -> StyleTree {
    let options = match arg {
        TextShadowArg::Default => TextShadowOptions::default(),
        TextShadowArg::Opacity(opacity) => TextShadowOptions {
            color: rgba(*opacity),
            ..TextShadowOptions::default()
        },
        TextShadowArg::Options(options) => options.clone(),
    };

    let mut parts = vec![to_px(&options.x), to_px(&options.y)];
    if let Some(blur) = &options.blur {
        parts.push(to_px(blur));
    }
    parts.push(options.color);
    crate::tree! { "textShadow" => parts.join(" ") }
}

fn rgba(opacity: f64) -> String {
    let opacity = opacity.clamp(0.0, 1.0);
    format!("rgba(0, 0, 0, {})", Value::Num(opacity).css_text())
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("shadow", |_ctx, args| {
        let arg = match super::arg(args, 0) {
            None => ShadowArg::Default,
            Some(Value::Bool(on)) => ShadowArg::from(*on),
            Some(Value::Num(n)) if *n == 0.0 => ShadowArg::Off,
            Some(Value::Num(n)) => ShadowArg::Opacity(*n),
            Some(Value::Tree(tree)) => ShadowArg::Options(ShadowOptions::from_tree(tree)),
            Some(Value::Str(_)) => ShadowArg::Default,
        };
        apply_shadow(&arg)
    });
    registry.add("text_shadow", |_ctx, args| {
        let arg = match super::arg(args, 0) {
            None => TextShadowArg::Default,
            Some(Value::Num(n)) => TextShadowArg::Opacity(*n),
            Some(Value::Tree(tree)) => {
                TextShadowArg::Options(TextShadowOptions::from_tree(tree))
            }
            Some(_) => TextShadowArg::Default,
        };
        apply_text_shadow(&arg)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_default_shadow() {
        let c = chain().shadow(true);
        assert_eq!(
            c.tree(),
            &tree! { "boxShadow" => "0px 4px 4px 0px rgba(0, 0, 0, 0.25)" }
        );
    }

    #[test]
    fn test_shadow_off() {
        let c = chain().shadow(false);
        assert_eq!(c.tree(), &tree! { "boxShadow" => "none" });
    }

    #[test]
    fn test_opacity_shadow_clamps() {
        let c = chain().shadow(0.5);
        assert_eq!(
            c.tree()["boxShadow"],
            Value::from("0px 4px 4px 0px rgba(0, 0, 0, 0.5)")
        );
        let c = chain().shadow(7.0);
        assert_eq!(
            c.tree()["boxShadow"],
            Value::from("0px 4px 4px 0px rgba(0, 0, 0, 1)")
        );
    }

    #[test]
    fn test_custom_options_merge_over_defaults() {
        let c = chain().shadow(ShadowOptions {
            y: 8.into(),
            inset: true,
            ..ShadowOptions::default()
        });
        assert_eq!(
            c.tree()["boxShadow"],
            Value::from("inset 0px 8px 4px 0px rgba(0, 0, 0, 0.25)")
        );
    }

    #[test]
    fn test_default_text_shadow() {
        let c = chain().text_shadow(TextShadowOptions::default());
        assert_eq!(
            c.tree(),
            &tree! { "textShadow" => "1px 1px 2px rgba(0, 0, 0, 0.25)" }
        );
    }

    #[test]
    fn test_text_shadow_without_blur() {
        let c = chain().text_shadow(TextShadowOptions {
            blur: None,
            color: "red".to_string(),
            ..TextShadowOptions::default()
        });
        assert_eq!(c.tree()["textShadow"], Value::from("1px 1px red"));
    }

    #[test]
    fn test_dynamic_shadow_zero_means_off() {
        let c = chain().op("shadow", &[Value::from(0)]).unwrap();
        assert_eq!(c.tree()["boxShadow"], Value::from("none"));
    }
}
