//! CSS transforms.
//!
//! Every function except `transform` itself appends to whatever
//! transform the tree already carries, so chained calls compose:
//! `.rotate(45).scale(2.0)` yields `rotate(45deg) scale(2)`.

use crate::chain::Chain;
use crate::registry::{OpCtx, Registry};
use crate::value::{to_px, StyleTree, Value};

impl Chain {
    /// Replaces the transform with a raw value.
    pub fn transform(self, value: &str) -> Self {
        self.css(crate::tree! { "transform" => value })
    }

    /// Appends a rotation; a numeric angle is read as degrees.
    pub fn rotate(self, angle: impl Into<Value>) -> Self {
        let updates = append(&self.tree, "rotate", &deg(&angle.into()));
        self.update(updates)
    }

    /// Appends a uniform scale.
    pub fn scale(self, factor: f64) -> Self {
        let updates = append(&self.tree, "scale", &Value::Num(factor).css_text());
        self.update(updates)
    }

    /// Appends a per-axis scale.
    pub fn scale_xy(self, x: f64, y: f64) -> Self {
        let args = format!("{}, {}", Value::Num(x).css_text(), Value::Num(y).css_text());
        let updates = append(&self.tree, "scale", &args);
        self.update(updates)
    }

    /// Appends a translation; numeric lengths are read as pixels.
    pub fn translate(self, x: impl Into<Value>) -> Self {
        let updates = append(&self.tree, "translate", &to_px(&x.into()));
        self.update(updates)
    }

    pub fn translate_xy(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        let args = format!("{}, {}", to_px(&x.into()), to_px(&y.into()));
        let updates = append(&self.tree, "translate", &args);
        self.update(updates)
    }

    /// Appends a skew; numeric angles are read as degrees.
    pub fn skew(self, x: impl Into<Value>) -> Self {
        let updates = append(&self.tree, "skew", &deg(&x.into()));
        self.update(updates)
    }

    pub fn skew_xy(self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        let args = format!("{}, {}", deg(&x.into()), deg(&y.into()));
        let updates = append(&self.tree, "skew", &args);
        self.update(updates)
    }

    /// Appends a perspective; numeric distances are read as pixels.
    pub fn perspective(self, distance: impl Into<Value>) -> Self {
        let updates = append(&self.tree, "perspective", &to_px(&distance.into()));
        self.update(updates)
    }
}

fn deg(value: &Value) -> String {
    match value {
        Value::Num(n) => format!("{}deg", Value::Num(*n).css_text()),
        other => other.css_text(),
    }
}

fn append(current: &StyleTree, function: &str, args: &str) -> StyleTree {
    let existing = current
        .get("transform")
        .and_then(Value::as_str)
        .unwrap_or("");
    let value = format!("{existing} {function}({args})");
    crate::tree! { "transform" => value.trim() }
}

fn pair(args: &[Value], unit: fn(&Value) -> String) -> Option<String> {
    let x = super::arg(args, 0)?;
    Some(match super::arg(args, 1) {
        Some(y) => format!("{}, {}", unit(x), unit(y)),
        None => unit(x),
    })
}

fn appending_op(
    ctx: &mut OpCtx<'_>,
    args: &[Value],
    function: &str,
    unit: fn(&Value) -> String,
) -> StyleTree {
    match pair(args, unit) {
        Some(rendered) => append(ctx.tree(), function, &rendered),
        None => StyleTree::new(),
    }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("transform", |_ctx, args| match super::str_arg(args, 0) {
        Some(value) => crate::tree! { "transform" => value },
        None => StyleTree::new(),
    });
    registry.add("rotate", |ctx, args| match super::arg(args, 0) {
        Some(angle) => append(ctx.tree(), "rotate", &deg(angle)),
        None => StyleTree::new(),
    });
    registry.add("scale", |ctx, args| {
        appending_op(ctx, args, "scale", |v| v.css_text())
    });
    registry.add("translate", |ctx, args| {
        appending_op(ctx, args, "translate", |v| to_px(v))
    });
    registry.add("skew", |ctx, args| appending_op(ctx, args, "skew", deg));
    registry.add("perspective", |ctx, args| match super::arg(args, 0) {
        Some(distance) => append(ctx.tree(), "perspective", &to_px(distance)),
        None => StyleTree::new(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_rotate_number_is_degrees() {
        let c = chain().rotate(45);
        assert_eq!(c.tree(), &tree! { "transform" => "rotate(45deg)" });
    }

    #[test]
    fn test_rotate_string_verbatim() {
        let c = chain().rotate("0.5turn");
        assert_eq!(c.tree()["transform"], Value::from("rotate(0.5turn)"));
    }

    #[test]
    fn test_functions_compose() {
        let c = chain().rotate(45).scale(2.0).translate_xy(10, 20);
        assert_eq!(
            c.tree()["transform"],
            Value::from("rotate(45deg) scale(2) translate(10px, 20px)")
        );
    }

    #[test]
    fn test_transform_replaces() {
        let c = chain().rotate(45).transform("scale(0.98)");
        assert_eq!(c.tree()["transform"], Value::from("scale(0.98)"));
    }

    #[test]
    fn test_scale_pair() {
        let c = chain().scale_xy(2.0, 0.5);
        assert_eq!(c.tree()["transform"], Value::from("scale(2, 0.5)"));
    }

    #[test]
    fn test_skew_and_perspective_units() {
        let c = chain().skew(10).perspective(1000);
        assert_eq!(
            c.tree()["transform"],
            Value::from("skew(10deg) perspective(1000px)")
        );
    }

    #[test]
    fn test_dynamic_translate_pair() {
        let c = chain()
            .op("translate", &[Value::from(5), Value::from("2em")])
            .unwrap();
        assert_eq!(c.tree()["transform"], Value::from("translate(5px, 2em)"));
    }
}
