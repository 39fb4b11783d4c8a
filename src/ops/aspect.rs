//! Aspect ratio.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

impl Chain {
    /// Sets the aspect ratio, rendered as a string (`aspect(1.5)` yields
    /// `aspectRatio: "1.5"`).
    pub fn aspect(self, ratio: f64) -> Self {
        self.update(apply_aspect(ratio))
    }
}

fn apply_aspect(ratio: f64) -> StyleTree {
    crate::tree! { "aspectRatio" => Value::Num(ratio).css_text() }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("aspect", |_ctx, args| match super::num_arg(args, 0) {
        Some(ratio) => apply_aspect(ratio),
        None => StyleTree::new(),
    });
}

#[cfg(test)]
mod tests {
    use crate::chain::testutil::chain;
    use crate::value::Value;

    #[test]
    fn test_aspect_renders_as_string() {
        let c = chain().aspect(1.5);
        assert_eq!(c.tree()["aspectRatio"], Value::from("1.5"));

        let c = chain().aspect(2.0);
        assert_eq!(c.tree()["aspectRatio"], Value::from("2"));
    }
}
