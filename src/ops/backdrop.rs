//! Backdrop filters.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{to_px, StyleTree, Value};

#[derive(Debug, Clone)]
pub struct BackdropOptions {
    /// Numeric blur is read as pixels.
    pub blur: Value,
    pub saturate: Value,
    pub contrast: Value,
    pub brightness: Value,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            blur: 20.into(),
            saturate: "190%".into(),
            contrast: "70%".into(),
            brightness: "80%".into(),
        }
    }
}

impl BackdropOptions {
    fn from_tree(tree: &StyleTree) -> Self {
        let defaults = Self::default();
        Self {
            blur: tree.get("blur").cloned().unwrap_or(defaults.blur),
            saturate: tree.get("saturate").cloned().unwrap_or(defaults.saturate),
            contrast: tree.get("contrast").cloned().unwrap_or(defaults.contrast),
            brightness: tree
                .get("brightness")
                .cloned()
                .unwrap_or(defaults.brightness),
        }
    }
}

impl Chain {
    /// Applies the stock frosted-glass backdrop filter.
    pub fn backdrop(self) -> Self {
        self.update(apply_backdrop(&BackdropOptions::default()))
    }

    /// Backdrop filter with custom components merged over the defaults.
    pub fn backdrop_with(self, options: BackdropOptions) -> Self {
        self.update(apply_backdrop(&options))
    }
}

fn apply_backdrop(options: &BackdropOptions) -> StyleTree {
    let value = format!(
        "blur({}) saturate({}) contrast({}) brightness({})",
        to_px(&options.blur),
        options.saturate.css_text(),
        options.contrast.css_text(),
        options.brightness.css_text(),
    );
    crate::tree! { "backdropFilter" => value }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("backdrop", |_ctx, args| {
        let options = super::tree_arg(args, 0)
            .map(BackdropOptions::from_tree)
            .unwrap_or_default();
        apply_backdrop(&options)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_defaults() {
        let c = chain().backdrop();
        assert_eq!(
            c.tree(),
            &tree! {
                "backdropFilter" => "blur(20px) saturate(190%) contrast(70%) brightness(80%)"
            }
        );
    }

    #[test]
    fn test_custom_components_merge_over_defaults() {
        let c = chain().backdrop_with(BackdropOptions {
            blur: 10.into(),
            ..BackdropOptions::default()
        });
        assert_eq!(
            c.tree()["backdropFilter"],
            Value::from("blur(10px) saturate(190%) contrast(70%) brightness(80%)")
        );
    }

    #[test]
    fn test_dynamic_backdrop() {
        let c = chain()
            .op("backdrop", &[Value::Tree(tree! { "saturate" => "120%" })])
            .unwrap();
        assert_eq!(
            c.tree()["backdropFilter"],
            Value::from("blur(20px) saturate(120%) contrast(70%) brightness(80%)")
        );
    }
}
