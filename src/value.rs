//! Core value and tree types for accumulated style state.
//!
//! A [`StyleTree`] is an insertion-ordered mapping from style property
//! names to [`Value`]s. Re-inserting an existing key overwrites its value
//! without moving it, which gives the same last-write-wins semantics as a
//! JavaScript object spread. Nested trees model inline pseudo-selector
//! subtrees (`::selection`, `&::placeholder`) and compiled selector and
//! variant payloads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered style property mapping.
pub type StyleTree = IndexMap<String, Value>;

/// A single style value: a string, a number, a boolean, or a nested tree.
///
/// Serializes untagged, so a compiled tree round-trips as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
    Tree(StyleTree),
}

impl Value {
    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested tree if this is a tree value.
    pub fn as_tree(&self) -> Option<&StyleTree> {
        match self {
            Value::Tree(t) => Some(t),
            _ => None,
        }
    }

    /// Renders the value as it would appear inside a composed CSS string.
    ///
    /// Integral numbers print without a fractional part (`24`, not `24.0`).
    /// Nested trees have no string form and render empty.
    pub fn css_text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => format_num(*n),
            Value::Bool(b) => b.to_string(),
            Value::Tree(_) => String::new(),
        }
    }

    /// Renders the value as a variant discriminant key.
    pub fn key_text(&self) -> String {
        self.css_text()
    }
}

/// Converts a value to a pixel string: numbers get a `px` suffix, strings
/// pass through verbatim.
///
/// # Example
///
/// ```rust
/// use stylechain::{to_px, Value};
///
/// assert_eq!(to_px(&Value::from(5)), "5px");
/// assert_eq!(to_px(&Value::from("5em")), "5em");
/// ```
pub fn to_px(value: &Value) -> String {
    match value {
        Value::Num(n) => format!("{}px", format_num(*n)),
        other => other.css_text(),
    }
}

fn format_num(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Merges `updates` into `tree`, later keys winning.
pub(crate) fn merge(tree: &mut StyleTree, updates: StyleTree) {
    for (key, value) in updates {
        tree.insert(key, value);
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Num(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<StyleTree> for Value {
    fn from(tree: StyleTree) -> Self {
        Value::Tree(tree)
    }
}

/// Builds a [`StyleTree`] from `key => value` pairs.
///
/// # Example
///
/// ```rust
/// use stylechain::tree;
///
/// let t = tree! { "color" => "red", "fontSize" => 14 };
/// assert_eq!(t["color"].as_str(), Some("red"));
/// ```
#[macro_export]
macro_rules! tree {
    () => { $crate::StyleTree::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut tree = $crate::StyleTree::new();
        $( tree.insert(($key).to_string(), $crate::Value::from($value)); )+
        tree
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut tree = tree! { "a" => 1, "b" => 2 };
        tree.insert("a".to_string(), Value::from(3));

        let keys: Vec<&str> = tree.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(tree["a"], Value::Num(3.0));
    }

    #[test]
    fn test_to_px() {
        assert_eq!(to_px(&Value::from(0)), "0px");
        assert_eq!(to_px(&Value::from(4.5)), "4.5px");
        assert_eq!(to_px(&Value::from("50%")), "50%");
    }

    #[test]
    fn test_css_text_trims_integral_floats() {
        assert_eq!(Value::from(24.0).css_text(), "24");
        assert_eq!(Value::from(0.5).css_text(), "0.5");
        assert_eq!(Value::from("auto").css_text(), "auto");
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut base = tree! { "a" => 1 };
        merge(&mut base, tree! { "a" => 2, "b" => 3 });
        assert_eq!(base, tree! { "a" => 2, "b" => 3 });
    }

    #[test]
    fn test_serialize_untagged() {
        let t = tree! { "width" => 100, "display" => "flex" };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["width"], 100.0);
        assert_eq!(json["display"], "flex");
    }
}
