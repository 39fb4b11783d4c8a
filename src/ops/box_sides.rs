//! Shared box-side and corner expansion helpers.
//!
//! Several families (spacing, border, radius) accept the same shorthand
//! shapes: a uniform scalar, an ordered 4-tuple, or a per-side record with
//! `x`/`y` axis shorthands. This module normalizes those shapes and
//! expands them into discrete longhand properties.

use crate::value::{StyleTree, Value};

const SIDE_NAMES: [&str; 4] = ["top", "right", "bottom", "left"];
const CORNER_NAMES: [&str; 4] = ["topLeft", "topRight", "bottomRight", "bottomLeft"];

/// Per-side values with `x`/`y` axis shorthands.
///
/// `x` expands to left and right, `y` to top and bottom; the axis value
/// overwrites any explicit side it covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sides {
    pub top: Option<Value>,
    pub right: Option<Value>,
    pub bottom: Option<Value>,
    pub left: Option<Value>,
    pub x: Option<Value>,
    pub y: Option<Value>,
}

impl Sides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, value: impl Into<Value>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<Value>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<Value>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<Value>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn x(mut self, value: impl Into<Value>) -> Self {
        self.x = Some(value.into());
        self
    }

    pub fn y(mut self, value: impl Into<Value>) -> Self {
        self.y = Some(value.into());
        self
    }

    /// Expands `x`/`y` into their side pairs, in top/right/bottom/left
    /// order. Axis values overwrite explicit sides.
    pub(crate) fn expanded(&self) -> [Option<Value>; 4] {
        let horizontal = |side: &Option<Value>| self.x.clone().or_else(|| side.clone());
        let vertical = |side: &Option<Value>| self.y.clone().or_else(|| side.clone());
        [
            vertical(&self.top),
            horizontal(&self.right),
            vertical(&self.bottom),
            horizontal(&self.left),
        ]
    }

    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            top: tree.get("top").cloned(),
            right: tree.get("right").cloned(),
            bottom: tree.get("bottom").cloned(),
            left: tree.get("left").cloned(),
            x: tree.get("x").cloned(),
            y: tree.get("y").cloned(),
        }
    }
}

/// The accepted shorthand shapes for side-expanding families.
#[derive(Debug, Clone, PartialEq)]
pub enum SideValues {
    /// One value for the shorthand property itself.
    Uniform(Value),
    /// Ordered values: top, right, bottom, left.
    Ordered(Vec<Value>),
    /// A per-side record.
    Sides(Sides),
}

impl From<i32> for SideValues {
    fn from(n: i32) -> Self {
        SideValues::Uniform(n.into())
    }
}

impl From<f64> for SideValues {
    fn from(n: f64) -> Self {
        SideValues::Uniform(n.into())
    }
}

impl From<&str> for SideValues {
    fn from(s: &str) -> Self {
        SideValues::Uniform(s.into())
    }
}

impl From<String> for SideValues {
    fn from(s: String) -> Self {
        SideValues::Uniform(s.into())
    }
}

impl From<Value> for SideValues {
    fn from(value: Value) -> Self {
        SideValues::Uniform(value)
    }
}

impl<T: Into<Value>> From<[T; 4]> for SideValues {
    fn from(values: [T; 4]) -> Self {
        SideValues::Ordered(values.into_iter().map(Into::into).collect())
    }
}

impl From<Sides> for SideValues {
    fn from(sides: Sides) -> Self {
        SideValues::Sides(sides)
    }
}

/// Per-corner values for radius expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corners {
    pub top_left: Option<Value>,
    pub top_right: Option<Value>,
    pub bottom_right: Option<Value>,
    pub bottom_left: Option<Value>,
}

impl Corners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_left(mut self, value: impl Into<Value>) -> Self {
        self.top_left = Some(value.into());
        self
    }

    pub fn top_right(mut self, value: impl Into<Value>) -> Self {
        self.top_right = Some(value.into());
        self
    }

    pub fn bottom_right(mut self, value: impl Into<Value>) -> Self {
        self.bottom_right = Some(value.into());
        self
    }

    pub fn bottom_left(mut self, value: impl Into<Value>) -> Self {
        self.bottom_left = Some(value.into());
        self
    }

    fn ordered(&self) -> [Option<Value>; 4] {
        [
            self.top_left.clone(),
            self.top_right.clone(),
            self.bottom_right.clone(),
            self.bottom_left.clone(),
        ]
    }

    /// Reads a corner record from a tree, accepting transposed spellings
    /// (`leftTop` for `topLeft` and so on). A transposed key overwrites
    /// the straight spelling when both are present.
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        let pick = |straight: &str, transposed: &str| {
            tree.get(transposed)
                .or_else(|| tree.get(straight))
                .cloned()
        };
        Self {
            top_left: pick("topLeft", "leftTop"),
            top_right: pick("topRight", "rightTop"),
            bottom_right: pick("bottomRight", "rightBottom"),
            bottom_left: pick("bottomLeft", "leftBottom"),
        }
    }
}

/// The accepted shorthand shapes for corner-expanding families.
#[derive(Debug, Clone, PartialEq)]
pub enum CornerValues {
    Uniform(Value),
    /// Ordered values: topLeft, topRight, bottomRight, bottomLeft.
    Ordered(Vec<Value>),
    Corners(Corners),
    /// A per-side record expanded to corners.
    Sides(Sides),
}

impl From<i32> for CornerValues {
    fn from(n: i32) -> Self {
        CornerValues::Uniform(n.into())
    }
}

impl From<f64> for CornerValues {
    fn from(n: f64) -> Self {
        CornerValues::Uniform(n.into())
    }
}

impl From<&str> for CornerValues {
    fn from(s: &str) -> Self {
        CornerValues::Uniform(s.into())
    }
}

impl From<Value> for CornerValues {
    fn from(value: Value) -> Self {
        CornerValues::Uniform(value)
    }
}

impl<T: Into<Value>> From<[T; 4]> for CornerValues {
    fn from(values: [T; 4]) -> Self {
        CornerValues::Ordered(values.into_iter().map(Into::into).collect())
    }
}

impl From<Corners> for CornerValues {
    fn from(corners: Corners) -> Self {
        CornerValues::Corners(corners)
    }
}

impl From<Sides> for CornerValues {
    fn from(sides: Sides) -> Self {
        CornerValues::Sides(sides)
    }
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds `{base}{Side}{suffix}` longhand names, e.g. `borderTopWidth`.
pub(crate) fn property_name(base: &str, side: &str, suffix: &str) -> String {
    format!("{base}{}{suffix}", capitalize(side))
}

/// Expands side-shaped values into longhand properties under `base`.
///
/// A uniform value sets the shorthand `{base}{suffix}` directly; ordered
/// and per-side values set one longhand per defined side. When
/// `override_value` is given it replaces every emitted value (the border
/// family uses this to stamp a single style keyword across all sides).
pub(crate) fn side_props(
    base: &str,
    values: &SideValues,
    suffix: &str,
    override_value: Option<&Value>,
) -> StyleTree {
    let mut result = StyleTree::new();
    let pick = |value: &Value| override_value.unwrap_or(value).clone();

    match values {
        SideValues::Uniform(value) => {
            result.insert(format!("{base}{suffix}"), pick(value));
        }
        SideValues::Ordered(values) => {
            for (side, value) in SIDE_NAMES.iter().zip(values.iter()) {
                result.insert(property_name(base, side, suffix), pick(value));
            }
        }
        SideValues::Sides(sides) => {
            for (side, value) in SIDE_NAMES.iter().zip(sides.expanded().iter()) {
                if let Some(value) = value {
                    result.insert(property_name(base, side, suffix), pick(value));
                }
            }
        }
    }

    result
}

/// Expands corner-shaped values into `{base}{Corner}{suffix}` longhands,
/// or the shorthand for a uniform value.
///
/// Side-shaped input derives each corner from its adjacent sides with the
/// vertical side winning: `topLeft` is `top` when defined, else `left`.
pub(crate) fn corner_props(base: &str, values: &CornerValues, suffix: &str) -> StyleTree {
    let mut result = StyleTree::new();

    let ordered: [Option<Value>; 4] = match values {
        CornerValues::Uniform(value) => {
            result.insert(format!("{base}{suffix}"), value.clone());
            return result;
        }
        CornerValues::Ordered(values) => {
            let mut corners: [Option<Value>; 4] = [None, None, None, None];
            for (slot, value) in corners.iter_mut().zip(values.iter()) {
                *slot = Some(value.clone());
            }
            corners
        }
        CornerValues::Corners(corners) => corners.ordered(),
        CornerValues::Sides(sides) => {
            let or = |a: &Option<Value>, b: &Option<Value>| a.clone().or_else(|| b.clone());
            [
                or(&sides.top, &sides.left),
                or(&sides.top, &sides.right),
                or(&sides.bottom, &sides.right),
                or(&sides.bottom, &sides.left),
            ]
        }
    };

    for (corner, value) in CORNER_NAMES.iter().zip(ordered.iter()) {
        if let Some(value) = value {
            result.insert(property_name(base, corner, suffix), value.clone());
        }
    }

    result
}

/// Parses side-shaped input from a dynamic argument.
pub(crate) fn side_values_from(value: &Value) -> SideValues {
    match value {
        Value::Tree(tree) => SideValues::Sides(Sides::from_tree(tree)),
        other => SideValues::Uniform(other.clone()),
    }
}

/// Parses corner-shaped input from a dynamic argument, distinguishing
/// corner records from side records by their keys.
pub(crate) fn corner_values_from(value: &Value) -> CornerValues {
    match value {
        Value::Tree(tree) => {
            let corner_keys = [
                "topLeft",
                "topRight",
                "bottomRight",
                "bottomLeft",
                "leftTop",
                "rightTop",
                "rightBottom",
                "leftBottom",
            ];
            if corner_keys.iter().any(|key| tree.contains_key(*key)) {
                CornerValues::Corners(Corners::from_tree(tree))
            } else {
                CornerValues::Sides(Sides::from_tree(tree))
            }
        }
        other => CornerValues::Uniform(other.clone()),
    }
}
