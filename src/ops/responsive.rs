//! Media-query selectors.

use crate::chain::{Chain, Payload};
use crate::registry::{OpCtx, Registry};
use crate::value::{to_px, StyleTree, Value};

/// Geometry constraints converted into a media-query condition list.
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    pub min_width: Option<Value>,
    pub max_width: Option<Value>,
    pub min_height: Option<Value>,
    pub max_height: Option<Value>,
    pub orientation: Option<String>,
}

impl MediaQuery {
    pub fn min_width(value: impl Into<Value>) -> Self {
        Self {
            min_width: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn max_width(value: impl Into<Value>) -> Self {
        Self {
            max_width: Some(value.into()),
            ..Self::default()
        }
    }

    fn from_tree(tree: &StyleTree) -> Self {
        Self {
            min_width: tree.get("minWidth").cloned(),
            max_width: tree.get("maxWidth").cloned(),
            min_height: tree.get("minHeight").cloned(),
            max_height: tree.get("maxHeight").cloned(),
            orientation: super::str_field(tree, "orientation"),
        }
    }

    /// Joins the set constraints with `and`; empty when none are set.
    /// Numeric lengths get a `px` suffix.
    fn render(&self) -> String {
        let mut conditions = Vec::new();
        let mut length = |name: &str, value: &Option<Value>| {
            if let Some(value) = value {
                conditions.push(format!("({name}: {})", to_px(value)));
            }
        };
        length("min-width", &self.min_width);
        length("max-width", &self.max_width);
        length("min-height", &self.min_height);
        length("max-height", &self.max_height);
        if let Some(orientation) = &self.orientation {
            conditions.push(format!("(orientation: {orientation})"));
        }
        conditions.join(" and ")
    }
}

impl Chain {
    /// Registers styles under `@media {breakpoint}`. The breakpoint
    /// string is not parsed; token references (`$min-sm`) pass through
    /// for the engine to resolve.
    pub fn media(mut self, breakpoint: &str, payload: impl Into<Payload>) -> Self {
        self.put_selector(&format!("@media {breakpoint}"), payload.into());
        self
    }

    /// Registers styles under a geometry-derived media query. A query
    /// with no constraints registers nothing.
    pub fn geometry(mut self, query: MediaQuery, payload: impl Into<Payload>) -> Self {
        let rendered = query.render();
        if !rendered.is_empty() {
            self.put_selector(&format!("@media {rendered}"), payload.into());
        }
        self
    }

    /// Styles for viewports up to 767px wide.
    pub fn mobile(self, payload: impl Into<Payload>) -> Self {
        self.geometry(MediaQuery::max_width(767), payload)
    }

    /// Styles for viewports at least 768px wide.
    pub fn desktop(self, payload: impl Into<Payload>) -> Self {
        self.geometry(MediaQuery::min_width(768), payload)
    }

    pub fn portrait(self, payload: impl Into<Payload>) -> Self {
        self.orientation("portrait", payload)
    }

    pub fn landscape(self, payload: impl Into<Payload>) -> Self {
        self.orientation("landscape", payload)
    }

    fn orientation(self, orientation: &str, payload: impl Into<Payload>) -> Self {
        self.geometry(
            MediaQuery {
                orientation: Some(orientation.to_string()),
                ..MediaQuery::default()
            },
            payload,
        )
    }
}

fn geometry_op(ctx: &mut OpCtx<'_>, query: &MediaQuery, payload: Payload) -> StyleTree {
    let rendered = query.render();
    if !rendered.is_empty() {
        ctx.select(&format!("@media {rendered}"), payload);
    }
    StyleTree::new()
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("media", |ctx, args| {
        if let Some(breakpoint) = super::str_arg(args, 0) {
            ctx.select(&format!("@media {breakpoint}"), super::payload_arg(args, 1));
        }
        StyleTree::new()
    });
    registry.add("geometry", |ctx, args| {
        let query = super::tree_arg(args, 0)
            .map(MediaQuery::from_tree)
            .unwrap_or_default();
        geometry_op(ctx, &query, super::payload_arg(args, 1))
    });
    registry.add("mobile", |ctx, args| {
        geometry_op(ctx, &MediaQuery::max_width(767), super::payload_arg(args, 0))
    });
    registry.add("desktop", |ctx, args| {
        geometry_op(ctx, &MediaQuery::min_width(768), super::payload_arg(args, 0))
    });
    registry.add("portrait", |ctx, args| {
        let query = MediaQuery {
            orientation: Some("portrait".to_string()),
            ..MediaQuery::default()
        };
        geometry_op(ctx, &query, super::payload_arg(args, 0))
    });
    registry.add("landscape", |ctx, args| {
        let query = MediaQuery {
            orientation: Some("landscape".to_string()),
            ..MediaQuery::default()
        };
        geometry_op(ctx, &query, super::payload_arg(args, 0))
    });
}
