//! Grid containers.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{merge, StyleTree, Value};

use super::align::{apply_grid_align, AlignArg};

#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    pub gap: Option<Value>,
    pub column_gap: Option<Value>,
    pub row_gap: Option<Value>,
    pub auto_flow: Option<String>,
    pub auto_columns: Option<String>,
    pub auto_rows: Option<String>,
    pub columns: Option<GridTemplate>,
    pub rows: Option<GridTemplate>,
    pub template_areas: Option<String>,
    pub align_content: Option<String>,
    pub justify_content: Option<String>,
    pub align_items: Option<String>,
    pub justify_items: Option<String>,
    pub align: Option<AlignArg>,
}

impl GridOptions {
    pub(crate) fn from_tree(tree: &StyleTree) -> Self {
        Self {
            gap: tree.get("gap").cloned(),
            column_gap: tree.get("columnGap").cloned(),
            row_gap: tree.get("rowGap").cloned(),
            auto_flow: super::str_field(tree, "autoFlow"),
            auto_columns: super::str_field(tree, "autoColumns"),
            auto_rows: super::str_field(tree, "autoRows"),
            columns: tree.get("columns").map(GridTemplate::from_value),
            rows: tree.get("rows").map(GridTemplate::from_value),
            template_areas: super::str_field(tree, "templateAreas"),
            align_content: super::str_field(tree, "alignContent"),
            justify_content: super::str_field(tree, "justifyContent"),
            align_items: super::str_field(tree, "alignItems"),
            justify_items: super::str_field(tree, "justifyItems"),
            align: tree.get("align").map(AlignArg::from_value),
        }
    }
}

/// A grid track template: a track count expands to `repeat(n, 1fr)`,
/// anything else is used verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum GridTemplate {
    Count(u32),
    Template(String),
}

impl GridTemplate {
    fn resolve(&self) -> String {
        match self {
            GridTemplate::Count(n) => format!("repeat({n}, 1fr)"),
            GridTemplate::Template(t) => t.clone(),
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Num(n) => GridTemplate::Count(*n as u32),
            other => GridTemplate::Template(other.css_text()),
        }
    }
}

impl From<u32> for GridTemplate {
    fn from(n: u32) -> Self {
        GridTemplate::Count(n)
    }
}

impl From<i32> for GridTemplate {
    fn from(n: i32) -> Self {
        GridTemplate::Count(n.max(0) as u32)
    }
}

impl From<&str> for GridTemplate {
    fn from(template: &str) -> Self {
        GridTemplate::Template(template.to_string())
    }
}

impl From<String> for GridTemplate {
    fn from(template: String) -> Self {
        GridTemplate::Template(template)
    }
}

impl Chain {
    /// Makes this a grid container (`display: grid` always) and applies
    /// the given options.
    pub fn grid(self, options: GridOptions) -> Self {
        self.update(apply_grid(&options))
    }

    /// Sets the column template; a number becomes `repeat(n, 1fr)`.
    pub fn columns(self, template: impl Into<GridTemplate>) -> Self {
        self.columns_with(template, GridOptions::default())
    }

    pub fn columns_with(self, template: impl Into<GridTemplate>, mut options: GridOptions) -> Self {
        options.columns = Some(template.into());
        self.grid(options)
    }

    /// Sets the row template; a number becomes `repeat(n, 1fr)`.
    pub fn rows(self, template: impl Into<GridTemplate>) -> Self {
        self.rows_with(template, GridOptions::default())
    }

    pub fn rows_with(self, template: impl Into<GridTemplate>, mut options: GridOptions) -> Self {
        options.rows = Some(template.into());
        self.grid(options)
    }
}

pub(crate) fn apply_grid(options: &GridOptions) -> StyleTree {
    let mut out = crate::tree! { "display" => "grid" };
    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            out.insert(key.to_string(), value);
        }
    };

    put("gap", options.gap.clone());
    put("columnGap", options.column_gap.clone());
    put("rowGap", options.row_gap.clone());
    put("gridAutoFlow", options.auto_flow.clone().map(Value::from));
    put(
        "gridAutoColumns",
        options.auto_columns.clone().map(Value::from),
    );
    put("gridAutoRows", options.auto_rows.clone().map(Value::from));
    put(
        "gridTemplateColumns",
        options.columns.as_ref().map(|t| Value::from(t.resolve())),
    );
    put(
        "gridTemplateRows",
        options.rows.as_ref().map(|t| Value::from(t.resolve())),
    );
    put(
        "gridTemplateAreas",
        options.template_areas.clone().map(Value::from),
    );
    put(
        "alignContent",
        options.align_content.clone().map(Value::from),
    );
    put(
        "justifyContent",
        options.justify_content.clone().map(Value::from),
    );
    put("alignItems", options.align_items.clone().map(Value::from));
    put(
        "justifyItems",
        options.justify_items.clone().map(Value::from),
    );

    if let Some(align) = &options.align {
        merge(&mut out, apply_grid_align(align));
    }

    out
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("grid", |_ctx, args| {
        let options = super::tree_arg(args, 0)
            .map(GridOptions::from_tree)
            .unwrap_or_default();
        apply_grid(&options)
    });
    registry.add("columns", |_ctx, args| template_op(args, true));
    registry.add("rows", |_ctx, args| template_op(args, false));
}

fn template_op(args: &[Value], columns: bool) -> StyleTree {
    let Some(template) = super::arg(args, 0) else {
        return StyleTree::new();
    };
    let mut options = super::tree_arg(args, 1)
        .map(GridOptions::from_tree)
        .unwrap_or_default();
    if columns {
        options.columns = Some(GridTemplate::from_value(template));
    } else {
        options.rows = Some(GridTemplate::from_value(template));
    }
    apply_grid(&options)
}
