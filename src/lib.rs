//! A fluent style builder that compiles chained declarations into
//! CSS-in-JS style trees.
//!
//! Styles are accumulated on a [`Chain`]: each operation merges a
//! partial update into a flat property tree, registers a nested
//! selector subtree, or appends a variant alternative. [`Chain::compile`]
//! flattens all of it into a single nested style object which
//! [`Chain::element`] hands to a pluggable [`StyleEngine`] for class
//! generation and stylesheet injection.
//!
//! ```rust,ignore
//! let ui = stylechain::init(InitOptions::default(), |media, tokens| {
//!     MyEngine::new(media, tokens)
//! });
//!
//! let card = ui
//!     .view("section")
//!     .vstack()
//!     .bg("$surface")
//!     .padding(16)
//!     .rounded()
//!     .shadow(true)
//!     .on_hover(tree! { "boxShadow" => "none" })
//!     .element();
//! ```
//!
//! Every typed operation is also reachable by name through
//! [`Chain::op`] for data-driven styling; see
//! [`operation_names`](registry::operation_names) for the registry
//! contents.

pub mod breakpoints;
mod chain;
mod engine;
mod error;
pub mod ops;
pub mod registry;
mod value;

use std::rc::Rc;

use indexmap::IndexMap;

pub use chain::{Chain, Payload, SelectorTable, VariantTable};
pub use engine::{ComponentDescriptor, StyleEngine};
pub use error::OpError;
pub use ops::accessibility::{SelectionArg, SelectionOptions, UserSelect};
pub use ops::align::{AlignArg, StackAlignment};
pub use ops::backdrop::BackdropOptions;
pub use ops::border::{BorderArg, BorderOptions};
pub use ops::box_sides::{CornerValues, Corners, SideValues, Sides};
pub use ops::boxes::{Appearance, BoxOptions};
pub use ops::colors::{BackgroundOptions, BgArg, ColorOptions};
pub use ops::cursor::{Cursor, CursorArg, CursorOptions};
pub use ops::flex::FlexOptions;
pub use ops::grid::{GridOptions, GridTemplate};
pub use ops::outline::{OutlineArg, OutlineOptions};
pub use ops::responsive::MediaQuery;
pub use ops::scroll::{OverflowArg, ScrollArg, ScrollbarOptions};
pub use ops::selectors::AttrMatch;
pub use ops::shadow::{ShadowArg, ShadowOptions, TextShadowArg, TextShadowOptions};
pub use ops::size::SizeOptions;
pub use ops::spacing::SpacingOptions;
pub use ops::text::{TextArg, TextOptions};
pub use value::{to_px, StyleTree, Value};

/// Configuration for [`init`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Design tokens handed to the engine (colors, space, fonts, ...).
    pub tokens: StyleTree,
    /// Extra breakpoints merged over the
    /// [built-ins](breakpoints::BREAKPOINTS); same-name entries override.
    pub breakpoints: IndexMap<String, String>,
}

/// Initializes the library: merges the media table, builds the engine,
/// and returns the [`Styler`] factory builders are created from.
pub fn init<E, F>(options: InitOptions, make_engine: F) -> Styler
where
    E: StyleEngine + 'static,
    F: FnOnce(&IndexMap<String, String>, &StyleTree) -> E,
{
    let media = breakpoints::media_table(&options.breakpoints);
    let engine = make_engine(&media, &options.tokens);
    Styler {
        engine: Rc::new(engine),
    }
}

/// The factory handle created by [`init`]; every builder it hands out
/// shares the configured engine.
#[derive(Clone)]
pub struct Styler {
    engine: Rc<dyn StyleEngine>,
}

impl Styler {
    /// A builder bound to an element tag.
    pub fn view(&self, tag: &str) -> Chain {
        Chain::new(self.engine.clone(), Some(tag.to_string()))
    }

    /// An unbound builder; [`Chain::element`] defaults it to `div`.
    pub fn style(&self) -> Chain {
        Chain::new(self.engine.clone(), None)
    }

    /// A fixed-size frame: a flex column with content centered on both
    /// axes.
    pub fn frame(&self, width: impl Into<Value>, height: impl Into<Value>) -> Chain {
        self.frame_with(BoxOptions {
            width: Some(width.into()),
            height: Some(height.into()),
            ..BoxOptions::default()
        })
    }

    /// A frame from box options, centering content unless the options
    /// carry their own alignment.
    pub fn frame_with(&self, options: BoxOptions) -> Chain {
        let align = options.align.is_none();
        let chain = self.view("div").vstack().boxed(options);
        if align {
            chain.align("center")
        } else {
            chain
        }
    }

    /// A vertical stack (flex column).
    pub fn vstack(&self) -> Chain {
        self.view("div").vstack()
    }

    /// A horizontal stack (flex row).
    pub fn hstack(&self) -> Chain {
        self.view("div").hstack()
    }

    /// A scrollable container; defaults to both axes.
    pub fn scroll_view(&self, axes: impl Into<ScrollArg>) -> Chain {
        self.view("div").scroll(axes)
    }

    /// A grid container.
    pub fn grid(&self, options: GridOptions) -> Chain {
        self.view("div").grid(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::StubEngine;

    fn styler() -> Styler {
        init(InitOptions::default(), |_media, _tokens| StubEngine)
    }

    #[test]
    fn test_init_merges_breakpoints() {
        let mut breakpoints = IndexMap::new();
        breakpoints.insert("watch".to_string(), "(max-width: 200px)".to_string());

        let mut seen = None;
        init(
            InitOptions {
                breakpoints,
                ..InitOptions::default()
            },
            |media, _tokens| {
                seen = Some(media.clone());
                StubEngine
            },
        );

        let media = seen.unwrap();
        assert_eq!(media["watch"], "(max-width: 200px)");
        assert_eq!(media["min-sm"], "(min-width: 640px)");
    }

    #[test]
    fn test_view_binds_tag() {
        assert_eq!(styler().view("button").element().tag, "button");
        assert_eq!(styler().style().element().tag, "div");
    }

    #[test]
    fn test_frame_centers_by_default() {
        let frame = styler().frame(200, 100);
        assert_eq!(frame.tree()["display"], Value::from("flex"));
        assert_eq!(frame.tree()["flexDirection"], Value::from("column"));
        assert_eq!(frame.tree()["width"], Value::from(200));
        assert_eq!(frame.tree()["height"], Value::from(100));
        assert_eq!(frame.tree()["justifyContent"], Value::from("center"));
        assert_eq!(frame.tree()["alignItems"], Value::from("center"));
    }

    #[test]
    fn test_frame_with_explicit_align() {
        let frame = styler().frame_with(BoxOptions {
            align: Some(AlignArg::from("bottom")),
            ..BoxOptions::default()
        });
        // column: vertical keyword drives justifyContent
        assert_eq!(frame.tree()["justifyContent"], Value::from("flex-end"));
    }

    #[test]
    fn test_stack_factories() {
        assert_eq!(
            styler().vstack().tree()["flexDirection"],
            Value::from("column")
        );
        assert_eq!(
            styler().hstack().tree()["flexDirection"],
            Value::from("row")
        );
    }

    #[test]
    fn test_scroll_view_defaults() {
        let sv = styler().scroll_view(ScrollArg::both());
        assert_eq!(sv.tree()["overflowX"], Value::from("scroll"));
        assert_eq!(sv.tree()["overflowY"], Value::from("scroll"));
    }

    #[test]
    fn test_grid_factory() {
        let grid = styler().grid(GridOptions {
            columns: Some(3.into()),
            ..GridOptions::default()
        });
        assert_eq!(grid.tree()["display"], Value::from("grid"));
        assert_eq!(
            grid.tree()["gridTemplateColumns"],
            Value::from("repeat(3, 1fr)")
        );
    }
}
