//! Cursor styles, including image cursors with fallbacks.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

/// Standard cursor keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Auto,
    Default,
    Pointer,
    Wait,
    Text,
    Move,
    Help,
    NotAllowed,
    None,
    ContextMenu,
    Progress,
    Cell,
    Crosshair,
    VerticalText,
    Alias,
    Copy,
    NoDrop,
    Grab,
    Grabbing,
    AllScroll,
    ColResize,
    RowResize,
    NResize,
    EResize,
    SResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    ZoomIn,
    ZoomOut,
}

impl Cursor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Wait => "wait",
            Self::Text => "text",
            Self::Move => "move",
            Self::Help => "help",
            Self::NotAllowed => "not-allowed",
            Self::None => "none",
            Self::ContextMenu => "context-menu",
            Self::Progress => "progress",
            Self::Cell => "cell",
            Self::Crosshair => "crosshair",
            Self::VerticalText => "vertical-text",
            Self::Alias => "alias",
            Self::Copy => "copy",
            Self::NoDrop => "no-drop",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::AllScroll => "all-scroll",
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
            Self::NResize => "n-resize",
            Self::EResize => "e-resize",
            Self::SResize => "s-resize",
            Self::WResize => "w-resize",
            Self::NeResize => "ne-resize",
            Self::NwResize => "nw-resize",
            Self::SeResize => "se-resize",
            Self::SwResize => "sw-resize",
            Self::EwResize => "ew-resize",
            Self::NsResize => "ns-resize",
            Self::NeswResize => "nesw-resize",
            Self::NwseResize => "nwse-resize",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CursorOptions {
    /// Keyword, also used as the fallback after an image.
    pub cursor: Option<String>,
    /// A complete image value (`url(...)`), used verbatim.
    pub src: Option<String>,
    /// An image path, wrapped in `url(...)`.
    pub url: Option<String>,
}

/// A cursor argument: a keyword or image options.
#[derive(Debug, Clone)]
pub enum CursorArg {
    Keyword(String),
    Options(CursorOptions),
}

impl From<Cursor> for CursorArg {
    fn from(cursor: Cursor) -> Self {
        CursorArg::Keyword(cursor.as_str().to_string())
    }
}

impl From<&str> for CursorArg {
    fn from(keyword: &str) -> Self {
        CursorArg::Keyword(keyword.to_string())
    }
}

impl From<CursorOptions> for CursorArg {
    fn from(options: CursorOptions) -> Self {
        CursorArg::Options(options)
    }
}

impl Chain {
    /// Sets the cursor. Image cursors get the keyword (or `auto`) as a
    /// fallback; empty options fall back to `default`.
    pub fn cursor(self, arg: impl Into<CursorArg>) -> Self {
        self.update(apply_cursor(&arg.into()))
    }
}

fn apply_cursor(arg: &CursorArg) -> StyleTree {
    let options = match arg {
        CursorArg::Keyword(keyword) => {
            return crate::tree! { "cursor" => keyword.as_str() };
        }
        CursorArg::Options(options) => options,
    };

    let src = options
        .src
        .clone()
        .or_else(|| options.url.as_ref().map(|url| format!("url({url})")));

    let value = match (src, &options.cursor) {
        (Some(src), Some(cursor)) => format!("{src}, {cursor}"),
        (Some(src), None) => format!("{src}, auto"),
        (None, Some(cursor)) => cursor.clone(),
        (None, None) => Cursor::Default.as_str().to_string(),
    };
    crate::tree! { "cursor" => value }
}

pub(crate) fn register(registry: &mut Registry) {
    registry.add("cursor", |_ctx, args| {
        let arg = match super::arg(args, 0) {
            Some(Value::Str(keyword)) => CursorArg::Keyword(keyword.clone()),
            Some(Value::Tree(tree)) => CursorArg::Options(CursorOptions {
                cursor: super::str_field(tree, "cursor"),
                src: super::str_field(tree, "src"),
                url: super::str_field(tree, "url"),
            }),
            _ => CursorArg::Options(CursorOptions::default()),
        };
        apply_cursor(&arg)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;
    use crate::tree;

    #[test]
    fn test_keyword() {
        let c = chain().cursor(Cursor::Pointer);
        assert_eq!(c.tree(), &tree! { "cursor" => "pointer" });
    }

    #[test]
    fn test_url_with_fallback() {
        let c = chain().cursor(CursorOptions {
            url: Some("grab.png".to_string()),
            cursor: Some(Cursor::Pointer.as_str().to_string()),
            ..CursorOptions::default()
        });
        assert_eq!(c.tree()["cursor"], Value::from("url(grab.png), pointer"));
    }

    #[test]
    fn test_url_without_fallback_gets_auto() {
        let c = chain().cursor(CursorOptions {
            url: Some("grab.png".to_string()),
            ..CursorOptions::default()
        });
        assert_eq!(c.tree()["cursor"], Value::from("url(grab.png), auto"));
    }

    #[test]
    fn test_empty_options_default() {
        let c = chain().cursor(CursorOptions::default());
        assert_eq!(c.tree()["cursor"], Value::from("default"));
    }

    #[test]
    fn test_dynamic_keyword() {
        let c = chain().op("cursor", &[Value::from("grab")]).unwrap();
        assert_eq!(c.tree()["cursor"], Value::from("grab"));
    }
}
