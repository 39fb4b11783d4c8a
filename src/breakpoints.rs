//! The built-in media-query table.
//!
//! Keys are the names usable as `$`-prefixed breakpoint tokens in
//! [`Chain::media`](crate::Chain::media); the engine resolves them
//! against the merged table handed over at [`init`](crate::init) time.

use indexmap::IndexMap;

/// Built-in breakpoints: a min/max width ladder, device aliases, and
/// orientation/resolution queries.
pub const BREAKPOINTS: &[(&str, &str)] = &[
    ("max-2xs", "(max-width: 359px)"),
    ("min-2xs", "(min-width: 360px)"),
    ("max-xs", "(max-width: 479px)"),
    ("min-xs", "(min-width: 480px)"),
    ("max-sm", "(max-width: 639px)"),
    ("min-sm", "(min-width: 640px)"),
    ("max-md", "(max-width: 767px)"),
    ("min-md", "(min-width: 768px)"),
    ("max-lg", "(max-width: 1023px)"),
    ("min-lg", "(min-width: 1024px)"),
    ("max-xl", "(max-width: 1279px)"),
    ("min-xl", "(min-width: 1280px)"),
    ("max-2xl", "(max-width: 1535px)"),
    ("min-2xl", "(min-width: 1536px)"),
    // Device aliases
    ("mobile", "(max-width: 767px)"),
    ("tablet", "(min-width: 768px) and (max-width: 1023px)"),
    ("desktop", "(min-width: 1024px)"),
    // Specific devices
    ("iphone-se", "(max-width: 375px)"),
    ("iphone", "(max-width: 428px)"),
    ("ipad", "(min-width: 768px) and (max-width: 1024px)"),
    ("ipad-pro", "(min-width: 1024px) and (max-width: 1366px)"),
    // Orientation
    ("portrait", "(orientation: portrait)"),
    ("landscape", "(orientation: landscape)"),
    // High-resolution screens
    (
        "retina",
        "(-webkit-min-device-pixel-ratio: 2), (min-resolution: 192dpi)",
    ),
];

/// Builds the media table handed to the engine: the built-ins with
/// `extra` merged on top, custom entries overriding built-ins of the
/// same name.
pub(crate) fn media_table(extra: &IndexMap<String, String>) -> IndexMap<String, String> {
    let mut table: IndexMap<String, String> = BREAKPOINTS
        .iter()
        .map(|(name, query)| (name.to_string(), query.to_string()))
        .collect();
    for (name, query) in extra {
        table.insert(name.clone(), query.clone());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_complete() {
        for size in ["2xs", "xs", "sm", "md", "lg", "xl", "2xl"] {
            assert!(BREAKPOINTS.iter().any(|(name, _)| *name == format!("min-{size}")));
            assert!(BREAKPOINTS.iter().any(|(name, _)| *name == format!("max-{size}")));
        }
    }

    #[test]
    fn test_custom_entries_override_builtins() {
        let mut extra = IndexMap::new();
        extra.insert("mobile".to_string(), "(max-width: 600px)".to_string());
        extra.insert("watch".to_string(), "(max-width: 200px)".to_string());

        let table = media_table(&extra);
        assert_eq!(table["mobile"], "(max-width: 600px)");
        assert_eq!(table["watch"], "(max-width: 200px)");
        assert_eq!(table["desktop"], "(min-width: 1024px)");
    }
}
