//! End-to-end builder tests against a stub engine.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use proptest::prelude::*;

use stylechain::{
    init, tree, BorderOptions, BoxOptions, Chain, ComponentDescriptor, FlexOptions, GridOptions,
    InitOptions, ScrollArg, ShadowOptions, StyleEngine, StyleTree, Styler, Value,
};

/// Records every tree handed over by `element`, so tests can inspect what
/// the engine actually received.
#[derive(Default)]
struct RecordingEngine {
    seen: RefCell<Vec<(String, StyleTree)>>,
}

impl StyleEngine for RecordingEngine {
    fn styled(&self, tag: &str, style: &StyleTree) -> ComponentDescriptor {
        self.seen.borrow_mut().push((tag.to_string(), style.clone()));
        ComponentDescriptor {
            tag: tag.to_string(),
            class_name: format!("sc-{}", self.seen.borrow().len()),
        }
    }
}

/// Shared handle on a [`RecordingEngine`]; the orphan rule forbids
/// implementing `StyleEngine` for `Rc<RecordingEngine>` directly.
struct SharedEngine(Rc<RecordingEngine>);

impl StyleEngine for SharedEngine {
    fn styled(&self, tag: &str, style: &StyleTree) -> ComponentDescriptor {
        self.0.styled(tag, style)
    }
}

fn recording_styler() -> (Styler, Rc<RecordingEngine>) {
    let engine = Rc::new(RecordingEngine::default());
    let handle = engine.clone();
    let styler = init(InitOptions::default(), move |_media, _tokens| {
        SharedEngine(handle)
    });
    (styler, engine)
}

fn styler() -> Styler {
    recording_styler().0
}

#[test]
fn test_card_scenario() {
    let (ui, engine) = recording_styler();

    let card = ui
        .view("section")
        .vstack()
        .bg("$surface")
        .padding(16)
        .rounded()
        .shadow(true)
        .on_hover(tree! { "boxShadow" => "none" })
        .element();
    assert_eq!(card.tag, "section");

    let seen = engine.seen.borrow();
    let (tag, style) = &seen[0];
    assert_eq!(tag, "section");
    assert_eq!(style["display"], Value::from("flex"));
    assert_eq!(style["flexDirection"], Value::from("column"));
    assert_eq!(style["background"], Value::from("$surface"));
    assert_eq!(style["padding"], Value::from(16));
    assert_eq!(style["borderRadius"], Value::from("$sm"));
    assert_eq!(
        style["boxShadow"],
        Value::from("0px 4px 4px 0px rgba(0, 0, 0, 0.25)")
    );
    assert_eq!(
        style["&:hover"],
        Value::Tree(tree! { "boxShadow" => "none" })
    );
    assert_eq!(style["variants"], Value::Tree(StyleTree::new()));
}

#[test]
fn test_element_css_overrides_compiled_tree() {
    let (ui, engine) = recording_styler();

    ui.style()
        .bg("red")
        .element_css(tree! { "background" => "blue", "margin" => 4 });

    let seen = engine.seen.borrow();
    let (_, style) = &seen[0];
    assert_eq!(style["background"], Value::from("blue"));
    assert_eq!(style["margin"], Value::from(4));
}

#[test]
fn test_variants_compile_into_named_tables() {
    let button = styler()
        .view("button")
        .padding([8, 16, 8, 16])
        .variant("intent", "danger", tree! { "background" => "crimson" })
        .variant("intent", "primary", tree! { "background" => "royalblue" })
        .variant("disabled", true, tree! { "opacity" => 0.5 });

    let compiled = button.compile();
    let variants = compiled["variants"].as_tree().unwrap();
    let intent = variants["intent"].as_tree().unwrap();
    assert_eq!(
        intent.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["danger", "primary"]
    );
    assert_eq!(
        variants["disabled"].as_tree().unwrap()["true"]
            .as_tree()
            .unwrap()["opacity"],
        Value::Num(0.5)
    );
}

#[test]
fn test_nested_chain_as_selector_payload() {
    let ui = styler();
    let focus_ring = ui.style().outline(2).bg("gold");
    let compiled = ui.view("a").on_focus(focus_ring).compile();

    let focus = compiled["&:focus"].as_tree().unwrap();
    assert_eq!(focus["outlineWidth"], Value::from(2));
    assert_eq!(focus["background"], Value::from("gold"));
    // nested compiles carry their own variants table
    assert_eq!(focus["variants"], Value::Tree(StyleTree::new()));
}

#[test]
fn test_typed_and_dynamic_dispatch_agree() {
    let ui = styler();

    let cases: Vec<(Chain, Chain)> = vec![
        (
            ui.style().padding(12),
            ui.style().op("padding", &[12.into()]).unwrap(),
        ),
        (
            ui.style().bg("teal"),
            ui.style().op("bg", &["teal".into()]).unwrap(),
        ),
        (
            ui.style().rotate(45),
            ui.style().op("rotate", &[45.into()]).unwrap(),
        ),
        (
            ui.style().border(BorderOptions {
                color: Some("gray".to_string()),
                style: Some("dashed".to_string()),
                ..BorderOptions::default()
            }),
            ui.style()
                .op(
                    "border",
                    &[Value::Tree(tree! { "color" => "gray", "style" => "dashed" })],
                )
                .unwrap(),
        ),
        (
            ui.style().shadow(ShadowOptions::default()),
            ui.style().op("shadow", &[Value::Bool(true)]).unwrap(),
        ),
        (
            ui.style().mobile(tree! { "fontSize" => 14 }),
            ui.style()
                .op("mobile", &[Value::Tree(tree! { "fontSize" => 14 })])
                .unwrap(),
        ),
    ];

    for (typed, dynamic) in cases {
        assert_eq!(typed.compile(), dynamic.compile());
    }
}

#[test]
fn test_stroke_aliases_border() {
    let ui = styler();
    let border = ui.style().op("border", &[2.into()]).unwrap();
    let stroke = ui.style().op("stroke", &[2.into()]).unwrap();
    assert_eq!(border.compile(), stroke.compile());
}

#[test]
fn test_factories_compose() {
    let ui = styler();

    let sheet = ui
        .frame(320, 480)
        .scroll(ScrollArg::Axes {
            x: Some(true),
            y: Some(false),
        })
        .grid(GridOptions {
            columns: Some(2.into()),
            gap: Some(8.into()),
            ..GridOptions::default()
        });

    let compiled = sheet.compile();
    // the grid call overrode the frame's flex display
    assert_eq!(compiled["display"], Value::from("grid"));
    assert_eq!(compiled["width"], Value::from(320));
    assert_eq!(compiled["overflowX"], Value::from("scroll"));
    assert_eq!(compiled["overflowY"], Value::from("hidden"));
    assert_eq!(compiled["gridTemplateColumns"], Value::from("repeat(2, 1fr)"));
}

#[test]
fn test_frame_with_box_options_positions() {
    let ui = styler();
    let overlay = ui.frame_with(BoxOptions {
        width: Some("100%".into()),
        position: Some("fixed".to_string()),
        z_index: Some(10.0),
        ..BoxOptions::default()
    });

    let compiled = overlay.compile();
    assert_eq!(compiled["position"], Value::from("fixed"));
    assert_eq!(compiled["zIndex"], Value::from(10));
    assert_eq!(compiled["justifyContent"], Value::from("center"));
}

#[test]
fn test_compiled_tree_serializes_to_plain_json() {
    let compiled = styler()
        .view("nav")
        .hstack_with(FlexOptions {
            justify: Some("space-between".to_string()),
            ..FlexOptions::default()
        })
        .compile();
    let json = serde_json::to_value(&compiled).unwrap();
    assert_eq!(json["display"], "flex");
    assert_eq!(json["justifyContent"], "space-between");
    assert!(json["variants"].as_object().unwrap().is_empty());
}

#[test]
fn test_media_tokens_pass_through_unparsed() {
    let compiled = styler()
        .style()
        .media("$mobile", tree! { "padding" => 8 })
        .compile();
    assert!(compiled.contains_key("@media $mobile"));
}

fn prop_key() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,11}"
}

fn prop_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z%#$]{1,8}".prop_map(Value::from),
        (-1000i32..1000).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn prop_tree() -> impl Strategy<Value = StyleTree> {
    proptest::collection::vec((prop_key(), prop_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_compile_is_idempotent(tree in prop_tree(), hover in prop_tree()) {
        let c = styler().style().css(tree).on_hover(hover);
        prop_assert_eq!(c.compile(), c.compile());
    }

    #[test]
    fn prop_disjoint_css_merges_commute(a in prop_tree(), b in prop_tree()) {
        let b: StyleTree = b
            .into_iter()
            .filter(|(key, _)| !a.contains_key(key))
            .collect();

        let ab = styler().style().css(a.clone()).css(b.clone()).compile();
        let ba = styler().style().css(b).css(a).compile();

        // same entries either way; only insertion order may differ
        prop_assert_eq!(ab.len(), ba.len());
        for (key, value) in &ab {
            prop_assert_eq!(Some(value), ba.get(key));
        }
    }

    #[test]
    fn prop_extend_isolates_parent(base in prop_tree(), extra in prop_tree()) {
        let parent = styler().style().css(base);
        let before = parent.compile();
        let _child = parent.extend().css(extra).on_active(tree! { "opacity" => 1 });
        prop_assert_eq!(before, parent.compile());
    }

    #[test]
    fn prop_last_write_wins(key in prop_key(), first in prop_value(), second in prop_value()) {
        let compiled = styler()
            .style()
            .css(tree! { key.clone() => first })
            .css(tree! { key.clone() => second.clone() })
            .compile();
        prop_assert_eq!(&compiled[&key], &second);
    }
}

#[test]
fn test_custom_breakpoints_reach_engine() {
    let mut breakpoints = IndexMap::new();
    breakpoints.insert("fold".to_string(), "(max-width: 280px)".to_string());

    let mut fold = None;
    init(
        InitOptions {
            breakpoints,
            ..InitOptions::default()
        },
        |media, _tokens| {
            fold = media.get("fold").cloned();
            SharedEngine(Rc::new(RecordingEngine::default()))
        },
    );
    assert_eq!(fold.as_deref(), Some("(max-width: 280px)"));
}
