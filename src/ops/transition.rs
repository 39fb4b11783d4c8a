//! CSS transitions.

use crate::chain::Chain;
use crate::registry::Registry;
use crate::value::{StyleTree, Value};

const DEFAULT_PROPS: &[&str] = &[
    "color",
    "background-color",
    "border-color",
    "text-decoration-color",
    "fill",
    "stroke",
    "opacity",
    "box-shadow",
    "transform",
    "filter",
    "backdrop-filter",
];

const TIMING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
const DEFAULT_DURATION: &str = "150ms";

impl Chain {
    /// Transitions the default property set over 150ms.
    pub fn transition(self) -> Self {
        self.update(apply_transition(None, None))
    }

    /// Transitions the default property set; a numeric speed is read as
    /// milliseconds, a string is used verbatim (`"0.5s"`).
    pub fn transition_for(self, speed: impl Into<Value>) -> Self {
        self.update(apply_transition(Some(&speed.into()), None))
    }

    /// Transitions only the named properties.
    pub fn transition_props(self, speed: impl Into<Value>, props: &[&str]) -> Self {
        self.update(apply_transition(Some(&speed.into()), Some(props)))
    }
}

fn apply_transition(speed: Option<&Value>, props: Option<&[&str]>) -> StyleTree {
    let property = props.unwrap_or(DEFAULT_PROPS).join(", ");
    let duration = match speed {
        Some(Value::Num(ms)) => format!("{}ms", Value::Num(*ms).css_text()),
        Some(other) => other.css_text(),
        None => DEFAULT_DURATION.to_string(),
    };
    crate::tree! {
        "transitionProperty" => property,
        "transitionTimingFunction" => TIMING,
        "transitionDuration" => duration,
    }
}

pub(crate) fn register(registry: &mut Registry) {
    // transition(speed?, prop...)
    registry.add("transition", |_ctx, args| {
        let speed = super::arg(args, 0).cloned();
        let props: Vec<&str> = args
            .iter()
            .skip(1)
            .filter_map(Value::as_str)
            .collect();
        apply_transition(
            speed.as_ref(),
            if props.is_empty() {
                None
            } else {
                Some(&props)
            },
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testutil::chain;

    #[test]
    fn test_defaults() {
        let c = chain().transition();
        assert_eq!(c.tree()["transitionDuration"], Value::from("150ms"));
        assert_eq!(
            c.tree()["transitionTimingFunction"],
            Value::from("cubic-bezier(0.4, 0, 0.2, 1)")
        );
        let property = c.tree()["transitionProperty"].css_text();
        assert!(property.starts_with("color, background-color"));
        assert!(property.ends_with("backdrop-filter"));
    }

    #[test]
    fn test_numeric_speed_is_milliseconds() {
        let c = chain().transition_for(300);
        assert_eq!(c.tree()["transitionDuration"], Value::from("300ms"));
    }

    #[test]
    fn test_string_speed_verbatim() {
        let c = chain().transition_for("0.5s");
        assert_eq!(c.tree()["transitionDuration"], Value::from("0.5s"));
    }

    #[test]
    fn test_explicit_props() {
        let c = chain().transition_props(200, &["opacity", "transform"]);
        assert_eq!(
            c.tree()["transitionProperty"],
            Value::from("opacity, transform")
        );
    }

    #[test]
    fn test_dynamic_props_as_trailing_args() {
        let c = chain()
            .op(
                "transition",
                &[Value::from(200), Value::from("opacity"), Value::from("transform")],
            )
            .unwrap();
        assert_eq!(
            c.tree()["transitionProperty"],
            Value::from("opacity, transform")
        );
    }
}
