use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("items-start", "Align items to the start of the container's cross axis."),
    UtilityOption::new("items-center", "Align items along the center of the container's cross axis."),
    UtilityOption::new("items-end", "Align items to the end of the container's cross axis."),
    UtilityOption::new("items-baseline", "Align items so that their text baselines line up."),
    UtilityOption::new("items-stretch", "Stretch items to fill the container's cross axis."),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Navigation bar",
        description: "Logo, links and a button of different heights sitting on one center line.",
        code: r#"<nav class="flex items-center justify-between h-16 px-6">
  <img class="h-8" src="/logo.svg" alt="Logo" />
  <div class="flex items-center gap-6">
    <a href="/docs">Docs</a>
    <button class="btn btn-primary">Sign in</button>
  </div>
</nav>"#,
    },
    UsageExample {
        title: "Price with unit",
        description: "Large and small text aligned on their baseline.",
        code: r#"<div class="flex items-baseline gap-1">
  <span class="text-4xl font-bold">$29</span>
  <span class="text-sm text-base-content/60">/month</span>
</div>"#,
    },
];

const TIPS: &[&str] = &[
    "Use items-baseline when mixing font sizes in one row; items-center lines up boxes, not text.",
    "Give the container a height (h-48, min-h-screen) to actually see the difference between start, center and end.",
];

const MISTAKES: &[&str] = &[
    "items-* does nothing without a flex or grid parent: add `flex` or `grid` next to it.",
    "items-stretch is overridden by a fixed height on the child (h-12 wins over stretching).",
];

/// Preview boxes of different heights so cross-axis alignment is visible
const BOXES: [(&str, &str); 3] = [("01", "py-2"), ("02", "py-6"), ("03", "py-4")];
const BOX_CLASSES: &str = "rounded-box bg-primary px-4 font-mono text-primary-content";

pub struct AlignItems;

impl UtilityFamily for AlignItems {
    fn id(&self) -> &'static str {
        "align-items"
    }

    fn title(&self) -> &'static str {
        "Align Items"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling how flex and grid items are positioned along a container's cross axis."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/align-items"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "items-center"
    }

    fn default_custom_classes(&self) -> &'static str {
        "h-48 gap-4"
    }

    // items-* only applies inside a flex container, so `flex` is always emitted
    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::div()
            .class_list(&["flex", value, custom])
            .children(
                BOXES.iter().map(|(label, padding)| {
                    PreviewNode::div().class_list(&[BOX_CLASSES, *padding]).text(*label)
                })
            )
    }

    fn option_label(&self, value: &str) -> String {
        value.strip_prefix("items-").unwrap_or(value).to_string()
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn tips(&self) -> &'static [&'static str] {
        TIPS
    }

    fn mistakes(&self) -> &'static [&'static str] {
        MISTAKES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn markup_couples_flex_parent() {
        let markup = AlignItems.build_markup("items-end", Some("h-48 gap-4"));
        assert!(markup.starts_with("<div class=\"flex items-end h-48 gap-4\">"), "{markup}");
        assert_eq!(markup.matches("<div").count(), 4);
    }

    #[test]
    fn labels_drop_prefix() {
        assert_eq!(AlignItems.option_label("items-baseline"), "baseline");
        assert_eq!(AlignItems.option_label("flex"), "flex");
    }

    #[test]
    fn same_inputs_give_same_markup() {
        assert_eq!(
            AlignItems.build_markup("items-center", Some("h-48 gap-4")),
            AlignItems.build_markup("items-center", Some("h-48 gap-4"))
        );
    }
}
