use crate::libs::playground::{ UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("p-0", "padding: 0"),
    UtilityOption::new("p-1", "padding: 0.25rem"),
    UtilityOption::new("p-2", "padding: 0.5rem"),
    UtilityOption::new("p-4", "padding: 1rem"),
    UtilityOption::new("p-6", "padding: 1.5rem"),
    UtilityOption::new("p-8", "padding: 2rem"),
    UtilityOption::new("p-12", "padding: 3rem"),
];

const TIPS: &[&str] = &[
    "Combine px-* and py-* when the horizontal and vertical padding differ; the last matching utility wins per side.",
];

const MISTAKES: &[&str] = &[
    "Padding grows the box unless box-border sizing is in effect (the default in Tailwind preflight).",
];

pub struct Padding;

impl UtilityFamily for Padding {
    fn id(&self) -> &'static str {
        "padding"
    }

    fn title(&self) -> &'static str {
        "Padding"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling an element's padding."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/padding"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "p-4"
    }

    fn default_custom_classes(&self) -> &'static str {
        "rounded-box"
    }

    // The tinted button makes the padding itself visible around its label
    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::button()
            .class_list(&["inline-block bg-primary/20", value, custom])
            .child(
                PreviewNode::span()
                    .class_list(&["rounded bg-primary px-3 font-mono text-primary-content"])
                    .text("content")
            )
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

    #[test]
    fn wrapper_carries_the_padding() {
        let preview = Padding.render_preview("p-12", Some("rounded-box"));
        assert_eq!(preview.class_attr(), "inline-block bg-primary/20 p-12 rounded-box");
        assert!(Padding.build_markup("p-12", None).starts_with("<button class=\"inline-block bg-primary/20 p-12\">\n  <span "));
        assert!(!preview.children[0].root_class_tokens().contains("p-12"));
    }
}
