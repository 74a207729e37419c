use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("justify-start", "Pack items against the start of the main axis."),
    UtilityOption::new("justify-center", "Pack items around the center of the main axis."),
    UtilityOption::new("justify-end", "Pack items against the end of the main axis."),
    UtilityOption::new("justify-between", "Put equal space between items, none at the edges."),
    UtilityOption::new("justify-around", "Put equal space on each side of every item."),
    UtilityOption::new("justify-evenly", "Distribute space so every gap, edges included, is equal."),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Card footer",
        description: "Secondary action on the left, primary action pushed to the right.",
        code: r#"<div class="flex justify-between items-center border-t pt-4">
  <button class="btn btn-ghost">Cancel</button>
  <button class="btn btn-primary">Save changes</button>
</div>"#,
    },
];

const MISTAKES: &[&str] = &[
    "justify-* aligns along the main axis; in a flex-col container that axis is vertical.",
    "justify-between with a single child looks like justify-start.",
];

pub struct JustifyContent;

impl UtilityFamily for JustifyContent {
    fn id(&self) -> &'static str {
        "justify-content"
    }

    fn title(&self) -> &'static str {
        "Justify Content"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling how flex and grid items are positioned along a container's main axis."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/justify-content"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "justify-between"
    }

    fn default_custom_classes(&self) -> &'static str {
        "gap-2"
    }

    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::div()
            .class_list(&["flex w-full", value, custom])
            .children(
                ["01", "02", "03"].into_iter().map(|label| {
                    PreviewNode::div()
                        .class_list(&["size-14 grid place-items-center rounded-box bg-secondary text-secondary-content font-mono"])
                        .text(label)
                })
            )
    }

    fn option_label(&self, value: &str) -> String {
        value.strip_prefix("justify-").unwrap_or(value).to_string()
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn mistakes(&self) -> &'static [&'static str] {
        MISTAKES
    }
}
