use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("rounded-none", "border-radius: 0"),
    UtilityOption::new("rounded-sm", "border-radius: 0.25rem"),
    UtilityOption::new("rounded-md", "border-radius: 0.375rem"),
    UtilityOption::new("rounded-lg", "border-radius: 0.5rem"),
    UtilityOption::new("rounded-xl", "border-radius: 0.75rem"),
    UtilityOption::new("rounded-2xl", "border-radius: 1rem"),
    UtilityOption::new("rounded-3xl", "border-radius: 1.5rem"),
    UtilityOption::new("rounded-full", "border-radius: calc(infinity * 1px)"),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Avatar",
        description: "A square image turned into a circle.",
        code: r#"<img class="size-12 rounded-full object-cover" src="/avatar.jpg" alt="Avatar" />"#,
    },
    UsageExample {
        title: "Pill badge",
        description: "Full rounding on a wide element gives capsule ends.",
        code: r#"<span class="rounded-full bg-success/20 px-3 py-1 text-xs text-success">Active</span>"#,
    },
];

const MISTAKES: &[&str] = &[
    "Children overflow rounded corners unless the parent also has overflow-hidden.",
];

pub struct BorderRadius;

impl UtilityFamily for BorderRadius {
    fn id(&self) -> &'static str {
        "border-radius"
    }

    fn title(&self) -> &'static str {
        "Border Radius"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling the border radius of an element."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/border-radius"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "rounded-lg"
    }

    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::div().class_list(&["size-24 bg-primary", value, custom])
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn mistakes(&self) -> &'static [&'static str] {
        MISTAKES
    }
}
