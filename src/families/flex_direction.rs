use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("flex-row", "Lay items out horizontally, in reading order."),
    UtilityOption::new("flex-row-reverse", "Lay items out horizontally, last item first."),
    UtilityOption::new("flex-col", "Stack items vertically, top to bottom."),
    UtilityOption::new("flex-col-reverse", "Stack items vertically, bottom to top."),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Responsive media object",
        description: "Stacked on small screens, side by side from md upwards.",
        code: r#"<article class="flex flex-col md:flex-row gap-4">
  <img class="w-full md:w-48 rounded-box" src="/cover.jpg" alt="" />
  <div>
    <h3 class="font-bold">Release notes</h3>
    <p>Everything that changed this month.</p>
  </div>
</article>"#,
    },
];

const TIPS: &[&str] = &[
    "Reversing only changes the visual order; screen readers and tab order still follow the source.",
];

pub struct FlexDirection;

impl UtilityFamily for FlexDirection {
    fn id(&self) -> &'static str {
        "flex-direction"
    }

    fn title(&self) -> &'static str {
        "Flex Direction"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling the direction of flex items."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/flex-direction"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "flex-row"
    }

    fn default_custom_classes(&self) -> &'static str {
        "gap-3"
    }

    // Direction utilities need the `flex` display utility beside them
    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::div()
            .class_list(&["flex", value, custom])
            .children(
                ["01", "02", "03"].into_iter().map(|label| {
                    PreviewNode::div()
                        .class_list(&["rounded-box bg-accent px-4 py-2 font-mono text-accent-content"])
                        .text(label)
                })
            )
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn tips(&self) -> &'static [&'static str] {
        TIPS
    }
}
