use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("font-thin", "font-weight: 100"),
    UtilityOption::new("font-extralight", "font-weight: 200"),
    UtilityOption::new("font-light", "font-weight: 300"),
    UtilityOption::new("font-normal", "font-weight: 400"),
    UtilityOption::new("font-medium", "font-weight: 500"),
    UtilityOption::new("font-semibold", "font-weight: 600"),
    UtilityOption::new("font-bold", "font-weight: 700"),
    UtilityOption::new("font-extrabold", "font-weight: 800"),
    UtilityOption::new("font-black", "font-weight: 900"),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Heading hierarchy",
        description: "Weight does the work that size alone cannot in dense layouts.",
        code: r#"<h2 class="text-xl font-bold">Billing</h2>
<p class="text-sm font-medium text-base-content/70">Next invoice on March 3</p>"#,
    },
];

const TIPS: &[&str] = &[
    "Only weights shipped by the font file render differently; a font with 400 and 700 falls back for the rest.",
];

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

pub struct FontWeight;

impl UtilityFamily for FontWeight {
    fn id(&self) -> &'static str {
        "font-weight"
    }

    fn title(&self) -> &'static str {
        "Font Weight"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling the font weight of an element."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/font-weight"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "font-semibold"
    }

    fn default_custom_classes(&self) -> &'static str {
        "text-2xl"
    }

    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::p().class_list(&[value, custom]).text(SAMPLE_TEXT)
    }

    fn option_label(&self, value: &str) -> String {
        value.strip_prefix("font-").unwrap_or(value).to_string()
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn tips(&self) -> &'static [&'static str] {
        TIPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn markup_is_a_single_paragraph() {
        assert_eq!(
            FontWeight.build_markup("font-black", None),
            "<p class=\"font-black\">The quick brown fox jumps over the lazy dog.</p>"
        );
    }
}
