use crate::libs::playground::{ UsageExample, UtilityFamily, UtilityOption };
use crate::libs::preview::PreviewNode;

const OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("bg-top-left", "Anchor the background image to the top left corner."),
    UtilityOption::new("bg-top", "Anchor the background image to the top edge, centered horizontally."),
    UtilityOption::new("bg-top-right", "Anchor the background image to the top right corner."),
    UtilityOption::new("bg-left", "Anchor the background image to the left edge, centered vertically."),
    UtilityOption::new("bg-center", "Center the background image in both directions."),
    UtilityOption::new("bg-right", "Anchor the background image to the right edge, centered vertically."),
    UtilityOption::new("bg-bottom-left", "Anchor the background image to the bottom left corner."),
    UtilityOption::new("bg-bottom", "Anchor the background image to the bottom edge, centered horizontally."),
    UtilityOption::new("bg-bottom-right", "Anchor the background image to the bottom right corner."),
];

const EXAMPLES: &[UsageExample] = &[
    UsageExample {
        title: "Hero with a focal point",
        description: "Keep the subject of a cover photo visible when the banner is cropped.",
        code: r#"<section class="bg-[url('/img/hero.jpg')] bg-cover bg-top h-96">
  <h1 class="text-5xl font-bold text-white">Explore the Alps</h1>
</section>"#,
    },
];

const MISTAKES: &[&str] = &[
    "Position has no visible effect without a background image on the same element.",
    "With bg-cover and an image of the same aspect ratio as the box there is nothing left to position.",
];

/// The image the emitted snippet points at
const IMAGE_CLASS: &str = "bg-[url('/img/mountains.jpg')]";

/// Image size that leaves room to move inside the preview box
const SIZE_CLASS: &str = "bg-size-[7rem]";

/// Stand-in for the photo, painted inline since the preview has no asset to load
const PREVIEW_IMAGE_STYLE: &str =
    "background-image: radial-gradient(circle at center, var(--color-primary) 0 45%, transparent 46%)";

pub struct BackgroundPosition;

impl UtilityFamily for BackgroundPosition {
    fn id(&self) -> &'static str {
        "background-position"
    }

    fn title(&self) -> &'static str {
        "Background Position"
    }

    fn summary(&self) -> &'static str {
        "Utilities for controlling the position of an element's background image."
    }

    fn docs_url(&self) -> &'static str {
        "https://tailwindcss.com/docs/background-position"
    }

    fn options(&self) -> &'static [UtilityOption] {
        OPTIONS
    }

    fn default_value(&self) -> &'static str {
        "bg-center"
    }

    fn default_custom_classes(&self) -> &'static str {
        "h-48 w-full rounded-box bg-base-200"
    }

    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode {
        PreviewNode::div()
            .class_list(&["bg-no-repeat", SIZE_CLASS, value, custom])
            .style(PREVIEW_IMAGE_STYLE)
    }

    // The snippet carries the real image class instead of the inline stand-in
    fn compose_markup(&self, value: &str, custom: &str) -> String {
        PreviewNode::div().class_list(&[IMAGE_CLASS, "bg-no-repeat", SIZE_CLASS, value, custom]).to_markup()
    }

    fn examples(&self) -> &'static [UsageExample] {
        EXAMPLES
    }

    fn mistakes(&self) -> &'static [&'static str] {
        MISTAKES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::markup::class_tokens_in_markup;
    use pretty_assertions::assert_eq;

    #[test]
    fn markup_includes_image_companion() {
        assert_eq!(
            BackgroundPosition.build_markup("bg-top-right", Some("h-48")),
            "<div class=\"bg-[url('/img/mountains.jpg')] bg-no-repeat bg-size-[7rem] bg-top-right h-48\"></div>"
        );
    }

    #[test]
    fn arbitrary_variants_reach_the_snippet_unchanged() {
        let markup = BackgroundPosition.build_markup("bg-center", Some("[&>*]:p-2 [&_p]:mt-4"));
        assert!(markup.contains("bg-center [&>*]:p-2 [&_p]:mt-4\""), "{markup}");
    }

    #[test]
    fn preview_paints_an_image() {
        let preview = BackgroundPosition.render_preview("bg-left", None);
        assert!(preview.style.as_deref().is_some_and(|style| style.contains("background-image")));
    }

    #[test]
    fn preview_classes_are_a_subset_of_markup_classes() {
        let markup = class_tokens_in_markup(&BackgroundPosition.build_markup("bg-bottom", Some("p-4")));
        let preview = BackgroundPosition.render_preview("bg-bottom", Some("p-4")).root_class_tokens();
        assert!(preview.is_subset(&markup));
        assert!(markup.contains(IMAGE_CLASS) && !preview.contains(IMAGE_CLASS));
    }
}
