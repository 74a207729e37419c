/// Registry of documented utility families
pub mod align_items;
pub mod background_position;
pub mod border_radius;
pub mod flex_direction;
pub mod font_weight;
pub mod justify_content;
pub mod padding;

pub use crate::libs::playground::UtilityFamily;
use crate::libs::markup::class_tokens_in_markup;
use crate::libs::playground::{ FamilyHandle, PlaygroundError };
use std::collections::HashSet;

static FAMILIES: &[&dyn UtilityFamily] = &[
    &align_items::AlignItems,
    &justify_content::JustifyContent,
    &flex_direction::FlexDirection,
    &background_position::BackgroundPosition,
    &font_weight::FontWeight,
    &padding::Padding,
    &border_radius::BorderRadius,
];

/// Every registered family, in sidebar order
pub fn all() -> &'static [&'static dyn UtilityFamily] {
    FAMILIES
}

pub fn handles() -> Vec<FamilyHandle> {
    FAMILIES.iter().map(|family| FamilyHandle(*family)).collect()
}

pub fn find(id: &str) -> Option<&'static dyn UtilityFamily> {
    FAMILIES.iter().copied().find(|family| family.id() == id)
}

pub fn default_family() -> &'static dyn UtilityFamily {
    FAMILIES[0]
}

/// Check the static data of one family: options present, class names
/// unique, the default selectable and every preview backed by its snippet
pub fn validate(family: &dyn UtilityFamily) -> Result<(), PlaygroundError> {
    if family.options().is_empty() {
        return Err(PlaygroundError::EmptyOptions { family: family.id() });
    }

    let mut seen = HashSet::new();
    for option in family.options() {
        if !seen.insert(option.class_name) {
            return Err(PlaygroundError::DuplicateOption {
                family: family.id(),
                value: option.class_name,
            });
        }
    }

    family.find_option(family.default_value())?;

    let custom = family.default_custom_classes();
    for option in family.options() {
        let markup_tokens = class_tokens_in_markup(&family.build_markup(option.class_name, Some(custom)));
        let preview_tokens = family.render_preview(option.class_name, Some(custom)).root_class_tokens();
        if !preview_tokens.is_subset(&markup_tokens) {
            return Err(PlaygroundError::IncongruentMarkup {
                family: family.id(),
                value: option.class_name,
            });
        }
    }

    Ok(())
}
