/// Playground data model: utility families, selection state and events
use crate::libs::markup::normalize_custom_classes;
use crate::libs::preview::PreviewNode;
use crate::{ debug_eprint, debug_print };
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// One selectable utility class and what it does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UtilityOption {
    pub class_name: &'static str,
    pub description: &'static str,
}

impl UtilityOption {
    pub const fn new(class_name: &'static str, description: &'static str) -> Self {
        Self { class_name, description }
    }
}

/// A real-world usage card shown under the playground
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageExample {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaygroundError {
    #[error("'{value}' is not an option of the {family} playground")]
    UnknownOption { family: &'static str, value: String },
    #[error("the {family} playground has no options")]
    EmptyOptions { family: &'static str },
    #[error("'{value}' is listed twice in the {family} playground")]
    DuplicateOption { family: &'static str, value: &'static str },
    #[error("the {family} preview for '{value}' uses classes its snippet does not")]
    IncongruentMarkup { family: &'static str, value: &'static str },
}

/// Everything a page supplies to drive one playground.
///
/// Implementors only describe their data and how a *known* option is
/// previewed. Validation, custom-class normalisation and the unknown-value
/// fallback live in the provided [`build_markup`](UtilityFamily::build_markup)
/// and [`render_preview`](UtilityFamily::render_preview).
pub trait UtilityFamily: Sync {
    /// Stable slug, unique across the registry
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    fn docs_url(&self) -> &'static str;
    fn options(&self) -> &'static [UtilityOption];
    fn default_value(&self) -> &'static str;

    fn default_custom_classes(&self) -> &'static str {
        ""
    }

    /// Preview for a value already known to be in [`options`](UtilityFamily::options)
    fn compose_preview(&self, value: &str, custom: &str) -> PreviewNode;

    /// Source snippet for a known value. Printing the preview keeps both in step.
    fn compose_markup(&self, value: &str, custom: &str) -> String {
        self.compose_preview(value, custom).to_markup()
    }

    /// Button label for an option
    fn option_label(&self, value: &str) -> String {
        value.to_string()
    }

    fn examples(&self) -> &'static [UsageExample] {
        &[]
    }

    fn tips(&self) -> &'static [&'static str] {
        &[]
    }

    fn mistakes(&self) -> &'static [&'static str] {
        &[]
    }

    fn find_option(&self, value: &str) -> Result<&'static UtilityOption, PlaygroundError> {
        self.options()
            .iter()
            .find(|option| option.class_name == value)
            .ok_or_else(|| PlaygroundError::UnknownOption {
                family: self.id(),
                value: value.to_string(),
            })
    }

    fn contains(&self, value: &str) -> bool {
        self.find_option(value).is_ok()
    }

    /// Code for the selected class plus custom classes; empty for unknown values
    fn build_markup(&self, value: &str, custom: Option<&str>) -> String {
        let custom = normalize_custom_classes(custom);
        match self.find_option(value) {
            Ok(option) => self.compose_markup(option.class_name, &custom),
            Err(e) => {
                debug_eprint!("⚠️ Falling back to empty markup: {}", e);
                String::new()
            }
        }
    }

    /// Live preview matching [`build_markup`](UtilityFamily::build_markup); neutral for unknown values
    fn render_preview(&self, value: &str, custom: Option<&str>) -> PreviewNode {
        let custom = normalize_custom_classes(custom);
        match self.find_option(value) {
            Ok(option) => self.compose_preview(option.class_name, &custom),
            Err(e) => {
                debug_eprint!("⚠️ Falling back to empty preview: {}", e);
                PreviewNode::empty()
            }
        }
    }
}

/// Copyable reference to a registered family, usable as a component prop
#[derive(Clone, Copy)]
pub struct FamilyHandle(pub &'static dyn UtilityFamily);

impl PartialEq for FamilyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl Deref for FamilyHandle {
    type Target = dyn UtilityFamily;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl fmt::Debug for FamilyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FamilyHandle").field(&self.0.id()).finish()
    }
}

/// User-facing events handled by the playground container
#[derive(Clone, Debug, PartialEq)]
pub enum PlaygroundEvent {
    SelectOption(String),
    EditCustomClasses(String),
    CopyRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaygroundPhase {
    Idle,
    Copied,
}

/// Pick the option the selector should highlight.
///
/// Falls back to the first option when `active` is not listed; `None` only
/// when there are no options at all.
pub fn resolve_active<'a>(options: &[&'a str], active: &str) -> Option<&'a str> {
    if let Some(found) = options.iter().find(|option| **option == active) {
        return Some(*found);
    }

    let first = options.first().copied();
    if let Some(first) = first {
        debug_eprint!("⚠️ Active option '{}' is not listed, highlighting '{}' instead", active, first);
    }
    first
}

/// The only mutable playground state: the active class and the custom classes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub active: String,
    pub custom_classes: String,
}

impl SelectionState {
    pub fn new(family: &dyn UtilityFamily) -> Self {
        let active = match family.find_option(family.default_value()) {
            Ok(option) => option.class_name.to_string(),
            Err(e) => {
                debug_eprint!("⚠️ Invalid default for {}: {}", family.id(), e);
                family
                    .options()
                    .first()
                    .map(|option| option.class_name.to_string())
                    .unwrap_or_default()
            }
        };

        Self {
            active,
            custom_classes: normalize_custom_classes(Some(family.default_custom_classes())),
        }
    }

    /// Make `value` active. Values outside the family are rejected so the
    /// active class always stays one of the options.
    pub fn select(&mut self, family: &dyn UtilityFamily, value: &str) -> bool {
        match family.find_option(value) {
            Ok(option) => {
                if self.active != option.class_name {
                    debug_print!("🎯 {} -> {}", family.id(), option.class_name);
                    self.active = option.class_name.to_string();
                }
                true
            }
            Err(e) => {
                debug_eprint!("⚠️ Ignoring selection: {}", e);
                false
            }
        }
    }

    /// Store the raw text typed by the user; normalisation happens when rendering
    pub fn set_custom_classes(&mut self, text: impl Into<String>) {
        self.custom_classes = text.into();
    }

    /// Apply a selection event. Copy requests are not selection changes and are
    /// left to the clipboard helper.
    pub fn apply(&mut self, family: &dyn UtilityFamily, event: PlaygroundEvent) -> bool {
        match event {
            PlaygroundEvent::SelectOption(value) => self.select(family, &value),
            PlaygroundEvent::EditCustomClasses(text) => {
                self.set_custom_classes(text);
                true
            }
            PlaygroundEvent::CopyRequested => false,
        }
    }

    pub fn markup(&self, family: &dyn UtilityFamily) -> String {
        family.build_markup(&self.active, Some(&self.custom_classes))
    }

    pub fn preview(&self, family: &dyn UtilityFamily) -> PreviewNode {
        family.render_preview(&self.active, Some(&self.custom_classes))
    }
}
