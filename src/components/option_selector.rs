use crate::libs::playground::resolve_active;
use dioxus::prelude::*;

/// One choice in an [`OptionSelector`]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

impl SelectorOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct OptionSelectorProps {
    /// The mutually exclusive choices, in display order
    pub options: Vec<SelectorOption>,
    /// Value of the currently active choice
    pub active: String,
    /// Called with the value of a clicked, non-active choice
    pub on_select: EventHandler<String>,
    /// Layout classes for the container
    #[props(default = "flex flex-wrap gap-2")]
    pub class: &'static str,
    /// Size and typography classes for every button
    #[props(default = "btn-sm font-mono")]
    pub button_class: &'static str,
}

/// Controlled button group: marks exactly one option active and reports clicks.
/// An `active` value that is not listed highlights the first option instead.
#[component]
pub fn OptionSelector(props: OptionSelectorProps) -> Element {
    let values: Vec<&str> = props.options
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    let active = resolve_active(&values, &props.active).map(str::to_string);
    let on_select = props.on_select;

    rsx! {
      div { class: "{props.class}", role: "group",
        for option in props.options.iter() {
          {
              let is_active = active.as_deref() == Some(option.value.as_str());
              let value = option.value.clone();
              rsx! {
                button {
                  key: "{option.value}",
                  class: format!(
                      "btn {} {}",
                      props.button_class,
                      if is_active { "btn-primary" } else { "btn-ghost" },
                  ),
                  title: "{option.value}",
                  "aria-pressed": if is_active { "true" } else { "false" },
                  onclick: move |_| {
                      if !is_active {
                          on_select.call(value.clone());
                      }
                  },
                  "{option.label}"
                }
              }
          }
        }
      }
    }
}

/// `title` values of every button rendered as pressed
#[cfg(test)]
pub(crate) fn pressed_titles(html: &str) -> Vec<String> {
    html.split("<button")
        .skip(1)
        .filter(|button| {
            let tag = button.split('>').next().unwrap_or_default();
            tag.contains("aria-pressed=\"true\"")
        })
        .filter_map(|button| {
            let start = button.find("title=\"")? + "title=\"".len();
            let end = button[start..].find('"')?;
            Some(button[start..start + end].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::align_items::AlignItems;
    use crate::libs::playground::UtilityFamily;

    fn align_options() -> Vec<SelectorOption> {
        ["items-start", "items-center", "items-end"]
            .into_iter()
            .map(|value| SelectorOption::new(value, AlignItems.option_label(value)))
            .collect()
    }

    #[component]
    fn Harness(active: String) -> Element {
        rsx! {
          OptionSelector { options: align_options(), active, on_select: move |_: String| {} }
        }
    }

    fn render(active: &str) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { active: active.to_string() });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn exactly_one_option_is_pressed() {
        let html = render("items-end");
        assert_eq!(pressed_titles(&html), vec!["items-end"]);
        assert_eq!(html.matches("<button").count(), 3);
    }

    #[test]
    fn labels_use_family_formatting() {
        let html = render("items-center");
        assert!(html.contains(">center</button>"), "{html}");
    }

    #[test]
    fn unknown_active_highlights_first_option() {
        assert_eq!(pressed_titles(&render("items-nowhere")), vec!["items-start"]);
    }
}
