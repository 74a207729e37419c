use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutTone {
    Tip,
    Warning,
}

impl CalloutTone {
    fn classes(&self) -> &'static str {
        match self {
            CalloutTone::Tip => "border border-info/30 bg-info/10",
            CalloutTone::Warning => "border border-warning/30 bg-warning/10",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CalloutProps {
    /// The title displayed in the collapse header
    pub title: String,
    /// One bullet per entry
    pub items: Vec<&'static str>,
    /// The radio group name for accordion behavior
    pub group_name: String,
    #[props(default = CalloutTone::Tip)]
    pub tone: CalloutTone,
    /// Whether this item is expanded by default
    #[props(default = false)]
    pub default_open: bool,
}

/// Collapsible list of tips or pitfalls. Renders nothing for an empty list.
#[component]
pub fn Callout(props: CalloutProps) -> Element {
    if props.items.is_empty() {
        return rsx! {};
    }

    rsx! {
      div { class: "collapse collapse-arrow relative w-full rounded-box {props.tone.classes()}",
        input {
          r#type: "radio",
          name: "{props.group_name}",
          checked: props.default_open,
        }
        div { class: "collapse-title font-semibold",
          span { class: "flex items-center gap-2",
            "{props.title}"
            span { class: "badge badge-sm badge-ghost", "{props.items.len()}" }
          }
        }
        div { class: "collapse-content",
          ul { class: "list-disc pl-5 space-y-1 text-sm",
            for item in props.items.iter() {
              li { "{item}" }
            }
          }
        }
      }
    }
}
