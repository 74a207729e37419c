use crate::components::code_block::CodeBlock;
use crate::components::option_selector::{ OptionSelector, SelectorOption };
use crate::components::preview_renderer::PreviewRenderer;
use crate::libs::clipboard::use_clipboard;
use crate::libs::playground::{ FamilyHandle, PlaygroundEvent, PlaygroundPhase, SelectionState };
use crate::utils::constants::COPY_ACK_DEFAULT_MS;
use crate::utils::spacing::{ CARD_PADDING, SECTION_SPACING };
use dioxus::prelude::*;
use lucide_dioxus::FlaskConical;
use std::time::Duration;

/// Interactive playground for one utility family.
///
/// Owns the selected option and the custom classes; the live preview and the
/// copyable markup are both derived from that state so they never disagree.
#[component]
pub fn Playground(
    family: FamilyHandle,
    #[props(default = crate::libs::clipboard::ack_delay(COPY_ACK_DEFAULT_MS))] ack_delay: Duration,
) -> Element {
    let mut selection = use_signal(move || SelectionState::new(&*family));
    let clipboard = use_clipboard(ack_delay);

    let markup = use_memo(move || selection.read().markup(&*family));
    let preview = use_memo(move || selection.read().preview(&*family));

    let mut dispatch = move |event: PlaygroundEvent| {
        match event {
            PlaygroundEvent::CopyRequested => clipboard.copy(markup()),
            event => {
                selection.write().apply(&*family, event);
            }
        }
    };

    let options: Vec<SelectorOption> = family
        .options()
        .iter()
        .map(|option| SelectorOption::new(option.class_name, family.option_label(option.class_name)))
        .collect();
    let active = selection.read().active.clone();
    let custom_classes = selection.read().custom_classes.clone();
    let copied = clipboard.phase() == PlaygroundPhase::Copied && clipboard.is_copied(&markup());

    rsx! {
      section { class: "card bg-base-200 {CARD_PADDING} {SECTION_SPACING}",
        div { class: "flex items-center gap-2",
          FlaskConical { class: "w-5 h-5 text-primary" }
          h2 { class: "text-lg font-semibold", "Playground" }
        }
        OptionSelector {
          options,
          active,
          on_select: move |value: String| dispatch(PlaygroundEvent::SelectOption(value)),
        }
        fieldset { class: "fieldset",
          legend { class: "fieldset-legend", "Extra classes" }
          input {
            class: "input input-sm w-full font-mono",
            r#type: "text",
            spellcheck: "false",
            placeholder: "{family.default_custom_classes()}",
            value: "{custom_classes}",
            oninput: move |evt| dispatch(PlaygroundEvent::EditCustomClasses(evt.value())),
          }
        }
        div { class: "grid gap-4 xl:grid-cols-2",
          div {
            class: "rounded-box border border-base-300 bg-base-100 p-6 overflow-auto min-h-56",
            "data-preview": "{family.id()}",
            PreviewRenderer { node: preview() }
          }
          CodeBlock {
            code: markup(),
            copied,
            on_copy: move |_| dispatch(PlaygroundEvent::CopyRequested),
          }
        }
      }
    }
}
