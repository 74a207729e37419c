use crate::components::code_block::CodeBlock;
use crate::libs::clipboard::use_clipboard;
use crate::libs::playground::{ FamilyHandle, UsageExample };
use crate::utils::spacing::{ CARD_PADDING, GAP_SPACING };
use dioxus::prelude::*;
use std::time::Duration;

/// Worked examples for a family; renders nothing when it has none
#[component]
pub fn UsageExamples(family: FamilyHandle, ack_delay: Duration) -> Element {
    let examples = family.examples();
    if examples.is_empty() {
        return rsx! {};
    }

    rsx! {
      section { class: "space-y-3",
        h2 { class: "text-lg font-semibold", "Examples" }
        div { class: "grid {GAP_SPACING} lg:grid-cols-2",
          for example in examples.iter() {
            ExampleCard { key: "{example.title}", example: *example, ack_delay }
          }
        }
      }
    }
}

#[component]
fn ExampleCard(example: UsageExample, ack_delay: Duration) -> Element {
    let clipboard = use_clipboard(ack_delay);

    rsx! {
      div { class: "card bg-base-200 {CARD_PADDING} space-y-2",
        h3 { class: "font-semibold", "{example.title}" }
        p { class: "text-sm text-base-content/70", "{example.description}" }
        CodeBlock {
          code: example.code.to_string(),
          copied: clipboard.is_copied(example.code),
          on_copy: move |_| clipboard.copy(example.code),
        }
      }
    }
}
