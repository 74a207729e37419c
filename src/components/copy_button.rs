use crate::libs::clipboard::use_clipboard;
use crate::utils::constants::COPY_ACK_DEFAULT_MS;
use dioxus::prelude::*;
use lucide_dioxus::{ Check, Copy };
use std::time::Duration;

/// Small button that copies `text` and briefly confirms it
#[component]
pub fn CopyButton(
    text: String,
    #[props(default = crate::libs::clipboard::ack_delay(COPY_ACK_DEFAULT_MS))] ack_delay: Duration,
) -> Element {
    let clipboard = use_clipboard(ack_delay);
    let copied = clipboard.is_copied(&text);
    let copy_text = text.clone();

    rsx! {
      button {
        class: format!("btn btn-xs gap-1 {}", if copied { "btn-success" } else { "btn-ghost" }),
        title: "Copy {text}",
        onclick: move |_| clipboard.copy(copy_text.clone()),
        if copied {
          Check { class: "w-3 h-3" }
          "Copied"
        } else {
          Copy { class: "w-3 h-3" }
        }
      }
    }
}
