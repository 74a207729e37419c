use dioxus::prelude::*;
use lucide_dioxus::{ Check, Copy };

#[derive(Props, Clone, PartialEq)]
pub struct CodeBlockProps {
    /// Source shown in the block
    pub code: String,
    /// Whether this exact code is currently acknowledged as copied
    pub copied: bool,
    /// Copy button clicked
    pub on_copy: EventHandler<()>,
    /// Optional caption above the code
    #[props(default = "HTML")]
    pub language: &'static str,
}

#[component]
pub fn CodeBlock(props: CodeBlockProps) -> Element {
    rsx! {
      div { class: "relative rounded-box bg-neutral text-neutral-content",
        div { class: "flex items-center justify-between px-4 pt-3",
          span { class: "text-xs uppercase tracking-wide opacity-60", "{props.language}" }
          button {
            class: format!("btn btn-xs {}", if props.copied { "btn-success" } else { "btn-ghost" }),
            onclick: move |_| props.on_copy.call(()),
            if props.copied {
              Check { class: "w-3 h-3" }
              "Copied"
            } else {
              Copy { class: "w-3 h-3" }
              "Copy"
            }
          }
        }
        pre { class: "overflow-x-auto px-4 pb-4 pt-2 text-sm",
          code { "{props.code}" }
        }
      }
    }
}
