use crate::components::option_selector::{ OptionSelector, SelectorOption };
use crate::components::theme_toggler::ThemeToggler;
use crate::libs::playground::FamilyHandle;
use crate::utils::constants::{ APP_NAME, APP_VERSION };
use dioxus::prelude::*;

/// Family navigation; reuses the option selector in a vertical layout
#[component]
pub fn Sidebar(families: Vec<FamilyHandle>, active: String, on_select: EventHandler<String>) -> Element {
    let options: Vec<SelectorOption> = families
        .iter()
        .map(|family| SelectorOption::new(family.id(), family.title()))
        .collect();

    rsx! {
      aside { class: "w-60 flex-shrink-0 flex flex-col border-r border-base-300 bg-base-200",
        div { class: "px-4 py-5",
          div { class: "text-lg font-black tracking-tight", "{APP_NAME}" }
          div { class: "text-xs text-base-content/50", "v{APP_VERSION}" }
        }
        nav { class: "flex-1 overflow-y-auto px-2",
          OptionSelector {
            options,
            active,
            on_select,
            class: "flex flex-col gap-1",
            button_class: "btn-sm justify-start w-full",
          }
        }
        div { class: "p-3 border-t border-base-300", ThemeToggler {} }
      }
    }
}
