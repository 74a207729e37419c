use crate::libs::theme::use_theme;
use crate::state::config::AppConfig;
use crate::utils::config::use_config;
use dioxus::prelude::*;
use lucide_dioxus::{ Moon, Sun };

/// Cycles through the daisyUI themes and persists the choice
#[component]
pub fn ThemeToggler() -> Element {
    let (_config, update_config) = use_config();
    let mut theme = use_theme();
    let current = theme();

    rsx! {
      button {
        class: "btn btn-ghost btn-sm w-full justify-start gap-2",
        title: "Switch theme",
        onclick: move |_| {
            let next = theme().next();
            theme.set(next);
            update_config(
                Box::new(move |config: &mut AppConfig| {
                    config.theme = next;
                }),
            );
        },
        if current.is_dark() {
          Moon { class: "w-4 h-4" }
        } else {
          Sun { class: "w-4 h-4" }
        }
        span { class: "capitalize", "{current.to_daisy_theme()}" }
        div {
          class: "ml-auto grid shrink-0 grid-cols-2 gap-0.5 rounded-md bg-base-100 p-1 shadow-sm",
          "data-theme": current.next().to_daisy_theme(),
          div { class: "bg-primary size-2 rounded-full" }
          div { class: "bg-secondary size-2 rounded-full" }
          div { class: "bg-warning size-2 rounded-full" }
          div { class: "bg-success size-2 rounded-full" }
        }
      }
    }
}

