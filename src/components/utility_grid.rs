use crate::components::copy_button::CopyButton;
use crate::libs::playground::FamilyHandle;
use dioxus::prelude::*;
use std::time::Duration;

/// Table of every class in a family with its CSS and a copy button
#[component]
pub fn UtilityGrid(family: FamilyHandle, ack_delay: Duration) -> Element {
    rsx! {
      div { class: "overflow-x-auto rounded-box border border-base-300",
        table { class: "table table-sm",
          thead {
            tr {
              th { "Class" }
              th { "Styles" }
              th { class: "w-24" }
            }
          }
          tbody {
            for option in family.options().iter() {
              tr { key: "{option.class_name}",
                td { class: "font-mono text-primary whitespace-nowrap", "{option.class_name}" }
                td { class: "font-mono text-xs text-base-content/70", "{option.description}" }
                td { class: "text-right",
                  CopyButton { text: option.class_name.to_string(), ack_delay }
                }
              }
            }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::padding::Padding;
    use crate::libs::playground::UtilityFamily;

    #[component]
    fn Harness() -> Element {
        rsx! {
          UtilityGrid { family: FamilyHandle(&Padding), ack_delay: Duration::from_millis(1500) }
        }
    }

    #[test]
    fn lists_every_option_once() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("<tr").count(), Padding.options().len() + 1);
        for option in Padding.options() {
            assert!(html.contains(&format!(">{}</td>", option.class_name)), "{}", option.class_name);
        }
    }
}
