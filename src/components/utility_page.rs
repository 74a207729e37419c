use crate::components::playground::Playground;
use crate::components::ui::callout::{ Callout, CalloutTone };
use crate::components::ui::page_header::PageHeader;
use crate::components::usage_examples::UsageExamples;
use crate::components::utility_grid::UtilityGrid;
use crate::libs::playground::FamilyHandle;
use crate::utils::spacing::{ GAP_SPACING, SECTION_SPACING_LG };
use crate::{ always_eprint, debug_print };
use dioxus::prelude::*;
use lucide_dioxus::{ BookOpen, Wind };
use std::time::Duration;

/// Full reference page for one utility family
#[component]
pub fn UtilityPage(family: FamilyHandle, ack_delay: Duration) -> Element {
    let docs_url = family.docs_url();
    let group_name = format!("{}-notes", family.id());

    rsx! {
      div { class: "{SECTION_SPACING_LG}",
        PageHeader {
          title: family.title().to_string(),
          subtitle: family.summary().to_string(),
          icon: Some(rsx! {
            Wind { class: "w-6 h-6 text-primary" }
          }),
          actions: Some(rsx! {
            button {
              class: "btn btn-ghost btn-sm",
              title: "{docs_url}",
              onclick: move |_| {
                  debug_print!("🔗 Opening {}", docs_url);
                  if let Err(e) = open::that_detached(docs_url) {
                      always_eprint!("❌ Failed to open {}: {}", docs_url, e);
                  }
              },
              BookOpen { class: "w-4 h-4" }
              "Docs"
            }
          }),
        }
        UtilityGrid { family, ack_delay }
        Playground { key: "{family.id()}", family, ack_delay }
        UsageExamples { family, ack_delay }
        div { class: "grid {GAP_SPACING} lg:grid-cols-2 items-start",
          Callout {
            title: "Tips".to_string(),
            items: family.tips().to_vec(),
            group_name: group_name.clone(),
            default_open: true,
          }
          Callout {
            title: "Common mistakes".to_string(),
            items: family.mistakes().to_vec(),
            group_name,
            tone: CalloutTone::Warning,
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families;
    use crate::libs::clipboard::testing::MemoryClipboard;
    use crate::libs::clipboard::ClipboardSource;

    #[component]
    fn Harness(family: FamilyHandle) -> Element {
        use_context_provider(|| ClipboardSource::new(MemoryClipboard::default()));
        rsx! {
          UtilityPage { family, ack_delay: Duration::from_millis(1500) }
        }
    }

    #[test]
    fn every_family_page_renders() {
        for family in families::all() {
            let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { family: FamilyHandle(*family) });
            dom.rebuild_in_place();
            let html = dioxus_ssr::render(&dom);

            assert!(html.contains(family.title()), "{}", family.id());
            assert!(html.contains("Playground"), "{}", family.id());
            for option in family.options() {
                assert!(html.contains(option.class_name), "{} missing {}", family.id(), option.class_name);
            }
        }
    }
}
