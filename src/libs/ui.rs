use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::utility_page::UtilityPage;
use crate::families;
use crate::libs::clipboard::ClipboardSource;
use crate::libs::playground::FamilyHandle;
use crate::libs::theme::use_theme;
use crate::state::config::AppConfig;
use crate::utils::config::{ create_config_updater, use_config_provider };
use crate::utils::delay::Delay;
use crate::utils::spacing::CONTENT_PADDING;
use crate::{ debug_eprint, debug_print };

use dioxus::prelude::*;

pub fn app() -> Element {
    // Loading state to prevent FOUC while the Tailwind runtime compiles
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            Delay::ms(150).await;
            is_loading.set(false);
        });
    });

    let config = use_config_provider(AppConfig::load);
    let update_config = use_hook(move || create_config_updater(config));

    // One clipboard for every copy button in the tree
    use_context_provider(ClipboardSource::system);

    let mut theme = use_theme();
    use_hook(move || theme.set(config.peek().theme));

    let mut current = use_signal(move || FamilyHandle(config.peek().start_family()));
    let ack_delay = config.read().ack_delay();

    rsx! {
      Header {}

      if is_loading() {
        div { style: "position: fixed; inset: 0; z-index: 99999; display: flex; align-items: center; justify-content: center; background: #1a1a1a;",
          div { style: "width: 3rem; height: 3rem; border: 4px solid rgba(255, 255, 255, 0.2); border-top-color: rgba(255, 255, 255, 0.9); border-radius: 50%; animation: spin 1s linear infinite;" }
        }
        style { "@keyframes spin {{ to {{ transform: rotate(360deg); }} }}" }
      }

      div {
        class: "flex h-screen bg-base-100 text-base-content",
        "data-theme": theme().to_daisy_theme(),
        Sidebar {
          families: families::handles(),
          active: current().id().to_string(),
          on_select: move |id: String| {
              let Some(family) = families::find(&id) else {
                  debug_eprint!("⚠️ Unknown family: {}", id);
                  return;
              };
              debug_print!("📖 Showing {}", id);
              current.set(FamilyHandle(family));
              update_config(
                  Box::new(move |config: &mut AppConfig| {
                      config.last_family = id;
                  }),
              );
          },
        }
        main { class: "flex-1 overflow-y-auto {CONTENT_PADDING}",
          div { class: "mx-auto max-w-5xl",
            UtilityPage { key: "{current().id()}", family: current(), ack_delay }
          }
        }
      }
    }
}
