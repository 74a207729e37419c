use crate::utils::constants::{ APP_NAME, DAISYUI_CSS_URL, TAILWIND_BROWSER_URL };
use dioxus::prelude::*;

/// Scrollbar and code font tweaks the utility classes cannot express
const GLOBAL_STYLES_CSS: &str =
    r#"
html, body { margin: 0; height: 100%; }
pre, code { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
::-webkit-scrollbar { width: 8px; height: 8px; }
::-webkit-scrollbar-thumb { border-radius: 4px; background: color-mix(in oklab, currentColor 25%, transparent); }
"#;

/// Document head: daisyUI styles plus the Tailwind browser runtime, which
/// compiles any class that appears in the DOM, including ones typed into a
/// playground.
#[component]
pub fn Header() -> Element {
    rsx! {
      document::Title { "{APP_NAME}" }
      document::Stylesheet { href: DAISYUI_CSS_URL }
      document::Script { src: TAILWIND_BROWSER_URL }
      style { dangerous_inner_html: GLOBAL_STYLES_CSS }
    }
}
