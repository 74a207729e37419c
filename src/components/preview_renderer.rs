use crate::libs::preview::{ PreviewNode, PreviewTag };
use dioxus::prelude::*;

/// Render a [`PreviewNode`] tree as live elements
#[component]
pub fn PreviewRenderer(node: PreviewNode) -> Element {
    let class = node.class_attr();
    let style = node.style.clone().unwrap_or_default();
    let text = node.text.clone();
    let children = node.children.clone();

    match node.tag {
        PreviewTag::Div =>
            rsx! {
              div { class: "{class}", style: "{style}",
                if let Some(text) = text { "{text}" }
                for child in children {
                  PreviewRenderer { node: child }
                }
              }
            },
        PreviewTag::Span =>
            rsx! {
              span { class: "{class}", style: "{style}",
                if let Some(text) = text { "{text}" }
                for child in children {
                  PreviewRenderer { node: child }
                }
              }
            },
        PreviewTag::P =>
            rsx! {
              p { class: "{class}", style: "{style}",
                if let Some(text) = text { "{text}" }
                for child in children {
                  PreviewRenderer { node: child }
                }
              }
            },
        PreviewTag::Button =>
            rsx! {
              button { class: "{class}", style: "{style}", r#type: "button",
                if let Some(text) = text { "{text}" }
                for child in children {
                  PreviewRenderer { node: child }
                }
              }
            },
    }
}
