use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PageHeaderProps {
    pub title: String,
    #[props(optional)]
    pub subtitle: Option<String>,
    #[props(optional)]
    pub icon: Option<Element>,
    /// Buttons aligned to the right of the title
    #[props(optional)]
    pub actions: Option<Element>,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
      header { class: "flex items-center gap-4",
        if let Some(icon) = props.icon {
          div { class: "p-3 bg-base-300 rounded-full flex-shrink-0", {icon} }
        }
        div { class: "flex-1 min-w-0",
          h1 { class: "text-2xl leading-tight font-bold text-base-content", "{props.title}" }
          if let Some(subtitle) = props.subtitle {
            p { class: "text-base-content/60 leading-snug mt-1", "{subtitle}" }
          }
        }
        if let Some(actions) = props.actions {
          div { class: "flex items-center gap-2 flex-shrink-0", {actions} }
        }
      }
    }
}
