use dioxus::prelude::*;

/// Form label.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "label", r#for: "{html_for}", {children} }
    }
}
