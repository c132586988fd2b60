use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Client-side pagination controls: Previous/Next, a page indicator, and a
/// rows-per-page select. `page` is 0-based; changing the page size snaps
/// back to the first page.
#[component]
pub fn Pagination(
    total: usize,
    total_pages: usize,
    page_sizes: Vec<usize>,
    mut page: Signal<usize>,
    mut per_page: Signal<usize>,
) -> Element {
    let current = *page.read();
    let size = *per_page.read();
    let page_display = current + 1;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            div { class: "pagination-size",
                label { class: "pagination-size-label", "Rows per page" }
                select {
                    class: "pagination-size-select",
                    value: "{size}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(next) = evt.value().parse::<usize>() {
                            per_page.set(next);
                            page.set(0);
                        }
                    },
                    for option_size in page_sizes.iter() {
                        option { value: "{option_size}", "{option_size}" }
                    }
                }
            }
            span { class: "pagination-info",
                "Page {page_display} of {total_pages} ({total} total)"
            }
            if current > 0 {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = *page.read();
                        page.set(current.saturating_sub(1));
                    },
                    "Previous"
                }
            }
            if current + 1 < total_pages {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = *page.read();
                        page.set(current + 1);
                    },
                    "Next"
                }
            }
        }
    }
}
