use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{
    filter_inventory, page_count, page_slice, InventoryItem, StockStatus, DEFAULT_PAGE_SIZE,
    PAGE_SIZES,
};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Input, Label, PageHeader, PageTitle,
    Pagination, SearchBar, Skeleton,
};

use crate::auth::use_session;
use crate::fetch::RequestGeneration;
use crate::routes::Route;

/// Badge color per stock status.
fn status_badge_variant(status: StockStatus) -> BadgeVariant {
    match status {
        StockStatus::InStock => BadgeVariant::Primary,
        StockStatus::LowStock => BadgeVariant::Outline,
        StockStatus::OutOfStock => BadgeVariant::Destructive,
    }
}

/// Inventory report: searchable, status-filtered, client-side paginated
/// stock list. Fetches unconditionally on entry.
#[component]
pub fn Inventory() -> Element {
    let mut session = use_session();
    let client = use_context::<ApiClient>();

    let mut items = use_signal(Vec::<InventoryItem>::new);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut page = use_signal(|| 0usize);
    let mut per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let mut generation = RequestGeneration::new(use_signal(|| 0u64));

    use_effect(move || {
        let stamp = generation.begin();
        let Some(token) = session.token() else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let result = client.inventory_report(&token).await;
            if !generation.is_current(stamp) {
                return;
            }
            match result {
                Ok(list) if list.is_empty() => {
                    items.set(Vec::new());
                    error_msg.set(Some("No inventory available.".to_string()));
                }
                Ok(list) => items.set(list),
                Err(err) if err.is_auth_failure() => {
                    session.sign_out();
                    navigator().push(Route::Login {});
                }
                Err(err) => {
                    items.set(Vec::new());
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        });
    });

    let all_items: Vec<InventoryItem> = items();
    let query = search();
    let wanted = StockStatus::from_label(&status_filter());

    let filtered = filter_inventory(&all_items, &query, wanted);
    let current_page = *page.read();
    let size = *per_page.read();
    let total = filtered.len();
    let total_pages = page_count(total, size);
    let visible: Vec<InventoryItem> = page_slice(&filtered, current_page, size)
        .iter()
        .map(|item| (*item).clone())
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./inventory.css") }

        div { class: "inventory-page",
            PageHeader {
                PageTitle { "Inventory Management" }
            }

            SearchBar {
                Input {
                    label: "Search",
                    value: search(),
                    placeholder: "Search inventory...",
                    on_input: move |e: FormEvent| {
                        search.set(e.value());
                        page.set(0);
                    },
                }
                div { class: "inventory-filter-group",
                    Label { html_for: "status-filter", "Filter by Status" }
                    select {
                        id: "status-filter",
                        class: "inventory-filter-select",
                        value: "{status_filter}",
                        onchange: move |e: Event<FormData>| {
                            status_filter.set(e.value());
                            page.set(0);
                        },
                        option { value: "all", "All Statuses" }
                        option { value: "In Stock", "In Stock" }
                        option { value: "Low Stock", "Low Stock" }
                        option { value: "Out of Stock", "Out of Stock" }
                    }
                }
            }

            if let Some(err) = error_msg() {
                div { class: "report-error", "{err}" }
            }

            if loading() {
                div { class: "report-loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else if visible.is_empty() {
                Card {
                    CardContent {
                        p { "No items match the current filters." }
                    }
                }
            } else {
                InventoryTable { items: visible }
                Pagination {
                    total,
                    total_pages,
                    page_sizes: PAGE_SIZES.to_vec(),
                    page,
                    per_page,
                }
            }
        }
    }
}

/// The paginated stock table.
#[component]
fn InventoryTable(items: Vec<InventoryItem>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Product Name" }
                DataTableColumn { "Stock Level" }
                DataTableColumn { "Status" }
                DataTableColumn { "Price" }
            }
            DataTableBody {
                for item in items {
                    {
                        let variant = status_badge_variant(item.status);
                        let status_label = item.status.as_str();
                        rsx! {
                            DataTableRow {
                                DataTableCell { "{item.id}" }
                                DataTableCell { "{item.name}" }
                                DataTableCell { "{item.quantity}" }
                                DataTableCell {
                                    Badge { variant, "{status_label}" }
                                }
                                DataTableCell { "GHS {item.price:.2}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
