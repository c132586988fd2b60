use api_client::ApiClient;
use dioxus::prelude::*;
use shared_types::{
    daily_sales, page_count, page_slice, parse_report_date, payment_method_counts, sales_summary,
    Sale, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
use shared_ui::{
    BarChart, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ChartPoint,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DistributionChart, Input, PageHeader, PageTitle, Pagination, SearchBar, Skeleton,
};

use crate::auth::use_session;
use crate::fetch::RequestGeneration;
use crate::routes::Route;

/// Currency label used across the report views.
const CURRENCY: &str = "GHS";

/// Sales analytics: date-filtered transaction list, headline totals, and the
/// two aggregate charts. All aggregation happens client-side on the fetched
/// array.
#[component]
pub fn SalesReport() -> Element {
    let mut session = use_session();
    let client = use_context::<ApiClient>();

    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut sales = use_signal(Vec::<Sale>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut page = use_signal(|| 0usize);
    let mut per_page = use_signal(|| DEFAULT_PAGE_SIZE);
    let mut generation = RequestGeneration::new(use_signal(|| 0u64));

    let mut fetch_sales = move || {
        let start = start_date.peek().clone();
        let end = end_date.peek().clone();
        // Invalidate any in-flight fetch before deciding whether to dial out.
        let stamp = generation.begin();

        // No request until both range ends parse.
        if parse_report_date(&start).is_none() || parse_report_date(&end).is_none() {
            sales.set(Vec::new());
            error_msg.set(None);
            return;
        }
        let Some(token) = session.token() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let result = client.sales_report(&token, &start, &end).await;
            if !generation.is_current(stamp) {
                // A newer fetch owns the view now.
                return;
            }
            match result {
                Ok(list) => {
                    sales.set(list);
                    page.set(0);
                }
                Err(err) if err.is_auth_failure() => {
                    session.sign_out();
                    navigator().push(Route::Login {});
                }
                Err(err) => {
                    sales.set(Vec::new());
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        });
    };

    // Refetch whenever the date range changes (and once on entry).
    let mut fetch_on_change = fetch_sales.clone();
    use_effect(move || {
        let _ = start_date();
        let _ = end_date();
        fetch_on_change();
    });

    let sales_list: Vec<Sale> = sales();
    let summary = sales_summary(&sales_list);
    let daily_points: Vec<ChartPoint> = daily_sales(&sales_list)
        .into_iter()
        .map(|bucket| ChartPoint::new(bucket.date, bucket.total))
        .collect();
    let method_points: Vec<ChartPoint> = payment_method_counts(&sales_list)
        .into_iter()
        .map(|entry| ChartPoint::new(entry.method, entry.count as f64))
        .collect();

    let current_page = *page.read();
    let size = *per_page.read();
    let total = sales_list.len();
    let total_pages = page_count(total, size);
    let visible: Vec<Sale> = page_slice(&sales_list, current_page, size).to_vec();

    let dates_ready =
        parse_report_date(&start_date()).is_some() && parse_report_date(&end_date()).is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sales.css") }

        div { class: "sales-page",
            PageHeader {
                PageTitle { "Sales Analytics" }
            }

            SearchBar {
                Input {
                    label: "Start Date",
                    input_type: "date",
                    value: start_date(),
                    on_input: move |e: FormEvent| start_date.set(e.value()),
                }
                Input {
                    label: "End Date",
                    input_type: "date",
                    value: end_date(),
                    on_input: move |e: FormEvent| end_date.set(e.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| fetch_sales(),
                    "Filter Sales"
                }
            }

            if let Some(err) = error_msg() {
                div { class: "report-error", "{err}" }
            }

            div { class: "sales-stats-grid",
                StatCard {
                    label: "Total Sales",
                    value: format!("{CURRENCY} {:.2}", summary.total_revenue),
                }
                StatCard {
                    label: "Transactions",
                    value: format!("{}", summary.transaction_count),
                }
            }

            div { class: "sales-charts-grid",
                Card {
                    CardHeader {
                        CardTitle { "Daily Sales Performance" }
                    }
                    CardContent {
                        BarChart { points: daily_points, value_prefix: format!("{CURRENCY} ") }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Payment Methods Distribution" }
                    }
                    CardContent {
                        DistributionChart { points: method_points }
                    }
                }
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
                        p {
                            if dates_ready {
                                "No sales found for this range."
                            } else {
                                "Select a start and end date to load sales."
                            }
                        }
                    }
                }
            } else {
                SalesTable { sales: visible }
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

/// Headline figure with a caption underneath.
#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    span { class: "stat-card-value", "{value}" }
                    span { class: "stat-card-label", "{label}" }
                }
            }
        }
    }
}

/// The paginated transaction table.
#[component]
fn SalesTable(sales: Vec<Sale>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Items" }
                DataTableColumn { "Total Amount ({CURRENCY})" }
                DataTableColumn { "Payment Method" }
                DataTableColumn { "Date" }
            }
            DataTableBody {
                for sale in sales {
                    {
                        let items_label = sale
                            .items
                            .iter()
                            .map(|item| format!("{} (x{})", item.name, item.quantity))
                            .collect::<Vec<_>>()
                            .join(", ");
                        let method = sale
                            .payment_method
                            .clone()
                            .unwrap_or_else(|| "N/A".to_string());
                        rsx! {
                            DataTableRow {
                                DataTableCell { "{sale.id}" }
                                DataTableCell { "{items_label}" }
                                DataTableCell { "{sale.total_amount:.2}" }
                                DataTableCell { "{method}" }
                                DataTableCell { "{sale.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
