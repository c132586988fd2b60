use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{InventoryItem, Sale, StockStatus};

/// Page-size choices offered by the report tables.
pub const PAGE_SIZES: &[usize] = &[10, 25, 50];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Revenue bucket for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySales {
    pub date: String,
    pub total: f64,
}

/// Occurrence count for one payment method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethodCount {
    pub method: String,
    pub count: usize,
}

/// Headline aggregates for the sales view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub transaction_count: usize,
}

/// Validate a report date input. The fetch guard only fires when both range
/// ends parse.
pub fn parse_report_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Filter the inventory list by a case-insensitive substring match on the
/// item name and an exact status match (`None` keeps every status).
pub fn filter_inventory<'a>(
    items: &'a [InventoryItem],
    search: &str,
    status: Option<StockStatus>,
) -> Vec<&'a InventoryItem> {
    let query = search.to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
        .filter(|item| status.is_none_or(|wanted| item.status == wanted))
        .collect()
}

/// Slice one page out of an already-filtered list: elements
/// `[page * per_page, page * per_page + per_page)`, clipped to the array
/// bounds. `page` is 0-based; an out-of-range page yields an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed to display `len` rows, at least 1.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Group sales by calendar date, summing `total_amount` per bucket.
/// Buckets come back sorted by date (ISO strings sort chronologically).
pub fn daily_sales(sales: &[Sale]) -> Vec<DailySales> {
    let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();
    for sale in sales {
        *buckets.entry(sale.calendar_date()).or_insert(0.0) += sale.total_amount;
    }
    buckets
        .into_iter()
        .map(|(date, total)| DailySales {
            date: date.to_string(),
            total,
        })
        .collect()
}

/// Count sales per payment method, with missing methods grouped under
/// "Unknown". Sorted by descending count, then method name for stable order.
pub fn payment_method_counts(sales: &[Sale]) -> Vec<PaymentMethodCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sale in sales {
        *counts.entry(sale.payment_method_label()).or_insert(0) += 1;
    }
    let mut out: Vec<PaymentMethodCount> = counts
        .into_iter()
        .map(|(method, count)| PaymentMethodCount {
            method: method.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.method.cmp(&b.method)));
    out
}

/// Headline totals across the fetched range.
pub fn sales_summary(sales: &[Sale]) -> SalesSummary {
    SalesSummary {
        total_revenue: sales.iter().map(|s| s.total_amount).sum(),
        transaction_count: sales.len(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sale(id: i64, date: &str, amount: f64, method: Option<&str>) -> Sale {
        Sale {
            id,
            items: vec![],
            total_amount: amount,
            payment_method: method.map(str::to_string),
            date: date.to_string(),
        }
    }

    fn item(id: i64, name: &str, status: StockStatus) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity: 10,
            price: 1.0,
            status,
        }
    }

    #[test]
    fn parse_report_date_accepts_iso_dates_only() {
        assert!(parse_report_date("2024-01-31").is_some());
        assert!(parse_report_date("2024-02-30").is_none());
        assert!(parse_report_date("31/01/2024").is_none());
        assert!(parse_report_date("").is_none());
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let items = vec![
            item(1, "Milo Tin", StockStatus::InStock),
            item(2, "Milk Powder", StockStatus::LowStock),
            item(3, "Sugar", StockStatus::InStock),
        ];
        let hits = filter_inventory(&items, "mil", None);
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
        let hits = filter_inventory(&items, "MILK", None);
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn filter_combines_search_and_status() {
        let items = vec![
            item(1, "Milo Tin", StockStatus::InStock),
            item(2, "Milk Powder", StockStatus::LowStock),
            item(3, "Milk Chocolate", StockStatus::LowStock),
        ];
        let hits = filter_inventory(&items, "milk", Some(StockStatus::LowStock));
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3]);
        // status filter alone
        let hits = filter_inventory(&items, "", Some(StockStatus::InStock));
        assert_eq!(hits.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
        // "all" keeps everything
        assert_eq!(filter_inventory(&items, "", None).len(), 3);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let items = vec![item(1, "Milo Tin", StockStatus::InStock)];
        assert!(filter_inventory(&items, "bread", None).is_empty());
        assert!(filter_inventory(&items, "milo", Some(StockStatus::OutOfStock)).is_empty());
    }

    #[test]
    fn page_slice_returns_requested_window() {
        let rows: Vec<i32> = (0..25).collect();
        assert_eq!(page_slice(&rows, 0, 10), &rows[0..10]);
        assert_eq!(page_slice(&rows, 1, 10), &rows[10..20]);
        // final partial page clips to the array bounds
        assert_eq!(page_slice(&rows, 2, 10), &rows[20..25]);
    }

    #[test]
    fn page_slice_past_the_end_is_empty() {
        let rows: Vec<i32> = (0..5).collect();
        assert!(page_slice(&rows, 3, 10).is_empty());
        assert!(page_slice(&rows, usize::MAX, 10).is_empty());
        assert!(page_slice::<i32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn daily_sales_groups_and_sums_by_calendar_date() {
        let sales = vec![
            sale(1, "2024-01-01T09:00:00", 50.0, Some("Cash")),
            sale(2, "2024-01-01T15:30:00", 30.0, Some("Card")),
            sale(3, "2024-01-02T10:00:00", 20.0, Some("Cash")),
        ];
        let buckets = daily_sales(&sales);
        assert_eq!(
            buckets,
            vec![
                DailySales { date: "2024-01-01".into(), total: 80.0 },
                DailySales { date: "2024-01-02".into(), total: 20.0 },
            ]
        );
    }

    #[test]
    fn daily_sales_total_matches_input_sum() {
        let sales = vec![
            sale(1, "2024-03-01T08:00:00", 12.25, Some("Cash")),
            sale(2, "2024-03-01T09:00:00", 7.75, None),
            sale(3, "2024-03-04T09:00:00", 100.0, Some("Mobile Money")),
            sale(4, "2024-03-02T09:00:00", 0.5, Some("Card")),
        ];
        let bucket_sum: f64 = daily_sales(&sales).iter().map(|b| b.total).sum();
        let input_sum: f64 = sales.iter().map(|s| s.total_amount).sum();
        assert!((bucket_sum - input_sum).abs() < 1e-9);
    }

    #[test]
    fn payment_methods_count_occurrences_with_unknown_bucket() {
        let sales = vec![
            sale(1, "2024-01-01T09:00:00", 1.0, Some("Cash")),
            sale(2, "2024-01-01T10:00:00", 1.0, Some("Cash")),
            sale(3, "2024-01-01T11:00:00", 1.0, Some("Card")),
            sale(4, "2024-01-01T12:00:00", 1.0, None),
        ];
        let counts = payment_method_counts(&sales);
        assert_eq!(
            counts,
            vec![
                PaymentMethodCount { method: "Cash".into(), count: 2 },
                PaymentMethodCount { method: "Card".into(), count: 1 },
                PaymentMethodCount { method: "Unknown".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn sales_summary_totals_revenue_and_count() {
        let sales = vec![
            sale(1, "2024-01-01T09:00:00", 50.0, Some("Cash")),
            sale(2, "2024-01-02T09:00:00", 30.0, None),
        ];
        let summary = sales_summary(&sales);
        assert_eq!(summary.transaction_count, 2);
        assert!((summary.total_revenue - 80.0).abs() < 1e-9);

        let empty = sales_summary(&[]);
        assert_eq!(empty.transaction_count, 0);
        assert_eq!(empty.total_revenue, 0.0);
    }
}
