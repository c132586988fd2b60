use dioxus::prelude::*;

/// One labeled value for the chart components. Pages aggregate their report
/// data into these; the components only draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Vertical bar chart scaled against the largest value.
#[component]
pub fn BarChart(
    points: Vec<ChartPoint>,
    #[props(default)] value_prefix: String,
) -> Element {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let bars: Vec<(String, String, String)> = points
        .iter()
        .map(|p| {
            let pct = if max > 0.0 { p.value / max * 100.0 } else { 0.0 };
            (
                p.label.clone(),
                format!("{value_prefix}{:.2}", p.value),
                format!("height: {pct:.1}%"),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if bars.is_empty() {
            div { class: "chart-empty", "No data for this range." }
        } else {
            div { class: "bar-chart",
                for (label, value, height) in bars {
                    div { class: "bar-chart-col",
                        span { class: "bar-chart-value", "{value}" }
                        div { class: "bar-chart-track",
                            div { class: "bar-chart-bar", style: "{height}" }
                        }
                        span { class: "bar-chart-label", "{label}" }
                    }
                }
            }
        }
    }
}

/// Horizontal distribution chart: one row per point with a proportional bar.
#[component]
pub fn DistributionChart(points: Vec<ChartPoint>) -> Element {
    let total: f64 = points.iter().map(|p| p.value).sum();

    let rows: Vec<(String, String, String)> = points
        .iter()
        .map(|p| {
            let pct = if total > 0.0 { p.value / total * 100.0 } else { 0.0 };
            (
                p.label.clone(),
                format!("{:.0}", p.value),
                format!("width: {pct:.1}%"),
            )
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if rows.is_empty() {
            div { class: "chart-empty", "No data for this range." }
        } else {
            div { class: "distribution-chart",
                for (label, value, width) in rows {
                    div { class: "distribution-row",
                        span { class: "distribution-label", "{label}" }
                        div { class: "distribution-track",
                            div { class: "distribution-bar", style: "{width}" }
                        }
                        span { class: "distribution-value", "{value}" }
                    }
                }
            }
        }
    }
}
