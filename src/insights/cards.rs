//! Metric cards summarising a month's totals.

use maud::{Markup, html};

use crate::{MonthlySummary, html::format_currency};

fn metric_card(label: &str, amount: f64) -> Markup {
    html! {
        div
            class="flex-1 p-4 bg-white border border-gray-200 rounded-lg shadow-sm
                dark:bg-gray-800 dark:border-gray-700"
            data-metric=(label)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            p class="text-2xl font-semibold" { (format_currency(amount)) }
        }
    }
}

/// Renders the total income, total expenses and net savings for a month.
pub(super) fn key_metrics_view(summary: &MonthlySummary) -> Markup {
    html! {
        section class="w-full"
        {
            h3 class="text-lg font-semibold mb-2" { "Key metrics" }

            div class="flex flex-col sm:flex-row gap-4"
            {
                (metric_card("Total income", summary.income))
                (metric_card("Total expenses", summary.expenses))
                (metric_card("Net savings", summary.net))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{MonthlySummary, insights::cards::key_metrics_view};

    #[test]
    fn shows_all_three_metrics() {
        let summary = MonthlySummary {
            income: 1000.0,
            expenses: 500.0,
            net: 500.0,
            categories: vec![],
        };

        let fragment = Html::parse_fragment(&key_metrics_view(&summary).into_string());

        let selector = Selector::parse("[data-metric]").unwrap();
        let labels: Vec<_> = fragment
            .select(&selector)
            .filter_map(|card| card.value().attr("data-metric"))
            .collect();
        assert_eq!(labels, vec!["Total income", "Total expenses", "Net savings"]);
    }
}
