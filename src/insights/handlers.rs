//! Insights HTTP handler and view rendering.

use std::ops::RangeInclusive;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// axum_extra's Query reads an empty parameter such as `year=` as None.
use axum_extra::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, Month};

use crate::{
    AppState, Error, MonthlySummary, Store, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base},
    insights::{cards::key_metrics_view, tables::category_table_view},
    navigation::NavBar,
    timezone::local_today,
};

/// The state needed for displaying the insights page.
#[derive(Debug, Clone)]
pub struct InsightsState {
    /// The handle to the transaction database.
    pub store: Store,
    /// The local timezone as a canonical timezone name, e.g. "Europe/Dublin".
    pub local_timezone: String,
}

impl FromRef<AppState> for InsightsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The month selected by the user. Missing values default to the current
/// year and month.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    /// The calendar year, e.g. 2024.
    pub year: Option<i32>,
    /// The month number from 1 to 12.
    pub month: Option<u8>,
}

/// A calendar month to summarise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Period {
    year: i32,
    month: Month,
}

impl Period {
    /// Fill in the blanks in `query` from `today`.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if the month is not a number from 1 to 12.
    fn from_query(query: &PeriodQuery, today: Date) -> Result<Self, Error> {
        let month_number = query.month.unwrap_or_else(|| u8::from(today.month()));
        let month =
            Month::try_from(month_number).map_err(|_| Error::InvalidMonth(month_number))?;

        Ok(Self {
            year: query.year.unwrap_or_else(|| today.year()),
            month,
        })
    }
}

/// The years offered in the year select: last year, this year and next year,
/// plus the selected year if it is outside of that range.
fn year_options(today: Date, selected_year: i32) -> Vec<i32> {
    let range: RangeInclusive<i32> = (today.year() - 1)..=(today.year() + 1);
    let mut years: Vec<i32> = range.clone().collect();

    if !range.contains(&selected_year) {
        years.push(selected_year);
        years.sort_unstable();
    }

    years
}

fn period_form(period: Period, years: &[i32]) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::INSIGHTS_VIEW)
            class="w-full flex flex-col sm:flex-row gap-4 items-end"
        {
            div class="flex-1"
            {
                label for="year" class=(FORM_LABEL_STYLE) { "Year" }

                select name="year" id="year" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for year in years {
                        option value=(year) selected[*year == period.year] { (year) }
                    }
                }
            }

            div class="flex-1"
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month (1–12)" }

                select name="month" id="month" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for month_number in 1..=12u8 {
                        option value=(month_number) selected[month_number == u8::from(period.month)]
                        {
                            (month_number)
                        }
                    }
                }
            }

            div class="flex-1"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Show" }
            }
        }
    }
}

fn insights_view(period: Period, years: &[i32], summary: &MonthlySummary) -> Markup {
    let nav_bar = NavBar::new(endpoints::INSIGHTS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-6"
            {
                h2 class="text-xl font-bold" { "Monthly insights" }

                (period_form(period, years))
                (key_metrics_view(summary))
                (category_table_view(&summary.categories))
            }
        }
    };

    base("Monthly Insights", &content)
}

/// Display the totals for the month selected in the query string.
pub async fn get_insights_page(
    State(state): State<InsightsState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let period = Period::from_query(&query, today)?;

    let summary = state.store.monthly_summary(period.year, period.month)?;

    let years = year_options(today, period.year);

    Ok(insights_view(period, &years, &summary).into_response())
}


#[cfg(test)]
mod view_tests {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use axum_extra::extract::Query;
    use scraper::{Html, Selector};
    use tempfile::TempDir;
    use time::{Date, macros::date};

    use crate::{
        Amount, Category, Store, Transaction, TransactionType,
        insights::{
            get_insights_page,
            handlers::{InsightsState, PeriodQuery},
        },
    };

    fn get_test_state() -> (TempDir, InsightsState) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("budget.db"));
        store.initialize().unwrap();

        let state = InsightsState {
            store,
            local_timezone: "Etc/UTC".to_owned(),
        };

        (dir, state)
    }

    fn insert(
        store: &Store,
        date: Date,
        transaction_type: TransactionType,
        amount: f64,
        category: Category,
    ) {
        store
            .insert(Transaction::build(
                date,
                Amount::new(amount).unwrap(),
                transaction_type,
                category,
            ))
            .unwrap();
    }

    fn april_2024() -> Query<PeriodQuery> {
        Query(PeriodQuery {
            year: Some(2024),
            month: Some(4),
        })
    }

    #[tokio::test]
    async fn shows_totals_and_categories_for_month() {
        let (_dir, state) = get_test_state();
        insert(
            &state.store,
            date!(2024 - 04 - 01),
            TransactionType::Income,
            1000.0,
            Category::Savings,
        );
        insert(
            &state.store,
            date!(2024 - 04 - 02),
            TransactionType::Expense,
            200.0,
            Category::Groceries,
        );
        insert(
            &state.store,
            date!(2024 - 04 - 03),
            TransactionType::Expense,
            300.0,
            Category::Rent,
        );
        insert(
            &state.store,
            date!(2024 - 05 - 01),
            TransactionType::Expense,
            50.0,
            Category::Groceries,
        );

        let response = get_insights_page(State(state), april_2024()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let document = parse_html(response).await;
        assert_eq!(
            category_rows(&document),
            vec![
                ("Groceries".to_owned(), "200.00".to_owned()),
                ("Rent".to_owned(), "300.00".to_owned()),
            ]
        );
        assert_eq!(selected_value(&document, "year"), Some("2024".to_owned()));
        assert_eq!(selected_value(&document, "month"), Some("4".to_owned()));
    }

    #[tokio::test]
    async fn net_savings_of_float_noise_is_zero() {
        let (_dir, state) = get_test_state();
        insert(
            &state.store,
            date!(2024 - 04 - 01),
            TransactionType::Income,
            0.30,
            Category::Savings,
        );
        insert(
            &state.store,
            date!(2024 - 04 - 02),
            TransactionType::Expense,
            0.10,
            Category::Groceries,
        );
        insert(
            &state.store,
            date!(2024 - 04 - 03),
            TransactionType::Expense,
            0.20,
            Category::Groceries,
        );

        let response = get_insights_page(State(state), april_2024()).await.unwrap();

        let document = parse_html(response).await;
        assert_eq!(metric_value(&document, "Total income"), "€0.30");
        assert_eq!(metric_value(&document, "Total expenses"), "€0.30");
        assert_eq!(metric_value(&document, "Net savings"), "€0.00");
    }

    #[tokio::test]
    async fn empty_month_shows_message() {
        let (_dir, state) = get_test_state();

        let response = get_insights_page(State(state), april_2024()).await.unwrap();

        let document = parse_html(response).await;
        assert!(category_rows(&document).is_empty());
        let text = document.root_element().text().collect::<String>();
        assert!(
            text.contains("No transactions found for this month."),
            "got {text}"
        );
    }

    #[tokio::test]
    async fn invalid_month_is_bad_request() {
        let (_dir, state) = get_test_state();
        let query = Query(PeriodQuery {
            year: Some(2024),
            month: Some(13),
        });

        let response = get_insights_page(State(state), query)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn category_rows(document: &Html) -> Vec<(String, String)> {
        let row_selector = Selector::parse("tbody tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        document
            .select(&row_selector)
            .map(|row| {
                let cells: Vec<String> = row
                    .select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect();
                (cells[0].clone(), cells[1].clone())
            })
            .collect()
    }

    fn metric_value(document: &Html, label: &str) -> String {
        let selector =
            Selector::parse(&format!("[data-metric=\"{label}\"] p.text-2xl")).unwrap();

        document
            .select(&selector)
            .next()
            .map(|value| value.text().collect::<String>().trim().to_owned())
            .unwrap_or_default()
    }

    fn selected_value(document: &Html, select_name: &str) -> Option<String> {
        let selector =
            Selector::parse(&format!("select[name={select_name}] option[selected]")).unwrap();

        document
            .select(&selector)
            .next()
            .and_then(|option| option.value().attr("value"))
            .map(str::to_owned)
    }

    async fn parse_html(response: Response) -> Html {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();
        let document = Html::parse_document(&text);
        assert!(
            document.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            document.errors
        );

        document
    }
}
