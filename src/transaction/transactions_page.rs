//! The page listing every transaction.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error, Store,
    alert::Alert,
    endpoints,
    html::{
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE,
        base,
    },
    navigation::NavBar,
    transaction::{Transaction, TransactionId},
};

/// The query parameters for the transactions page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// The ID of a transaction that was just created, if any.
    pub created: Option<TransactionId>,
}

fn transactions_view(transactions: &[Transaction], created: Option<TransactionId>) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let table_row = |transaction: &Transaction| {
        html! {
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (transaction.id) }
                td class=(TABLE_CELL_STYLE) { (transaction.date) }
                td class=(TABLE_CELL_STYLE) { (transaction.description.as_deref().unwrap_or_default()) }
                td class={(TABLE_CELL_STYLE) " text-right"} { (format!("{:.2}", transaction.amount)) }
                td class=(TABLE_CELL_STYLE) { (transaction.transaction_type) }
                td class=(TABLE_CELL_STYLE) { (transaction.category) }
            }
        }
    };

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                h2 class="text-xl font-bold" { "All transactions" }

                @if created.is_some() {
                    (Alert::success("Transaction saved!", "").into_html())
                }

                @if transactions.is_empty() {
                    (Alert::info(
                        "No transactions yet. Add your first one on the 'Add transaction' page."
                    ).into_html())
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded-lg"
                    {
                        table class=(TABLE_STYLE)
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                    th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                }
                            }

                            tbody
                            {
                                @for transaction in transactions {
                                    (table_row(transaction))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &content)
}

/// Render an overview of all the user's transactions, newest first.
pub async fn get_transactions_page(
    State(store): State<Store>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let transactions = store.list_all()?;

    Ok(transactions_view(&transactions, query.created).into_response())
}
