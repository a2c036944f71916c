//! Defines the route handler for the page for creating a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
    timezone::local_today,
    transaction::{Category, TransactionType},
};

/// Render the form for creating a transaction.
///
/// `alert` is shown above the form, e.g. to explain why the last submission
/// was rejected.
pub(super) fn create_transaction_view(today: Date, alert: Option<Markup>) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            @if let Some(alert) = alert {
                (alert)
            }

            form
                method="post"
                action=(endpoints::TRANSACTIONS_API)
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Add a new transaction" }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }

                    div class=(FORM_RADIO_GROUP_STYLE)
                    {
                        @for (index, transaction_type) in TransactionType::ALL.iter().enumerate() {
                            label class=(FORM_RADIO_LABEL_STYLE)
                            {
                                input
                                    type="radio"
                                    name="transaction_type"
                                    value=(transaction_type)
                                    checked[index == 0];

                                (transaction_type)
                            }
                        }
                    }
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    select
                        name="category"
                        id="category"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description (optional)"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="Description"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Save transaction"
                }
            }
        }
    };

    base("Add Transaction", &content)
}

/// The state needed for the pages and endpoints that handle the transaction form.
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Dublin".
    pub local_timezone: String,
    /// The handle to the transaction database.
    pub store: crate::Store,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            store: state.store.clone(),
        }
    }
}

/// Renders the page for creating a transaction.
pub async fn get_create_transaction_page(
    State(state): State<TransactionFormState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    Ok(create_transaction_view(today, None).into_response())
}
