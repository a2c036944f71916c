//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    timezone::local_today,
    transaction::{
        Amount, Category, Transaction, TransactionBuilder, TransactionType,
        create_page::{TransactionFormState, create_transaction_view},
    },
};

/// The form data for creating a transaction.
///
/// The type and category arrive as free text and are only accepted if they
/// name a known [crate::TransactionType] and [crate::Category].
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The date when the transaction occurred.
    pub date: Date,
    /// "Income" or "Expense".
    pub transaction_type: String,
    /// The value of the transaction in euros, as typed by the user.
    pub amount: String,
    /// The display name of the category.
    pub category: String,
    /// Optional text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionForm {
    /// Validate the form and turn it into a transaction ready to be stored.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::AmountNotANumber] if the amount is blank or not a number,
    /// - [Error::InvalidAmount] if the amount is not greater than zero,
    /// - [Error::InvalidTransactionType] if the type is not recognised,
    /// - or [Error::InvalidCategory] if the category is not recognised.
    fn validate(self) -> Result<TransactionBuilder, Error> {
        let amount = Amount::parse(&self.amount)?;
        let transaction_type: TransactionType = self.transaction_type.parse()?;
        let category: Category = self.category.parse()?;

        let builder = Transaction::build(self.date, amount, transaction_type, category);

        Ok(match self.description {
            Some(description) => builder.description(&description),
            None => builder,
        })
    }
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
///
/// Invalid input re-renders the form with an explanation and creates nothing.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let builder = match form.validate() {
        Ok(builder) => builder,
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");
            return render_rejected_form(&state, &error);
        }
    };

    match state.store.insert(builder) {
        Ok(transaction) => Redirect::to(&format!(
            "{}?created={}",
            endpoints::TRANSACTIONS_VIEW,
            transaction.id
        ))
        .into_response(),
        Err(error) => error.into_response(),
    }
}

fn render_rejected_form(state: &TransactionFormState, error: &Error) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    let details = error.to_string();
    let alert = match error {
        Error::InvalidAmount(_) | Error::AmountNotANumber(_) => {
            Alert::error("Amount must be greater than zero.", "")
        }
        _ => Alert::error("Could not save transaction.", &details),
    };

    (
        StatusCode::BAD_REQUEST,
        create_transaction_view(today, Some(alert.into_html())),
    )
        .into_response()
}
