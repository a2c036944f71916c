//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    insights::get_insights_page,
    transaction::{
        create_transaction_endpoint, get_create_transaction_page, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::NEW_TRANSACTION_VIEW,
            get(get_create_transaction_page),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::INSIGHTS_VIEW, get(get_insights_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the form for adding a transaction.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::NEW_TRANSACTION_VIEW)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::{AppState, Store, build_router, endpoints};

    fn get_test_server() -> (TempDir, TestServer) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("budget.db"));
        let state = AppState::new(store, "Etc/UTC").unwrap();
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        (dir, server)
    }

    #[tokio::test]
    async fn root_redirects_to_new_transaction_page() {
        let (_dir, server) = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::NEW_TRANSACTION_VIEW);
    }

    #[tokio::test]
    async fn pages_are_served() {
        let (_dir, server) = get_test_server();

        for uri in [
            endpoints::NEW_TRANSACTION_VIEW,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::INSIGHTS_VIEW,
        ] {
            server.get(uri).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn submitted_form_is_listed() {
        let (_dir, server) = get_test_server();
        let form = [
            ("date", "2024-03-05"),
            ("transaction_type", "Expense"),
            ("amount", "12.50"),
            ("category", "Groceries"),
            ("description", "milk"),
        ];

        let response = server.post(endpoints::TRANSACTIONS_API).form(&form).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/transactions?created=1");
        let page = server.get("/transactions?created=1").await;
        page.assert_status_ok();
        let text = page.text();
        assert!(text.contains("milk"), "got {text}");
        assert!(text.contains("Transaction saved!"), "got {text}");
    }

    #[tokio::test]
    async fn blank_description_is_accepted() {
        let (_dir, server) = get_test_server();
        let form = [
            ("date", "2024-04-01"),
            ("transaction_type", "Income"),
            ("amount", "1000"),
            ("category", "Savings"),
            ("description", ""),
        ];

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&form)
            .await
            .assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn blank_amount_shows_form_with_error() {
        let (_dir, server) = get_test_server();
        let form = [
            ("date", "2024-03-05"),
            ("transaction_type", "Expense"),
            ("amount", ""),
            ("category", "Groceries"),
            ("description", ""),
        ];

        let response = server.post(endpoints::TRANSACTIONS_API).form(&form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let text = response.text();
        assert!(text.contains("Amount must be greater than zero."), "got {text}");
        assert!(text.contains("Add a new transaction"), "got {text}");
    }

    #[tokio::test]
    async fn blank_period_defaults_to_current_month() {
        let (_dir, server) = get_test_server();

        server
            .get("/insights?year=&month=")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn invalid_month_is_bad_request() {
        let (_dir, server) = get_test_server();

        server
            .get("/insights?year=2024&month=13")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (_dir, server) = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
