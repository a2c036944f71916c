//! Full page responses for errors, e.g. 404 Not Found.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining what went wrong and what the user can do about it.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. You'll find lots to explore on the home page.",
        }
    }

    pub fn bad_request(description: &'a str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            description,
            fix: "Check your input and try again.",
        }
    }

    pub fn internal_server_error(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal_server_error(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let markup = error_view(title, self.status.as_str(), self.description, self.fix);

        (self.status, markup).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}
