//! Alert boxes for showing success and error messages on a page.

use maud::{Markup, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Success,
    Error,
    Info,
}

/// A message shown to the user above or within a page.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    /// Create an informational alert without details
    pub fn info(message: &'a str) -> Self {
        Self {
            alert_type: AlertType::Info,
            message,
            details: "",
        }
    }

    pub fn into_html(self) -> Markup {
        let style = match self.alert_type {
            AlertType::Success => {
                "p-4 mb-4 text-sm rounded-lg text-green-800 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400"
            }
            AlertType::Error => {
                "p-4 mb-4 text-sm rounded-lg text-red-800 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400"
            }
            AlertType::Info => {
                "p-4 mb-4 text-sm rounded-lg text-blue-800 bg-blue-50 \
                dark:bg-gray-800 dark:text-blue-400"
            }
        };
        let role = match self.alert_type {
            AlertType::Error => "alert",
            _ => "status",
        };

        html! {
            div class={"w-full " (style)} role=(role)
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    " " (self.details)
                }
            }
        }
    }
}
