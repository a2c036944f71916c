//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;

use crate::{Error, Store};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Europe/Dublin".
    pub local_timezone: String,

    /// The handle to the transaction database.
    pub store: Store,
}

impl AppState {
    /// Create a new [AppState] backed by `store`.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Europe/Dublin".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(store: Store, local_timezone: &str) -> Result<Self, Error> {
        store.initialize()?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            store,
        })
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
