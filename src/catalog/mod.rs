/// Data structures and traits for accessing the external show catalog.
///
/// This module provides the domain representation of a show record as held
/// by the companion REST server, as well as a trait for implementing
/// catalog backends.
mod http;
mod wire;

pub use http::HttpCatalog;

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog server failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the server's JSON response
    #[error("Failed to parse server response: {0}")]
    ParseError(String),
}

/// Represents a single show record in the catalog.
///
/// The record itself is owned and persisted by the companion server; this
/// structure is only a local view of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Numeric record identifier
    pub id: u64,
    /// The show name (letters, digits and underscore)
    pub name: String,
    /// The show code (one uppercase letter followed by digits)
    pub code: String,
    /// Absolute URL of the show's image, if it has one
    pub image_url: Option<String>,
}

/// Computes the identifier for the next show to be created.
///
/// Identifiers are assigned client-side as one past the highest identifier
/// currently in the catalog, starting at 1 for an empty catalog.
pub fn next_show_id(shows: &[Show]) -> u64 {
    shows.iter().map(|show| show.id).max().unwrap_or(0) + 1
}

/// Trait for backends that can read and extend the show catalog.
pub trait ShowCatalog {
    /// Fetches the complete list of shows from the catalog.
    fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError>;

    /// Adds a new show record to the catalog.
    ///
    /// The record is stored exactly as given, including its identifier;
    /// the server does not assign one.
    fn create_show(&self, show: &Show) -> Result<(), CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: u64) -> Show {
        Show {
            id,
            name: format!("show_{id}"),
            code: format!("S{id}"),
            image_url: None,
        }
    }

    #[test]
    fn test_next_show_id_empty_catalog() {
        assert_eq!(next_show_id(&[]), 1);
    }

    #[test]
    fn test_next_show_id_continues_after_highest() {
        let shows = vec![show(1), show(7), show(3)];
        assert_eq!(next_show_id(&shows), 8);
    }
}
