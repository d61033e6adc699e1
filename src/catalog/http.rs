/// HTTP implementation of the show catalog.
use super::wire::WireShow;
use super::{CatalogError, Show, ShowCatalog};

/// Catalog backend talking to the companion REST server.
///
/// The server exposes the catalog as a JSON array at `GET {base}/shows` and
/// accepts new records via `POST {base}/shows`. Show images are served
/// statically from `{base}/images/`.
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Address the companion server listens on by default.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";

    /// Creates a catalog backed by the server at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the base URL of the catalog server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps a non-success HTTP status to a catalog error.
    fn status_error(response: &reqwest::blocking::Response) -> CatalogError {
        CatalogError::RequestError(format!(
            "HTTP {} {}",
            response.status().as_u16(),
            response.status().canonical_reason().unwrap_or("Unknown")
        ))
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl ShowCatalog for HttpCatalog {
    fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/shows", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::status_error(&response));
        }

        let shows: Vec<WireShow> = response
            .json()
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Ok(shows.into_iter().map(Show::from).collect())
    }

    fn create_show(&self, show: &Show) -> Result<(), CatalogError> {
        let url = format!("{}/shows", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&WireShow::from(show))
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::status_error(&response));
        }

        Ok(())
    }
}
