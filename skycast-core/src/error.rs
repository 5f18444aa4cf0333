use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single lookup.
///
/// `LocationNotFound` is user-correctable and the shells render it as such;
/// the remaining variants are transport-level failures at one of the two
/// upstream services. A successful response with missing fields is not an
/// error at all — gaps are carried through the reading as `None`.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The geocoder returned no match for the requested city.
    #[error("could not find location for '{0}'")]
    LocationNotFound(String),

    /// The request never produced a usable HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("failed to parse {service} response: {source}")]
    Parse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    /// True for the "no such place" outcome, false for transport failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::LocationNotFound(_))
    }
}
