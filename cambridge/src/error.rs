use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition of the requested operation was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The dictionary has no entry for the word.
    #[error("could not find word '{word}'")]
    NotFound {
        /// The word that was looked up.
        word: String,
    },
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("unexpected response status {status} from {url}")]
    Status {
        /// The status code returned by the server.
        status: reqwest::StatusCode,
        /// The URL that was requested.
        url: String,
    },
    #[cfg(feature = "client")]
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
