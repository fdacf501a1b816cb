//! A client for looking up words in the Cambridge English Dictionary.
//!
//! This module provides a high-level async interface for fetching dictionary pages and parsing
//! them into structured data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{ClientBuilder, StatusCode, header::LOCATION, redirect::Policy};
use tracing::{debug, info, warn};
use url::Url;

use crate::{DictionaryDocument, Error};

/// The base URL of the English dictionary. Words are looked up by appending them to it.
pub const BASE_URL: &str = "https://dictionary.cambridge.org/dictionary/english/";
/// The `User-Agent` header to send when issuing HTTP requests.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/119.0";
/// The duration before a HTTP request times out.
pub const TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can fetch the raw dictionary page for a word.
#[async_trait]
pub trait Fetch {
    /// Fetches the page for `word` and returns its HTML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the dictionary has no page for `word`. Other errors depend on
    /// the implementation.
    async fn fetch(&self, word: &str) -> Result<String, Error>;

    /// Whether a fetch that fails with an unexpected status should be retried with the word in
    /// lower case.
    fn retries_lowercase(&self) -> bool {
        true
    }
}

/// An asynchronous client for the Cambridge English Dictionary.
///
/// This client handles the construction of HTTP requests, sending them to the dictionary, and
/// parsing the HTML response.
#[derive(Debug)]
pub struct Client {
    /// The base URL that words are appended to.
    base_url: String,
    /// Whether to retry failed lookups with the word in lower case.
    lowercase_retry: bool,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// This method provides a convenient way to create a client. It configures gzip support, a
    /// browser user agent, a 30-second timeout, and disables redirects.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build. See
    /// [`ClientBuilder::build`] for more details on potential failures.
    pub fn try_new() -> Result<Client, Error> {
        let client = builder().build().map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// The given client should not follow redirects, as a redirect to the dictionary's front page
    /// is how missing words are detected. See [`builder`] for a suitably configured builder.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = String::from(BASE_URL);

        Client {
            base_url,
            lowercase_retry: true,
            client,
        }
    }

    /// Sets the base URL that words are appended to.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Client {
        self.base_url = base_url.into();
        self
    }

    /// Sets whether lookups that fail with an unexpected status are retried with the word in
    /// lower case.
    #[must_use]
    pub fn lowercase_retry(mut self, enabled: bool) -> Client {
        self.lowercase_retry = enabled;
        self
    }

    /// Returns the URL of the page for `word`.
    ///
    /// The word is appended as a single path segment below the base URL, so characters such as
    /// `:`, `/` and `?` are percent-encoded rather than interpreted.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`]: If the base URL is malformed.
    /// - [`Error::InvalidInput`]: If the base URL can't have a path, or `word` is `.` or `..`,
    ///   which would resolve to a page outside the base URL.
    pub fn word_url(&self, word: &str) -> Result<Url, Error> {
        if matches!(word, "." | "..") {
            return Err(Error::InvalidInput(format!("'{word}' is not a word")));
        }

        let mut url = Url::parse(&self.base_url)?;

        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidInput(format!("{} can't be used as a base url", self.base_url))
            })?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    /// Looks up `word` and returns the parsed page.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`]: If `word` is empty.
    /// - [`Error::NotFound`]: If the dictionary doesn't know the word.
    /// - [`Error::Status`]: If the server responds with an unexpected status, also after retrying
    ///   in lower case.
    /// - [`Error::Request`]: If the HTTP request fails due to network issues or a timeout.
    pub async fn query(&self, word: &str) -> Result<DictionaryDocument, Error> {
        let body = fetch_with_retry(self, word).await?;

        Ok(DictionaryDocument::from_html(&body))
    }
}

#[async_trait]
impl Fetch for Client {
    async fn fetch(&self, word: &str) -> Result<String, Error> {
        if word.trim().is_empty() {
            return Err(Error::InvalidInput("word must not be empty".to_string()));
        }

        let url = self.word_url(word)?;

        info!(%url, "requesting page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Request)?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok());

        check_response(response.status(), location, &self.base_url, word, url.as_str())?;

        let body = response.text().await.map_err(Error::Request)?;

        debug!(len = body.len(), "received page");

        Ok(body)
    }

    fn retries_lowercase(&self) -> bool {
        self.lowercase_retry
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a client builder with the default settings used by [`Client`].
pub fn builder() -> ClientBuilder {
    ClientBuilder::new()
        .gzip(true)
        .redirect(Policy::none())
        .timeout(TIMEOUT)
        .user_agent(USER_AGENT)
}

/// Classifies a response by its status and `Location` header.
///
/// The dictionary redirects to its front page when it doesn't know a word, so a `302 Found`
/// pointing back at `base_url` means the word doesn't exist.
fn check_response(
    status: StatusCode,
    location: Option<&str>,
    base_url: &str,
    word: &str,
    url: &str,
) -> Result<(), Error> {
    if status == StatusCode::FOUND && location == Some(base_url) {
        return Err(Error::NotFound {
            word: word.to_string(),
        });
    }

    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Status {
            status,
            url: url.to_string(),
        })
    }
}

/// Fetches `word` using `fetcher`, retrying once with the word in lower case if the first attempt
/// failed with an unexpected status and the fetcher [retries in lower case].
///
/// # Errors
///
/// Returns the error of the last attempt.
///
/// [retries in lower case]: Fetch::retries_lowercase
pub async fn fetch_with_retry<F>(fetcher: &F, word: &str) -> Result<String, Error>
where
    F: Fetch + Sync + ?Sized,
{
    match fetcher.fetch(word).await {
        Err(Error::Status { status, .. })
            if fetcher.retries_lowercase() && word != word.to_lowercase() =>
        {
            let lowercase = word.to_lowercase();

            warn!(%status, %word, %lowercase, "could not get page; retrying in lower case");

            fetcher.fetch(&lowercase).await
        }
        result => result,
    }
}
