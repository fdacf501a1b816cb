//! HTTP features

use crate::{Config, Error};

/// Builds a dictionary client from the given `config`.
///
/// # Errors
///
/// Returns [`Error::Lookup`] if the underlying HTTP client fails to build.
pub fn build_client(config: &Config) -> Result<cambridge::Client, Error> {
    let http_client = builder(config)
        .build()
        .map_err(cambridge::Error::BuildClient)?;
    let client = cambridge::Client::with_client(http_client)
        .base_url(&config.base_url)
        .lowercase_retry(config.lowercase_retry);

    Ok(client)
}

/// Returns a HTTP client builder with the timeout and user agent from `config`.
#[must_use]
pub fn builder(config: &Config) -> reqwest::ClientBuilder {
    cambridge::client::builder()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
}

#[cfg(test)]
mod tests {
    use cambridge::Fetch;

    use super::*;

    #[test]
    fn builds_client_with_lowercase_retry() {
        let config = Config {
            lowercase_retry: false,
            ..Config::default()
        };

        assert!(!build_client(&config).unwrap().retries_lowercase());
        assert!(build_client(&Config::default()).unwrap().retries_lowercase());
    }

    #[test]
    fn builds_client_with_base_url() {
        let config = Config {
            base_url: "http://localhost:8080/dictionary/".to_string(),
            ..Config::default()
        };
        let client = build_client(&config).unwrap();

        assert_eq!(
            client.word_url("apple").unwrap().as_str(),
            "http://localhost:8080/dictionary/apple"
        );
    }
}
