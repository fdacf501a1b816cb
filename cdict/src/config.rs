use std::path::Path;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{Error, consts};

/// Lookup configuration.
///
/// Values are read from the built-in defaults, then the TOML config file, then environment
/// variables prefixed with `CDICT_`, with later sources taking precedence.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// The dictionary URL that words are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The `User-Agent` header sent with requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum duration of a single request
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// Retry failed lookups with the word in lower case
    #[serde(default = "default_lowercase_retry")]
    pub lowercase_retry: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            lowercase_retry: default_lowercase_retry(),
        }
    }
}

impl Config {
    /// Returns the layered configuration sources, reading the TOML file at `path` if it exists.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(consts::ENV_PREFIX))
    }

    /// Loads the configuration, reading the TOML file at `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a source has invalid contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
        Config::figment(path)
            .extract()
            .map_err(|err| Error::Config(Box::new(err)))
    }
}

#[must_use]
pub fn default_base_url() -> String {
    cambridge::client::BASE_URL.to_string()
}

#[must_use]
pub fn default_user_agent() -> String {
    cambridge::client::USER_AGENT.to_string()
}

#[must_use]
pub const fn default_timeout() -> Duration {
    consts::DEFAULT_HTTP_TIMEOUT
}

#[must_use]
pub const fn default_lowercase_retry() -> bool {
    true
}
