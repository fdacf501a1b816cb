use std::time::Duration;

/// The configuration file that is read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "cdict.toml";

/// The prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "CDICT_";

/// The default duration before a HTTP request times out.
pub const DEFAULT_HTTP_TIMEOUT: Duration = cambridge::client::TIMEOUT;

/// The log filter used when `RUST_LOG` isn't set.
pub const DEFAULT_LOG_FILTER: &str = "cdict=error,cambridge=error";

/// The log filter used when `RUST_LOG` isn't set and verbose output is requested.
pub const VERBOSE_LOG_FILTER: &str = "cdict=debug,cambridge=debug";
