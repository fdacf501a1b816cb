use std::fmt::{self, Display};
use std::io;
use std::str::FromStr;

use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cdict::consts;

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One event per line.
    #[default]
    Compact,
    /// Multi-line, human-readable events.
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Format::Compact),
            "pretty" => Ok(Format::Pretty),
            "json" => Ok(Format::Json),
            other => Err(format!(
                "unknown log format '{other}', expected compact, pretty or json"
            )),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Compact => f.write_str("compact"),
            Format::Pretty => f.write_str("pretty"),
            Format::Json => f.write_str("json"),
        }
    }
}

/// Installs the global subscriber, logging to stderr so that stdout only carries the lookup
/// result.
pub fn try_init(format: Format, verbose: bool) -> miette::Result<()> {
    let default_filter = if verbose {
        consts::VERBOSE_LOG_FILTER
    } else {
        consts::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        Format::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        Format::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .try_init(),
        Format::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .try_init(),
    }
    .into_diagnostic()
    .wrap_err("could not init registry")?;

    debug!(%format, "tracing initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("compact", Format::Compact)]
    #[case("pretty", Format::Pretty)]
    #[case("json", Format::Json)]
    fn parses_formats(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(input.parse::<Format>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!("yaml".parse::<Format>().is_err());
    }
}
