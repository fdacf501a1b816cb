//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Errors that end a lookup.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The word couldn't be fetched, or doesn't exist.
    #[error(transparent)]
    #[diagnostic(code(cdict::lookup))]
    Lookup(#[from] cambridge::Error),
    /// The page was fetched, but had no usable entries.
    #[error("Couldn't get info for word '{word}'")]
    #[diagnostic(code(cdict::no_entries))]
    NoEntries {
        /// The word that was looked up.
        word: String,
    },
    /// The configuration couldn't be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(code(cdict::config))]
    Config(#[source] Box<figment::Error>),
    /// The entries couldn't be serialized.
    #[error("Could not serialize entries")]
    #[diagnostic(code(cdict::json))]
    Json(#[from] serde_json::Error),
}
