//! A client and parser for the Cambridge English Dictionary.
//!
//! Pages are parsed into [`WordInfo`] records, which can be rendered as indented plain text with
//! the [`format`] module or through their [`Display`](std::fmt::Display) implementations.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

#[cfg(feature = "client")]
pub mod client;
mod error;
pub mod extract;
pub mod format;
pub mod query;
pub mod roman;
pub mod types;

#[cfg(feature = "client")]
pub use client::{Client, Fetch};
pub use error::Error;
pub use types::{DictionaryDocument, WordDefinition, WordInfo};
