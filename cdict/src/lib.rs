//! Command-line lookups in the Cambridge English Dictionary.

pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod lookup;

pub use config::Config;
pub use error::Error;
pub use lookup::{Output, lookup, render};
