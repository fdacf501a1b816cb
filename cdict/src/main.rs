use argh::FromArgs;

mod tracing;

use cdict::{Config, Output, consts, http, lookup, render};

use crate::tracing::Format;

/// Look up a word in the Cambridge English Dictionary.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, default = "String::from(consts::DEFAULT_CONFIG_PATH)")]
    config: String,
    /// print the entries as JSON
    #[argh(switch)]
    json: bool,
    /// log format: compact, pretty or json
    #[argh(option, default = "Format::default()")]
    log_format: Format,
    /// log debug events
    #[argh(switch, short = 'v')]
    verbose: bool,
    /// the word to look up
    #[argh(positional)]
    word: String,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    // Initialize logging
    tracing::try_init(opts.log_format, opts.verbose)?;

    let config = Config::load(&opts.config)?;
    let client = http::build_client(&config)?;
    let document = lookup(&client, &opts.word).await?;
    let output = if opts.json { Output::Json } else { Output::Text };

    println!();
    println!("{}", render(&document, output)?);

    Ok(())
}
