//! Looking up words and presenting the result

use cambridge::client::{Fetch, fetch_with_retry};
use cambridge::{DictionaryDocument, format};
use tracing::{debug, instrument};

use crate::Error;

/// The ways a looked up page can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Indented, human-readable text.
    Text,
    /// The extracted entries as pretty-printed JSON.
    Json,
}

/// Fetches and parses the page for `word`.
///
/// Whether a failed fetch is retried in lower case is up to the fetcher, see
/// [`Fetch::retries_lowercase`].
///
/// # Errors
///
/// - [`Error::Lookup`] if the fetch fails, including when the word doesn't exist.
/// - [`Error::NoEntries`] if the page was fetched but no entries could be extracted from it.
#[instrument(skip(fetcher))]
pub async fn lookup<F>(fetcher: &F, word: &str) -> Result<DictionaryDocument, Error>
where
    F: Fetch + Sync + ?Sized,
{
    let body = fetch_with_retry(fetcher, word).await?;
    let document = DictionaryDocument::from_html(&body);

    debug!(num_entries = document.entries.len(), "parsed page");

    if document.is_empty() {
        return Err(Error::NoEntries {
            word: word.to_string(),
        });
    }

    Ok(document)
}

/// Renders `document` for printing.
///
/// # Errors
///
/// Returns [`Error::Json`] if the entries can't be serialized.
pub fn render(document: &DictionaryDocument, output: Output) -> Result<String, Error> {
    match output {
        Output::Text => Ok(format::render_entries(&document.entries)),
        Output::Json => Ok(serde_json::to_string_pretty(&document.entries)?),
    }
}

#[cfg(test)]
mod tests {
    use cambridge::{WordDefinition, WordInfo};

    use super::*;

    #[test]
    fn render_json_lists_entries() {
        let document = DictionaryDocument {
            entries: vec![WordInfo {
                word: "bank".to_string(),
                pos: None,
                definitions: vec![WordDefinition {
                    guideword: None,
                    explanation: "a place for money".to_string(),
                }],
                pronunciation_uk: None,
                pronunciation_us: None,
            }],
        };

        let json: serde_json::Value =
            serde_json::from_str(&render(&document, Output::Json).unwrap()).unwrap();

        assert_eq!(json[0]["word"], "bank");
        assert_eq!(json[0]["pos"], serde_json::Value::Null);
        assert_eq!(json[0]["definitions"][0]["explanation"], "a place for money");
    }

    #[test]
    fn render_text_uses_renderer() {
        let document = DictionaryDocument {
            entries: vec![WordInfo {
                word: "bank".to_string(),
                pos: Some("noun".to_string()),
                definitions: vec![],
                pronunciation_uk: None,
                pronunciation_us: None,
            }],
        };

        assert_eq!(render(&document, Output::Text).unwrap(), "bank (noun)");
    }
}
