//! Structured types
use scraper::Html;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{extract, query::Node};

/// A single sense of a word, as listed under a dictionary entry.
///
/// # HTML Source
/// Parsed from `<div class="pr dsense">` elements
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordDefinition {
    /// Short label that disambiguates the sense
    ///
    /// Examples: `MONEY`, `FRUIT`
    ///
    /// Parsed from `<span class="guideword dsense_gw">`, which most senses don't have
    pub guideword: Option<String>,

    /// The text explaining the sense, with surrounding whitespace and a single trailing colon
    /// removed
    ///
    /// Parsed from `<div class="def ddef_d db">`
    pub explanation: String,
}

/// A dictionary entry for a word
///
/// A page can hold several entries for the same word, e.g. when it is both a noun and a verb.
///
/// # HTML Source
/// Parsed from `<div class="pr entry-body__el">` elements
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordInfo {
    /// The headword
    ///
    /// Parsed from `<span class="hw dhw">`
    pub word: String,

    /// Part of speech
    ///
    /// Examples: `noun`, `verb`, `adjective`
    ///
    /// Parsed from `<span class="pos dpos">`
    pub pos: Option<String>,

    /// All senses of the entry in the order they appear on the page
    pub definitions: Vec<WordDefinition>,

    /// British pronunciation in IPA notation, without the surrounding slashes
    pub pronunciation_uk: Option<String>,

    /// American pronunciation in IPA notation, without the surrounding slashes
    pub pronunciation_us: Option<String>,
}

/// All the dictionary entries found on a single page
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DictionaryDocument {
    /// Entries in the order they appear on the page
    pub entries: Vec<WordInfo>,
}

impl DictionaryDocument {
    /// Parses a dictionary page.
    ///
    /// A page without any recognizable entries results in a document with no entries.
    pub fn from_html(html: impl AsRef<str>) -> DictionaryDocument {
        let document = Html::parse_document(html.as_ref());

        DictionaryDocument::from_node(&document.root_element())
    }

    /// Extracts the entries below `root`.
    pub fn from_node<N: Node>(root: &N) -> DictionaryDocument {
        let entries = extract::extract_all(root);

        DictionaryDocument { entries }
    }

    /// Returns `true` if no entries were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
