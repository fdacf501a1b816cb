//! Extraction of dictionary entries from a page
//!
//! Every field except the headword of an entry and the definition text of a sense is optional.
//! Entries and senses missing those are dropped rather than treated as errors, since pages
//! regularly contain decorative or partial subtrees that share the same markup.

use tracing::{debug, error};

use crate::query::{Node, select_first};
use crate::types::{WordDefinition, WordInfo};

/// The container holding all the entries on the page.
pub const DICTIONARY_SELECTOR: &str = "div.pr.dictionary";
/// A single entry in the dictionary.
pub const ENTRY_SELECTOR: &str = "div.pr.entry-body__el";
/// The headword of an entry.
pub const HEADWORD_SELECTOR: &str = "span.hw.dhw";
/// The part of speech of an entry.
pub const POS_SELECTOR: &str = "span.pos.dpos";
/// The British IPA transcription of an entry.
pub const UK_PRONUNCIATION_SELECTOR: &str = "span.uk.dpron-i span.ipa";
/// The American IPA transcription of an entry.
pub const US_PRONUNCIATION_SELECTOR: &str = "span.us.dpron-i span.ipa";
/// A sense within an entry.
pub const SENSE_SELECTOR: &str = "div.pr.dsense";
/// The guideword of a sense.
pub const GUIDEWORD_SELECTOR: &str = "span.guideword.dsense_gw span";
/// The definition text of a sense.
pub const DEFINITION_SELECTOR: &str = "div.def.ddef_d.db";

/// Extracts all the entries found in `document`, in document order.
///
/// Returns an empty list if the page has no dictionary container or if none of its entries have
/// a headword.
pub fn extract_all<N: Node>(document: &N) -> Vec<WordInfo> {
    let Some(dictionary) = select_first(document, DICTIONARY_SELECTOR) else {
        error!("could not find dictionary element");

        return vec![];
    };

    let entries: Vec<WordInfo> = dictionary
        .query(ENTRY_SELECTOR)
        .iter()
        .filter_map(extract_entry)
        .collect();

    debug!(num_entries = entries.len(), "extracted entries");

    entries
}

/// Extracts a single entry, or `None` if it has no headword.
pub fn extract_entry<N: Node>(entry: &N) -> Option<WordInfo> {
    let word = select_first(entry, HEADWORD_SELECTOR)?.text();
    let text_of = |selector| select_first(entry, selector).map(|node| node.text());

    let pos = text_of(POS_SELECTOR);
    let pronunciation_uk = text_of(UK_PRONUNCIATION_SELECTOR);
    let pronunciation_us = text_of(US_PRONUNCIATION_SELECTOR);
    let definitions = entry
        .query(SENSE_SELECTOR)
        .iter()
        .filter_map(extract_definition)
        .collect();

    Some(WordInfo {
        word,
        pos,
        definitions,
        pronunciation_uk,
        pronunciation_us,
    })
}

/// Extracts the definition of a sense, or `None` if it has no definition text.
pub fn extract_definition<N: Node>(sense: &N) -> Option<WordDefinition> {
    let definition = select_first(sense, DEFINITION_SELECTOR)?;
    let guideword = select_first(sense, GUIDEWORD_SELECTOR).map(|node| node.text());
    let explanation = normalize_explanation(&definition.text());

    Some(WordDefinition {
        guideword,
        explanation,
    })
}

/// Trims `text` and strips a single trailing colon.
#[must_use]
pub fn normalize_explanation(text: &str) -> String {
    let text = text.trim();

    text.strip_suffix(':').unwrap_or(text).to_string()
}

#[cfg(test)]
mod tests {
    use scraper::Selector;

    use super::*;
    use crate::query::fake::FakeNode;

    fn headword(word: &str) -> FakeNode {
        FakeNode::new().with(HEADWORD_SELECTOR, FakeNode::with_text(word))
    }

    fn sense(guideword: Option<&str>, definition: &str) -> FakeNode {
        let sense = FakeNode::new().with(DEFINITION_SELECTOR, FakeNode::with_text(definition));

        match guideword {
            Some(guideword) => sense.with(GUIDEWORD_SELECTOR, FakeNode::with_text(guideword)),
            None => sense,
        }
    }

    fn document(entries: Vec<FakeNode>) -> FakeNode {
        let dictionary = entries
            .into_iter()
            .fold(FakeNode::new(), |dict, entry| dict.with(ENTRY_SELECTOR, entry));

        FakeNode::new().with(DICTIONARY_SELECTOR, dictionary)
    }

    fn words(infos: &[WordInfo]) -> Vec<&str> {
        infos.iter().map(|info| info.word.as_str()).collect()
    }

    #[test]
    fn extract_all_preserves_document_order() {
        let doc = document(vec![headword("a"), headword("b"), headword("c")]);

        assert_eq!(words(&extract_all(&doc)), vec!["a", "b", "c"]);
    }

    #[test]
    fn extract_all_discards_entries_without_headword() {
        let doc = document(vec![
            headword("a"),
            FakeNode::new().with(POS_SELECTOR, FakeNode::with_text("noun")),
            headword("c"),
        ]);

        assert_eq!(words(&extract_all(&doc)), vec!["a", "c"]);
    }

    #[test]
    fn extract_all_without_dictionary_is_empty() {
        let doc = FakeNode::new().with(ENTRY_SELECTOR, headword("a"));

        assert!(extract_all(&doc).is_empty());
    }

    #[test]
    fn extract_all_uses_first_dictionary() {
        let doc = document(vec![headword("first")])
            .with(DICTIONARY_SELECTOR, FakeNode::new().with(ENTRY_SELECTOR, headword("second")));

        assert_eq!(words(&extract_all(&doc)), vec!["first"]);
    }

    #[test]
    fn extract_entry_reads_optional_fields() {
        let entry = headword("bank")
            .with(POS_SELECTOR, FakeNode::with_text("noun"))
            .with(UK_PRONUNCIATION_SELECTOR, FakeNode::with_text("bæŋk"))
            .with(US_PRONUNCIATION_SELECTOR, FakeNode::with_text("bæŋk"));
        let info = extract_entry(&entry).unwrap();

        assert_eq!(info.word, "bank");
        assert_eq!(info.pos.as_deref(), Some("noun"));
        assert_eq!(info.pronunciation_uk.as_deref(), Some("bæŋk"));
        assert_eq!(info.pronunciation_us.as_deref(), Some("bæŋk"));
        assert!(info.definitions.is_empty());
    }

    #[test]
    fn extract_entry_leaves_missing_fields_unset() {
        let info = extract_entry(&headword("bank")).unwrap();

        assert_eq!(info.pos, None);
        assert_eq!(info.pronunciation_uk, None);
        assert_eq!(info.pronunciation_us, None);
    }

    #[test]
    fn extract_entry_skips_senses_without_definition() {
        let entry = headword("bank")
            .with(SENSE_SELECTOR, sense(Some("MONEY"), "a place for money:"))
            .with(
                SENSE_SELECTOR,
                FakeNode::new().with(GUIDEWORD_SELECTOR, FakeNode::with_text("RIVER")),
            )
            .with(SENSE_SELECTOR, sense(None, "a row of similar things"));
        let info = extract_entry(&entry).unwrap();

        assert_eq!(
            info.definitions,
            vec![
                WordDefinition {
                    guideword: Some("MONEY".to_string()),
                    explanation: "a place for money".to_string(),
                },
                WordDefinition {
                    guideword: None,
                    explanation: "a row of similar things".to_string(),
                },
            ]
        );
    }

    #[test]
    fn normalize_explanation_trims_and_strips_colon() {
        assert_eq!(normalize_explanation("  a sweet fruit:  "), "a sweet fruit");
    }

    #[test]
    fn normalize_explanation_strips_only_one_colon() {
        assert_eq!(normalize_explanation("ratio 1:2::"), "ratio 1:2:");
        assert_eq!(normalize_explanation("no colon"), "no colon");
    }

    #[test]
    fn selectors_are_valid_css() {
        for selector in [
            DICTIONARY_SELECTOR,
            ENTRY_SELECTOR,
            HEADWORD_SELECTOR,
            POS_SELECTOR,
            UK_PRONUNCIATION_SELECTOR,
            US_PRONUNCIATION_SELECTOR,
            SENSE_SELECTOR,
            GUIDEWORD_SELECTOR,
            DEFINITION_SELECTOR,
        ] {
            assert!(Selector::parse(selector).is_ok(), "{selector}");
        }
    }
}
