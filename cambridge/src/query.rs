//! Selector queries over document trees
//!
//! The extractor only needs two things from a document: the ability to find descendants by a CSS
//! selector and the ability to read the text of a node. [`Node`] captures exactly that, so the
//! extraction logic can run against `scraper`'s HTML tree as well as hand-built trees in tests.

use scraper::{ElementRef, Selector};
use tracing::{debug, error, warn};

/// A node in a tree-shaped document that can be queried with selectors.
pub trait Node: Sized {
    /// Returns all descendants matching `selector`, in document order.
    fn query(&self, selector: &str) -> Vec<Self>;

    /// Returns the concatenated text of this node and its descendants, in document order.
    fn text(&self) -> String;
}

impl Node for ElementRef<'_> {
    fn query(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(selector) => self.select(&selector).collect(),
            Err(err) => {
                error!(%selector, %err, "could not parse selector");

                vec![]
            }
        }
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

/// Returns the first descendant of `node` that matches `selector`.
///
/// Dictionary markup doesn't guarantee that a field appears only once, so when there are several
/// matches the first one is used and a warning is logged.
pub fn select_first<N: Node>(node: &N, selector: &str) -> Option<N> {
    let mut matches = node.query(selector);

    match matches.len() {
        0 => {
            debug!(%selector, "no matches found for selector");

            None
        }
        1 => matches.pop(),
        num_matches => {
            warn!(
                %selector,
                %num_matches,
                "multiple matches found for selector; using first match"
            );

            matches.into_iter().next()
        }
    }
}
