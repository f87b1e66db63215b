//! Author views.

use std::collections::BTreeSet;

use press_model::{Article, Author, Magazine, Press};

use super::distinct;

/// Relationship queries answered for an [`Author`].
pub trait AuthorQueries {
    /// Every article this author wrote, in publication order.
    fn articles<'a>(&self, press: &'a Press) -> Vec<&'a Article>;

    /// The distinct magazines this author has written for.
    fn magazines<'a>(&self, press: &'a Press) -> Vec<&'a Magazine>;

    /// The distinct categories of this author's magazines, or `None` if the
    /// author has not written for any magazine.
    fn topic_areas<'a>(&self, press: &'a Press) -> Option<BTreeSet<&'a str>>;
}

impl AuthorQueries for Author {
    fn articles<'a>(&self, press: &'a Press) -> Vec<&'a Article> {
        press.articles().iter().filter(|a| a.is_by(self)).collect()
    }

    fn magazines<'a>(&self, press: &'a Press) -> Vec<&'a Magazine> {
        distinct(
            self.articles(press)
                .into_iter()
                .filter_map(|article| press.magazine(article.magazine_id())),
        )
    }

    fn topic_areas<'a>(&self, press: &'a Press) -> Option<BTreeSet<&'a str>> {
        let magazines = self.magazines(press);
        if magazines.is_empty() {
            return None;
        }

        Some(magazines.into_iter().map(Magazine::category).collect())
    }
}
