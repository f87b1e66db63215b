//! Magazine views.

use std::collections::HashMap;

use press_model::{Article, Author, AuthorId, Magazine, MagazineId, Press};

use super::distinct;
use crate::config::DEFAULT_CONTRIBUTOR_THRESHOLD;

/// Relationship queries answered for a magazine.
///
/// Implemented for both [`Magazine`] and [`MagazineId`], so callers holding
/// only the id returned by `Press::add_magazine` can query directly.
pub trait MagazineQueries {
    /// Every article published in this magazine, in publication order.
    fn articles<'a>(&self, press: &'a Press) -> Vec<&'a Article>;

    /// The distinct authors who wrote for this magazine.
    fn contributors<'a>(&self, press: &'a Press) -> Vec<&'a Author>;

    /// Titles of this magazine's articles in publication order, or `None`
    /// if nothing has been published in it.
    fn article_titles<'a>(&self, press: &'a Press) -> Option<Vec<&'a str>> {
        let articles = self.articles(press);
        if articles.is_empty() {
            return None;
        }

        Some(articles.into_iter().map(Article::title).collect())
    }

    /// Authors with strictly more than two articles in this magazine, or
    /// `None` if no author qualifies.
    fn contributing_authors<'a>(&self, press: &'a Press) -> Option<Vec<&'a Author>> {
        self.contributing_authors_with(press, DEFAULT_CONTRIBUTOR_THRESHOLD)
    }

    /// Authors with strictly more than `threshold` articles in this magazine,
    /// or `None` if no author qualifies.
    fn contributing_authors_with<'a>(
        &self,
        press: &'a Press,
        threshold: usize,
    ) -> Option<Vec<&'a Author>> {
        let articles = self.articles(press);

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author().id()).or_default() += 1;
        }

        let qualifying: Vec<_> = distinct(articles.into_iter().map(Article::author))
            .into_iter()
            .filter(|author| counts.get(&author.id()).copied().unwrap_or(0) > threshold)
            .collect();

        (!qualifying.is_empty()).then_some(qualifying)
    }
}

impl MagazineQueries for MagazineId {
    fn articles<'a>(&self, press: &'a Press) -> Vec<&'a Article> {
        press
            .articles()
            .iter()
            .filter(|a| a.appears_in(*self))
            .collect()
    }

    fn contributors<'a>(&self, press: &'a Press) -> Vec<&'a Author> {
        distinct(self.articles(press).into_iter().map(Article::author))
    }
}

impl MagazineQueries for Magazine {
    fn articles<'a>(&self, press: &'a Press) -> Vec<&'a Article> {
        self.id().articles(press)
    }

    fn contributors<'a>(&self, press: &'a Press) -> Vec<&'a Author> {
        self.id().contributors(press)
    }
}
