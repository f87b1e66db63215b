//! Article index - author and magazine lookups without a full registry scan.
//!
//! The registry is append-only, so the index only needs to remember which
//! press it follows and how many articles it has seen, then pick up from there
//! on the next [`ArticleIndex::sync`].
//! The scan-based queries in [`crate::queries`] remain the reference answers.

use std::collections::HashMap;

use press_model::{Article, ArticleId, AuthorId, MagazineId, Press, PressId};
use tracing::{debug, warn};

/// Incrementally maintained lookups from authors and magazines to articles.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    /// Index: Author -> articles, in publication order.
    by_author: HashMap<AuthorId, Vec<ArticleId>>,

    /// Index: Magazine -> articles, in publication order.
    by_magazine: HashMap<MagazineId, Vec<ArticleId>>,

    /// The press this index follows, once synced.
    press: Option<PressId>,

    /// Last article indexed. Clones of a press share its id, so this guards
    /// against a clone that has diverged since.
    last: Option<ArticleId>,

    /// Number of registry entries already indexed.
    indexed: usize,
}

impl ArticleIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every article currently in `press`.
    pub fn build(press: &Press) -> Self {
        let mut index = Self::new();
        index.sync(press);
        index
    }

    /// Index articles published since the last sync.
    ///
    /// Returns how many articles were added. An index follows one press; when
    /// handed a different press, or a copy whose history no longer matches
    /// what was indexed, it starts over from that press's first article.
    pub fn sync(&mut self, press: &Press) -> usize {
        let articles = press.articles();

        if !self.follows(press) {
            if self.press.is_some() {
                warn!(
                    indexed = self.indexed,
                    press = %press.id(),
                    "index synced against a different press, rebuilding"
                );
            }
            *self = Self::new();
            self.press = Some(press.id());
        }

        let fresh = &articles[self.indexed..];
        for article in fresh {
            self.insert(article);
        }
        self.indexed = articles.len();
        self.last = articles.last().map(Article::id);

        if !fresh.is_empty() {
            debug!(added = fresh.len(), total = self.indexed, "article index synced");
        }
        fresh.len()
    }

    // Same press, and the article at our high-water mark is the one we indexed.
    fn follows(&self, press: &Press) -> bool {
        if self.press != Some(press.id()) {
            return false;
        }

        match self.indexed.checked_sub(1) {
            None => true,
            Some(slot) => press.articles().get(slot).map(Article::id) == self.last,
        }
    }

    fn insert(&mut self, article: &Article) {
        self.by_author
            .entry(article.author().id())
            .or_default()
            .push(article.id());
        self.by_magazine
            .entry(article.magazine_id())
            .or_default()
            .push(article.id());
    }

    /// Articles written by `author`.
    pub fn articles_by(&self, author: AuthorId) -> &[ArticleId] {
        self.by_author.get(&author).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Articles published in `magazine`.
    pub fn articles_in(&self, magazine: MagazineId) -> &[ArticleId] {
        self.by_magazine
            .get(&magazine)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn article_count_in(&self, magazine: MagazineId) -> usize {
        self.articles_in(magazine).len()
    }

    /// Get the total number of indexed articles.
    pub fn indexed_count(&self) -> usize {
        self.indexed
    }

    /// Resolve indexed ids back to articles.
    pub fn resolve<'a>(&self, press: &'a Press, ids: &[ArticleId]) -> Vec<&'a Article> {
        ids.iter().filter_map(|id| press.article(*id)).collect()
    }
}
