//! The press - the store holding every magazine and article created.
//!
//! Both registries are append-only and keep insertion order. Nothing is ever
//! removed, and a failed construction never touches either registry. The
//! press is owned by the caller; there is no process-wide state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::entities::{Article, ArticleId, Author, Magazine, MagazineId};
use crate::error::{Result, ValidationError};

/// Identity of a press. Clones share it; every `Press::new` gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PressId(pub Uuid);

impl PressId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PressId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The magazine and article registries of one publishing world.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Press {
    id: PressId,

    /// All magazines, in registration order.
    magazines: Vec<Magazine>,

    /// Index: MagazineId -> position in `magazines`.
    #[serde(skip)]
    magazine_slots: HashMap<MagazineId, usize>,

    /// All articles, in publication order.
    articles: Vec<Article>,

    /// Index: ArticleId -> position in `articles`.
    #[serde(skip)]
    article_slots: HashMap<ArticleId, usize>,
}

impl Press {
    /// Create a new empty press.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> PressId {
        self.id
    }

    /// Validate and register a new magazine.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl AsRef<str>,
    ) -> Result<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();

        debug!(magazine = %id, name = magazine.name(), category = magazine.category(), "magazine registered");
        self.magazine_slots.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Get magazine by ID.
    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazine_slots
            .get(&id)
            .and_then(|slot| self.magazines.get(*slot))
    }

    /// Get mutable magazine by ID, for renaming or recategorizing.
    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        let slot = *self.magazine_slots.get(&id)?;
        self.magazines.get_mut(slot)
    }

    /// All magazines in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Validate and register a new article by `author` in `magazine`.
    ///
    /// Fails with [`ValidationError::UnknownMagazine`] if `magazine` was not
    /// registered in this press.
    pub fn publish(
        &mut self,
        author: &Author,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        if !self.magazine_slots.contains_key(&magazine) {
            debug!(%magazine, "rejected article for unregistered magazine");
            return Err(ValidationError::UnknownMagazine(magazine));
        }

        let article = Article::new(author, magazine, title)?;
        let id = article.id();

        debug!(article = %id, author = author.name(), %magazine, title = article.title(), "article published");
        self.article_slots.insert(id, self.articles.len());
        self.articles.push(article);
        Ok(id)
    }

    /// Get article by ID.
    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.article_slots
            .get(&id)
            .and_then(|slot| self.articles.get(*slot))
    }

    /// All articles in publication order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Check if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.magazines.is_empty() && self.articles.is_empty()
    }
}
