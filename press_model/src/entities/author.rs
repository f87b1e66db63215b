//! Author definitions.

use serde::Serialize;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::{ArticleId, AuthorId, MagazineId};
use crate::error::{Result, ValidationError};
use crate::press::Press;
use crate::rules;

/// A named participant. Authors own no articles; the press is scanned for them.
///
/// Equality and hashing go by [`AuthorId`] only.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Create an author, storing the trimmed name.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let Some(name) = rules::non_blank(name.as_ref()) else {
            debug!("rejected blank author name");
            return Err(ValidationError::EmptyAuthorName);
        };

        Ok(Self {
            id: AuthorId::new(),
            name: name.to_owned(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write a new article for `magazine`. Same as [`Press::publish`].
    pub fn add_article(
        &self,
        press: &mut Press,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId> {
        press.publish(self, magazine, title)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let author = Author::new("  Elvis Chumo \t").unwrap();
        assert_eq!(author.name(), "Elvis Chumo");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyAuthorName);
        assert_eq!(Author::new("   \n").unwrap_err(), ValidationError::EmptyAuthorName);
    }

    #[test]
    fn test_identity_not_name() {
        let a = Author::new("Same Name").unwrap();
        let b = Author::new("Same Name").unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_add_article_registers_in_press() {
        let mut press = Press::new();
        let magazine = press.add_magazine("TechToday", "Technology").unwrap();
        let author = Author::new("Elvis Chumo").unwrap();

        let id = author
            .add_article(&mut press, magazine, "The Future of AI")
            .unwrap();

        let article = press.article(id).unwrap();
        assert_eq!(article.author(), &author);
        assert_eq!(article.magazine_id(), magazine);
        assert_eq!(press.article_count(), 1);
    }
}
