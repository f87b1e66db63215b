//! Article definitions - the join between an author and a magazine.

use serde::Serialize;
use tracing::debug;

use super::{ArticleId, Author, Magazine, MagazineId};
use crate::error::{Result, ValidationError};
use crate::press::Press;
use crate::rules::{self, ARTICLE_TITLE_LEN};

/// An article written by one author for one magazine.
///
/// Articles are immutable once published. The author is held by value
/// (authors never change), the magazine by id since magazines can be
/// renamed in place.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: ArticleId,
    author: Author,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Build an article; the caller is responsible for checking `magazine`
    /// against its registry.
    pub(crate) fn new(author: &Author, magazine: MagazineId, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        rules::check_len(&title, &ARTICLE_TITLE_LEN).map_err(|len| {
            debug!(len, "rejected article title");
            ValidationError::TitleLength { len }
        })?;

        Ok(Self {
            id: ArticleId::new(),
            author: author.clone(),
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }

    /// The magazine this article appeared in, as currently named in `press`.
    ///
    /// `None` only when `press` is not the press the article was published in.
    pub fn magazine<'a>(&self, press: &'a Press) -> Option<&'a Magazine> {
        press.magazine(self.magazine)
    }

    /// The title exactly as given at construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check if this article was written by `author`.
    pub fn is_by(&self, author: &Author) -> bool {
        self.author == *author
    }

    /// Check if this article appeared in `magazine`.
    pub fn appears_in(&self, magazine: MagazineId) -> bool {
        self.magazine == magazine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_kept_verbatim() {
        let author = Author::new("Elvis Chumo").unwrap();
        let article = Article::new(&author, MagazineId::new(), "  Spaced out  ").unwrap();
        assert_eq!(article.title(), "  Spaced out  ");
    }

    #[test]
    fn test_title_length_bounds() {
        let author = Author::new("Elvis Chumo").unwrap();
        let magazine = MagazineId::new();

        assert!(Article::new(&author, magazine, "Short").is_ok());
        assert!(Article::new(&author, magazine, "t".repeat(50)).is_ok());
        assert_eq!(
            Article::new(&author, magazine, "Tiny").unwrap_err(),
            ValidationError::TitleLength { len: 4 }
        );
        assert_eq!(
            Article::new(&author, magazine, "t".repeat(51)).unwrap_err(),
            ValidationError::TitleLength { len: 51 }
        );
    }

    #[test]
    fn test_links() {
        let author = Author::new("Isabelle Chumo").unwrap();
        let other = Author::new("Elvis Chumo").unwrap();
        let magazine = MagazineId::new();

        let article = Article::new(&author, magazine, "Robotics Revolution").unwrap();

        assert!(article.is_by(&author));
        assert!(!article.is_by(&other));
        assert!(article.appears_in(magazine));
        assert!(!article.appears_in(MagazineId::new()));
    }

    #[test]
    fn test_magazine_resolves_through_press() {
        let mut press = Press::new();
        let tech = press.add_magazine("TechToday", "Technology").unwrap();
        let author = Author::new("Elvis Chumo").unwrap();
        let id = press.publish(&author, tech, "The Future of AI").unwrap();

        press.magazine_mut(tech).unwrap().set_name("TechTomorrow").unwrap();

        let article = press.article(id).unwrap();
        assert_eq!(article.magazine(&press).map(Magazine::name), Some("TechTomorrow"));
        assert!(article.magazine(&Press::new()).is_none());
    }
}
