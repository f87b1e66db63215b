//! Press-wide aggregates.

use press_model::{Article, Author, Magazine, Press};

use super::{distinct, MagazineQueries};

/// Aggregate queries across every entity in a press.
pub trait PressAnalytics {
    /// The magazine with the most articles, or `None` when nothing has been
    /// published. Ties go to the magazine registered first.
    fn top_publisher(&self) -> Option<&Magazine>;

    /// Each magazine with its article count, in registration order.
    fn publication_counts(&self) -> Vec<(&Magazine, usize)>;

    /// Every distinct author who has published, in order of first article.
    fn authors(&self) -> Vec<&Author>;
}

impl PressAnalytics for Press {
    fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles().is_empty() {
            return None;
        }

        let mut top: Option<(&Magazine, usize)> = None;
        for (magazine, count) in self.publication_counts() {
            // Strictly greater, so the earliest magazine keeps a tie.
            if top.is_none_or(|(_, best)| count > best) {
                top = Some((magazine, count));
            }
        }

        top.map(|(magazine, _)| magazine)
    }

    fn publication_counts(&self) -> Vec<(&Magazine, usize)> {
        self.magazines()
            .iter()
            .map(|magazine| (magazine, magazine.articles(self).len()))
            .collect()
    }

    fn authors(&self) -> Vec<&Author> {
        distinct(self.articles().iter().map(Article::author))
    }
}
