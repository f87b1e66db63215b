//! Press digest - a summary report of who writes what, and where.

use serde::{Deserialize, Serialize};

use press_model::{Author, Magazine, Press};

use crate::config::InsightsConfig;
use crate::queries::{AuthorQueries, MagazineQueries, PressAnalytics};

/// A snapshot summary of a press, ready to print or serialize.
///
/// Absent results stay `None` (JSON `null`), so "no data" is never confused
/// with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressDigest {
    /// Authors in order of their first article.
    pub authors: Vec<AuthorDigest>,

    /// Magazines in registration order.
    pub magazines: Vec<MagazineDigest>,

    /// Name of the magazine with the most articles.
    pub top_publisher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDigest {
    pub name: String,
    /// Sorted category names.
    pub topic_areas: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineDigest {
    pub name: String,
    pub category: String,
    pub article_titles: Option<Vec<String>>,
    pub contributing_authors: Option<Vec<String>>,
}

impl PressDigest {
    /// Summarize every author and magazine in `press`.
    pub fn assemble(press: &Press, config: &InsightsConfig) -> Self {
        Self {
            authors: press
                .authors()
                .into_iter()
                .map(|author| Self::describe_author(press, author))
                .collect(),
            magazines: press
                .magazines()
                .iter()
                .map(|magazine| Self::describe_magazine(press, magazine, config))
                .collect(),
            top_publisher: press.top_publisher().map(|m| m.name().to_owned()),
        }
    }

    fn describe_author(press: &Press, author: &Author) -> AuthorDigest {
        AuthorDigest {
            name: author.name().to_owned(),
            topic_areas: author
                .topic_areas(press)
                .map(|areas| areas.into_iter().map(str::to_owned).collect()),
        }
    }

    fn describe_magazine(
        press: &Press,
        magazine: &Magazine,
        config: &InsightsConfig,
    ) -> MagazineDigest {
        MagazineDigest {
            name: magazine.name().to_owned(),
            category: magazine.category().to_owned(),
            article_titles: magazine
                .article_titles(press)
                .map(|titles| titles.into_iter().map(str::to_owned).collect()),
            contributing_authors: magazine
                .contributing_authors_with(press, config.contributor_threshold)
                .map(|authors| authors.iter().map(|a| a.name().to_owned()).collect()),
        }
    }

    /// Serialize the digest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format the digest as a plain-text report.
    pub fn render(&self) -> String {
        let mut report = String::new();

        report.push_str("## Authors\n");
        for author in &self.authors {
            report.push_str(&format!(
                "{} topic areas: {}\n",
                author.name,
                list_or_none(author.topic_areas.as_deref())
            ));
        }

        report.push_str("\n## Magazines\n");
        for magazine in &self.magazines {
            report.push_str(&format!("{} ({})\n", magazine.name, magazine.category));
            report.push_str(&format!(
                "  Article titles: {}\n",
                list_or_none(magazine.article_titles.as_deref())
            ));
            report.push_str(&format!(
                "  Contributing authors: {}\n",
                list_or_none(magazine.contributing_authors.as_deref())
            ));
        }

        report.push_str(&format!(
            "\nTop publisher: {}\n",
            self.top_publisher.as_deref().unwrap_or("None")
        ));

        report
    }
}

fn list_or_none(items: Option<&[String]>) -> String {
    match items {
        Some(items) => items.join(", "),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_press() -> Press {
        let mut press = Press::new();
        let tech = press.add_magazine("TechToday", "Technology").unwrap();
        press.add_magazine("Quiet", "Nothing").unwrap();
        let author = Author::new("Isabelle Chumo").unwrap();

        author.add_article(&mut press, tech, "Robotics Revolution").unwrap();
        author.add_article(&mut press, tech, "AI in Healthcare").unwrap();
        author.add_article(&mut press, tech, "Quantum Computing Simplified").unwrap();
        press
    }

    #[test]
    fn test_empty_press_digest() {
        let digest = PressDigest::assemble(&Press::new(), &InsightsConfig::default());

        assert!(digest.authors.is_empty());
        assert!(digest.magazines.is_empty());
        assert_eq!(digest.top_publisher, None);
    }

    #[test]
    fn test_assemble() {
        let digest = PressDigest::assemble(&sample_press(), &InsightsConfig::default());

        assert_eq!(digest.authors.len(), 1);
        assert_eq!(
            digest.authors[0].topic_areas,
            Some(vec!["Technology".to_string()])
        );

        let tech = &digest.magazines[0];
        assert_eq!(tech.article_titles.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            tech.contributing_authors,
            Some(vec!["Isabelle Chumo".to_string()])
        );

        let quiet = &digest.magazines[1];
        assert_eq!(quiet.article_titles, None);
        assert_eq!(quiet.contributing_authors, None);

        assert_eq!(digest.top_publisher.as_deref(), Some("TechToday"));
    }

    #[test]
    fn test_threshold_from_config() {
        let config = InsightsConfig {
            contributor_threshold: 3,
        };
        let digest = PressDigest::assemble(&sample_press(), &config);

        assert_eq!(digest.magazines[0].contributing_authors, None);
    }

    #[test]
    fn test_json_keeps_null_for_absent() {
        let digest = PressDigest::assemble(&sample_press(), &InsightsConfig::default());
        let json: serde_json::Value = serde_json::from_str(&digest.to_json().unwrap()).unwrap();

        assert_eq!(json["top_publisher"], "TechToday");
        assert!(json["magazines"][1]["article_titles"].is_null());
        assert_eq!(json["magazines"][0]["article_titles"][0], "Robotics Revolution");

        let restored: PressDigest = serde_json::from_value(json).unwrap();
        assert_eq!(restored, digest);
    }

    #[test]
    fn test_render() {
        let digest = PressDigest::assemble(&sample_press(), &InsightsConfig::default());
        let report = digest.render();

        assert!(report.contains("Isabelle Chumo topic areas: Technology"));
        assert!(report.contains("Quiet (Nothing)\n  Article titles: None"));
        assert!(report.contains("Contributing authors: Isabelle Chumo"));
        assert!(report.ends_with("Top publisher: TechToday\n"));
    }
}
