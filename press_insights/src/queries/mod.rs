//! Relationship queries - views derived by scanning the article registry.
//!
//! Nothing here caches back-references. Every call walks
//! [`Press::articles`](press_model::Press::articles) in publication order, so
//! results always reflect the registry at call time.
//!
//! "Set" results are de-duplicated by entity identity and returned in the
//! order each entity is first encountered.

mod analytics;
mod author;
mod magazine;

pub use analytics::*;
pub use author::*;
pub use magazine::*;

use std::collections::HashSet;
use std::hash::Hash;

/// Keep the first occurrence of each item, preserving order.
fn distinct<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
