//! Magazine definitions.

use serde::Serialize;
use std::hash::{Hash, Hasher};
use tracing::debug;

use super::MagazineId;
use crate::error::{Result, ValidationError};
use crate::rules::{self, MAGAZINE_NAME_LEN};

/// A named, categorized publication venue.
///
/// Magazines are created through [`Press::add_magazine`](crate::Press::add_magazine),
/// which registers them. Name and category stay mutable, but every assignment
/// goes through the same checks as construction.
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    pub(crate) fn new(name: impl Into<String>, category: impl AsRef<str>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let category = validate_category(category.as_ref())?.to_owned();

        Ok(Self {
            id: MagazineId::new(),
            name,
            category,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the magazine. On error the current name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        debug!(magazine = %self.id, from = %self.name, to = %name, "magazine renamed");
        self.name = name;
        Ok(())
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Recategorize the magazine, storing the trimmed value.
    pub fn set_category(&mut self, category: impl AsRef<str>) -> Result<()> {
        let category = validate_category(category.as_ref())?;
        debug!(magazine = %self.id, category, "magazine recategorized");
        self.category = category.to_owned();
        Ok(())
    }
}

// Names are measured as given; no trimming.
fn validate_name(name: &str) -> Result<()> {
    rules::check_len(name, &MAGAZINE_NAME_LEN).map_err(|len| {
        debug!(len, "rejected magazine name");
        ValidationError::MagazineNameLength { len }
    })
}

fn validate_category(category: &str) -> Result<&str> {
    rules::non_blank(category).ok_or_else(|| {
        debug!("rejected blank magazine category");
        ValidationError::EmptyCategory
    })
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
