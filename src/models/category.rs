use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::derive_slug;

/// Unique identifier for a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub String);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Section of the site articles are filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,
    /// Category name
    pub name: String,
    /// URL slug, unique among categories
    pub slug: String,
    /// Category description, may be empty
    pub description: String,
}

impl Category {
    /// Creates a new category with no slug yet
    pub fn new(name: String) -> Self {
        Self {
            id: CategoryId(Uuid::new_v4().to_string()),
            name,
            slug: String::new(),
            description: String::new(),
        }
    }

    /// Sets an explicit slug instead of deriving one from the name
    pub fn with_slug(mut self, slug: String) -> Self {
        self.slug = slug;
        self
    }

    /// Sets the category's description
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Fills in the slug from the name when it is blank
    pub fn fill_derived_fields(&mut self) {
        if self.slug.is_empty() {
            self.slug = derive_slug(&self.name);
        }
    }

    pub fn url_path(&self) -> String {
        format!("/category/{}/", self.slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
