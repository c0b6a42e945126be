use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::derive_slug;

/// A unique identifier for a tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(pub String);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a tag that can be associated with articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The unique identifier of the tag
    pub id: TagId,

    /// The name of the tag
    pub name: String,

    /// URL slug, unique among tags
    pub slug: String,
}

impl Tag {
    /// Creates a new tag with the given name
    pub fn new(name: String) -> Self {
        Self {
            id: TagId(Uuid::new_v4().to_string()),
            name,
            slug: String::new(),
        }
    }

    pub fn with_slug(mut self, slug: String) -> Self {
        self.slug = slug;
        self
    }

    /// Fills in the slug from the name when it is blank
    pub fn fill_derived_fields(&mut self) {
        if self.slug.is_empty() {
            self.slug = derive_slug(&self.name);
        }
    }

    pub fn url_path(&self) -> String {
        format!("/tag/{}/", self.slug)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_creation() {
        let mut tag = Tag::new("World Cup".to_string());
        tag.fill_derived_fields();

        assert_eq!(tag.name, "World Cup");
        assert_eq!(tag.slug, "world-cup");
        assert_eq!(tag.url_path(), "/tag/world-cup/");
    }

    #[test]
    fn test_tag_with_slug() {
        let mut tag = Tag::new("World Cup".to_string()).with_slug("wc".to_string());
        tag.fill_derived_fields();
        assert_eq!(tag.slug, "wc");
    }
}
