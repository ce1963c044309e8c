//! Category type.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Parent category, if nested.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Check if this is a top-level category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_root() {
        let category = Category {
            id: CategoryId::new("cat-1"),
            name: "Laptops".to_string(),
            slug: "laptops".to_string(),
            description: None,
            parent_id: None,
        };
        assert!(category.is_root());
    }
}
