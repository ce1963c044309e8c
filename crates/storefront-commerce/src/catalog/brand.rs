//! Brand type.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
}
