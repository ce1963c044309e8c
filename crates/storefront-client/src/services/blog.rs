//! Blog posts.

use crate::ClientError;
use serde::{Deserialize, Serialize};
use storefront_api::{ApiClient, Pagination};
use storefront_commerce::prelude::PostId;

/// A published post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

/// Fields for creating or updating a post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Blog reads against `/api/posts` and writes against `/api/admin/posts`.
#[derive(Clone)]
pub struct BlogService {
    api: ApiClient,
}

impl BlogService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch a page of posts. `page` is 1-indexed.
    pub async fn list(
        &self,
        page: i64,
        size: i64,
    ) -> Result<(Vec<Post>, Option<Pagination>), ClientError> {
        let query = vec![
            ("page".to_string(), (page - 1).max(0).to_string()),
            ("size".to_string(), size.to_string()),
        ];
        let result = self.api.get_paginated("/api/posts", query).await?;
        Ok(result)
    }

    /// Fetch a post by its URL slug.
    pub async fn get(&self, slug: &str) -> Result<Post, ClientError> {
        let post = self.api.get(&format!("/api/posts/{slug}")).await?;
        Ok(post)
    }

    /// Create a post (back-office).
    pub async fn create(&self, input: &PostInput) -> Result<Post, ClientError> {
        let post = self.api.post("/api/admin/posts", input).await?;
        Ok(post)
    }

    /// Update a post (back-office).
    pub async fn update(&self, id: &PostId, input: &PostInput) -> Result<Post, ClientError> {
        let post = self
            .api
            .put(&format!("/api/admin/posts/{}", id.as_str()), input)
            .await?;
        Ok(post)
    }

    /// Delete a post (back-office).
    pub async fn delete(&self, id: &PostId) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/posts/{}", id.as_str()))
            .await?;
        Ok(())
    }
}
