//! Image uploads.

use crate::ClientError;
use serde::Deserialize;
use storefront_api::ApiClient;

/// Where an uploaded image ended up.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
}

/// Uploads against `/api/uploads/images`.
#[derive(Clone)]
pub struct UploadService {
    api: ApiClient,
}

impl UploadService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Upload raw image bytes and get back the stored URL.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedImage, ClientError> {
        let image = self
            .api
            .post_bytes("/api/uploads/images", bytes, content_type)
            .await?;
        Ok(image)
    }
}
