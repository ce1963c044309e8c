//! The backend's response envelope.

use crate::ApiError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Pagination block as the backend sends it.
///
/// `current_page` is 0-indexed on the wire. The UI is 1-indexed; the
/// translation happens in [`display_page`] and nowhere else.
///
/// [`display_page`]: Pagination::display_page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 0-indexed.
    pub current_page: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Total number of items across all pages.
    pub total_items: i64,
}

impl Pagination {
    /// The page number to display (1-indexed).
    pub fn display_page(&self) -> i64 {
        self.current_page + 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.display_page() < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }
}

/// The `{status, message, data, pagination?}` wrapper used by every backend
/// response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// "success" or "error".
    pub status: String,
    /// Human-readable message, present on errors and some successes.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload; absent on errors and acknowledgement-only responses.
    pub data: Option<T>,
    /// Pagination block, present on list responses.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Whether the envelope declares an application error.
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// Convert into the payload, treating `status == "error"` as a failure
    /// even when the HTTP layer reported success.
    pub fn into_result(self) -> Result<(T, Option<Pagination>), ApiError> {
        if self.is_error() {
            return Err(ApiError::Application(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        let pagination = self.pagination;
        match self.data {
            Some(data) => Ok((data, pagination)),
            None => Err(ApiError::Parse("missing data in envelope".to_string())),
        }
    }

    /// Acknowledge a data-less response (e.g., deletes).
    pub fn ack(self) -> Result<(), ApiError> {
        if self.is_error() {
            return Err(ApiError::Application(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        Ok(())
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let env: Envelope<Vec<i64>> =
            Envelope::from_bytes(br#"{"status":"success","data":[1,2,3]}"#).unwrap();
        let (data, pagination) = env.into_result().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert!(pagination.is_none());
    }

    #[test]
    fn test_error_envelope_on_http_200() {
        let env: Envelope<Vec<i64>> = Envelope::from_bytes(
            br#"{"status":"error","message":"Invalid discount code"}"#,
        )
        .unwrap();
        let err = env.into_result().unwrap_err();
        assert_eq!(err.user_message(), "Invalid discount code");
    }

    #[test]
    fn test_error_envelope_without_message() {
        let env: Envelope<()> = Envelope::from_bytes(br#"{"status":"error"}"#).unwrap();
        assert!(env.ack().is_err());
    }

    #[test]
    fn test_ack_success() {
        let env: Envelope<()> =
            Envelope::from_bytes(br#"{"status":"success","message":"Deleted"}"#).unwrap();
        assert!(env.ack().is_ok());
    }

    #[test]
    fn test_pagination_translation() {
        let env: Envelope<Vec<i64>> = Envelope::from_bytes(
            br#"{"status":"success","data":[1],"pagination":{"currentPage":0,"totalPages":3,"totalItems":25}}"#,
        )
        .unwrap();
        let (_, pagination) = env.into_result().unwrap();
        let pagination = pagination.unwrap();
        assert_eq!(pagination.current_page, 0);
        assert_eq!(pagination.display_page(), 1);
        assert!(pagination.has_next());
        assert!(!pagination.has_prev());
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination {
            current_page: 2,
            total_pages: 3,
            total_items: 25,
        };
        assert_eq!(p.display_page(), 3);
        assert!(!p.has_next());
        assert!(p.has_prev());
    }

    #[test]
    fn test_decodes_payload_without_default_impl() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct NoDefault {
            id: String,
        }

        let env: Envelope<NoDefault> =
            Envelope::from_bytes(br#"{"status":"success","data":{"id":"x-1"}}"#).unwrap();
        let (data, _) = env.into_result().unwrap();
        assert_eq!(data.id, "x-1");

        let empty: Envelope<NoDefault> =
            Envelope::from_bytes(br#"{"status":"success"}"#).unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_missing_data_is_parse_error() {
        let env: Envelope<Vec<i64>> =
            Envelope::from_bytes(br#"{"status":"success"}"#).unwrap();
        assert!(matches!(env.into_result(), Err(ApiError::Parse(_))));
    }
}
