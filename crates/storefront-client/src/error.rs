//! Client-level errors.

use storefront_api::ApiError;
use storefront_commerce::CommerceError;
use thiserror::Error;

/// Anything a service call can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API layer failed: transport, HTTP, or application error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A domain invariant failed locally, before or after the wire.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl ClientError {
    /// The message to show the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(err) => err.user_message(),
            ClientError::Commerce(err) => err.to_string(),
        }
    }

    /// Whether the failure was an expired or missing session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api(err) if err.is_unauthorized())
    }
}
