use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::cart_actor::CartError;

/// Failure of a request handler, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unavailable(String),
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::ItemNotFound(_) | CartError::InvalidCoupon(_) => {
                ApiError::BadRequest(e.to_string())
            }
            CartError::ActorCommunicationError(_) => ApiError::Unavailable(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {e}"))
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), error = %self, "Request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    #[test]
    fn test_cart_errors_map_to_status() {
        let not_found = ApiError::from(CartError::ItemNotFound(ItemId(7)));
        assert_eq!(not_found.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.to_string(), "Shopping cart item with ID 7 not found");

        let coupon = ApiError::from(CartError::InvalidCoupon("x".into()));
        assert_eq!(coupon.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(coupon.to_string(), "Coupon x is not valid");

        let closed = ApiError::from(CartError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(closed.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_undecodable_body_is_bad_request() {
        let e = serde_json::from_slice::<Vec<u32>>(b"{oops").unwrap_err();
        let error = ApiError::from(e);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().starts_with("Invalid request body"));
    }
}
