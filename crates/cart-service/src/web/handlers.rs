use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use super::ApiError;
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{CartItem, QuantityChange};

#[derive(Debug, Deserialize)]
pub struct CouponRequest {
    pub coupon: String,
}

pub async fn ping() -> Json<&'static str> {
    Json("Pong")
}

pub async fn get_cart(State(cart): State<CartClient>) -> Result<Json<Vec<CartItem>>, ApiError> {
    Ok(Json(cart.read().await?))
}

pub async fn reset_cart(State(cart): State<CartClient>) -> Result<Json<Vec<CartItem>>, ApiError> {
    info!("Resetting cart");
    Ok(Json(cart.reset().await?))
}

/// Decodes a JSON body whatever its `Content-Type` says.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn update_quantities(
    State(cart): State<CartClient>,
    body: Bytes,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let changes: Vec<QuantityChange> = parse_body(&body)?;
    Ok(Json(cart.update_quantities(&changes).await?))
}

pub async fn apply_coupon(
    State(cart): State<CartClient>,
    body: Bytes,
) -> Result<Json<Vec<CartItem>>, ApiError> {
    let CouponRequest { coupon } = parse_body(&body)?;
    if !cart.apply_coupon(&coupon).await? {
        return Err(CartError::InvalidCoupon(coupon).into());
    }
    Ok(Json(cart.read().await?))
}
