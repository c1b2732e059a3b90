//! # HTTP Surface
//!
//! Routes translate JSON bodies into [`CartClient`] calls and cart errors into status codes:
//! unknown items and malformed coupons are `400`, an unreachable cart owner is `503`.
//!
//! | Route | Body | Reply |
//! |-------|------|-------|
//! | `GET /ping` | | `"Pong"` |
//! | `GET /cart` | | cart |
//! | `POST /cart/quantities` | `[{"id": 0, "quantity": 2}]` | cart |
//! | `POST /cart/applyCoupon` | `{"coupon": "ABC-1234"}` | cart |
//! | `POST /cart/reset` | | cart |

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::CouponRequest;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::lifecycle::CartSystem;

pub fn router(cart: CartClient) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/cart", get(handlers::get_cart))
        .route("/cart/quantities", post(handlers::update_quantities))
        .route("/cart/applyCoupon", post(handlers::apply_coupon))
        .route("/cart/reset", post(handlers::reset_cart))
        .with_state(cart)
}

/// Binds `config.bind_address` and serves until Ctrl-C.
pub async fn serve(config: CartConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_address).await?;
    serve_with_shutdown(listener, &config, shutdown_signal()).await
}

/// Serves on `listener` until `shutdown` resolves, then stops the cart owner.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: &CartConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let system = CartSystem::start(config);
    let app = router(system.cart_client.clone());

    let actual_addr = listener.local_addr()?;
    info!(bind = %actual_addr, "listening");

    let server_result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    info!("server stopped, shutting down cart");
    if let Err(e) = system.shutdown().await {
        error!("error during shutdown: {}", e);
    }

    server_result.map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
