//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logging used by every actor and client.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** without module paths; actors log an `entity_type` field instead
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, mutations, rejects
//! RUST_LOG=debug cargo run    # every request, with payloads
//! ```
//!
//! With `RUST_LOG=info` a short session reads:
//!
//! ```text
//! INFO Actor started entity_type="CartItem" size=5
//! INFO Updated entity_type="CartItem" id=0
//! WARN Action rejected entity_type="CartItem" error=Coupon AB-1234 is not valid
//! INFO Terminate signal received entity_type="CartItem"
//! INFO Shutdown entity_type="CartItem" size=5
//! ```

/// Initializes the tracing subscriber.
///
/// Filtering follows `RUST_LOG`. Calling it again (e.g., from several tests) is a no-op.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type is more useful than the module path
        .compact()
        .try_init();
}
