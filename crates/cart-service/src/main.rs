use actor_framework::tracing::setup_tracing;
use cart_service::config::{CartConfig, CliArgs};
use cart_service::web;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = CartConfig::from_args(CliArgs::parse())?;
    info!(
        bind = %config.bind_address,
        buffer_size = config.buffer_size,
        discount_percent = config.context.coupons.discount_percent(),
        "Starting cart service"
    );

    web::serve(config).await
}
