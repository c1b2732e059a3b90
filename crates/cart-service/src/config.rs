//! Command-line and environment configuration.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::cart_actor::{CartContext, CouponPolicy, PolicyError, DEFAULT_COUPON_PATTERN};

#[derive(Debug, Parser)]
#[command(name = "cart-service", about = "Shopping cart served by a single owner task")]
pub struct CliArgs {
    #[arg(
        value_name = "PORT",
        env = "CART_SERVICE_PORT",
        default_value_t = 8080,
        help = "Port to listen on"
    )]
    pub port: u16,

    #[arg(
        long,
        env = "CART_SERVICE_BIND",
        value_name = "ADDR",
        default_value = "0.0.0.0",
        help = "Interface to bind"
    )]
    pub bind: IpAddr,

    #[arg(
        long,
        env = "CART_SERVICE_BUFFER_SIZE",
        value_name = "N",
        default_value_t = 32,
        help = "Requests that may queue for the cart owner before senders wait"
    )]
    pub buffer_size: usize,

    #[arg(
        long,
        env = "CART_SERVICE_REQUEST_TIMEOUT_MS",
        value_name = "MS",
        help = "Give up on a cart reply after this many milliseconds"
    )]
    pub request_timeout_ms: Option<u64>,

    #[arg(
        long,
        env = "CART_SERVICE_DISCOUNT_PERCENT",
        value_name = "PCT",
        default_value_t = 10,
        help = "Discount granted by a valid coupon"
    )]
    pub discount_percent: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Buffer size must be at least 1")]
    ZeroBuffer,
    #[error("Request timeout must be at least 1 ms")]
    ZeroTimeout,
    #[error(transparent)]
    Coupon(#[from] PolicyError),
}

/// Validated settings for a cart system and its HTTP surface.
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub bind_address: SocketAddr,
    pub buffer_size: usize,
    pub request_timeout: Option<Duration>,
    pub context: CartContext,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            buffer_size: 32,
            request_timeout: None,
            context: CartContext::default(),
        }
    }
}

impl CartConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.buffer_size == 0 {
            return Err(ConfigError::ZeroBuffer);
        }
        let request_timeout = match args.request_timeout_ms {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };
        let coupons = CouponPolicy::new(DEFAULT_COUPON_PATTERN, args.discount_percent)?;

        Ok(Self {
            bind_address: SocketAddr::new(args.bind, args.port),
            buffer_size: args.buffer_size,
            request_timeout,
            context: CartContext {
                coupons,
                ..CartContext::default()
            },
        })
    }
}
