//! Coupon validation and the discount it grants.

use std::sync::LazyLock;

use regex::Regex;

use super::CartError;

/// Three uppercase letters, a hyphen, four digits.
pub const DEFAULT_COUPON_PATTERN: &str = r"^[A-Z]{3}-[0-9]{4}$";

pub const DEFAULT_DISCOUNT_PERCENT: u32 = 10;

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_COUPON_PATTERN).unwrap_or_else(|_| unreachable!()));

/// Errors raised while building a [`CouponPolicy`].
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid coupon pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Discount must be at most 100 percent, got {0}")]
    Discount(u32),
}

/// Which codes are accepted and how much they take off.
#[derive(Debug, Clone)]
pub struct CouponPolicy {
    pattern: Regex,
    discount_percent: u32,
}

impl CouponPolicy {
    pub fn new(pattern: &str, discount_percent: u32) -> Result<Self, PolicyError> {
        if discount_percent > 100 {
            return Err(PolicyError::Discount(discount_percent));
        }
        Ok(Self {
            pattern: Regex::new(pattern)?,
            discount_percent,
        })
    }

    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Checks the shape of `code`; nothing else about the code is known.
    pub fn validate(&self, code: &str) -> Result<(), CartError> {
        if self.pattern.is_match(code) {
            Ok(())
        } else {
            Err(CartError::InvalidCoupon(code.to_string()))
        }
    }

    /// Discounted unit price, truncated to whole units.
    pub fn apply(&self, price: u32) -> u32 {
        let kept = u64::from(100 - self.discount_percent);
        // Never exceeds `price`, so the narrowing is lossless.
        (u64::from(price) * kept / 100) as u32
    }
}

impl Default for CouponPolicy {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}
