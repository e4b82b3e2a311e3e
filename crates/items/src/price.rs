use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ValueObject};

pub const PRICE_FIELD: &str = "price";

/// Maximum number of fractional digits a price may carry.
pub const MAX_PRICE_SCALE: u32 = 2;

/// Non-negative monetary amount with at most two fractional digits.
///
/// The scale is checked on the decimal as given: `10.000` is rejected even
/// though it is numerically equal to `10.00`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation(PRICE_FIELD, "price must not be negative"));
        }
        if amount.scale() > MAX_PRICE_SCALE {
            return Err(DomainError::validation(
                PRICE_FIELD,
                format!("price must have at most {MAX_PRICE_SCALE} decimal places"),
            ));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Display form with a comma decimal separator, e.g. `R$ 19,99`.
    pub fn formatted(&self) -> String {
        format!("R$ {}", self.0.to_string().replace('.', ","))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
