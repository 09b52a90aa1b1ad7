//! Discount coupons.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A redeemed percentage-off coupon.
///
/// The code table is compiled in; `POLY10` is the only live code and takes
/// 10% off the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    code: String,
    percent_off: f64,
}

impl Coupon {
    /// Redeem a code. Matching is case-insensitive and ignores surrounding
    /// whitespace; an unknown code is [`CommerceError::InvalidCoupon`].
    pub fn redeem(input: &str) -> Result<Self, CommerceError> {
        let normalized = input.trim().to_uppercase();
        match normalized.as_str() {
            "POLY10" => Ok(Self {
                code: normalized,
                percent_off: 10.0,
            }),
            _ => Err(CommerceError::InvalidCoupon(input.trim().to_string())),
        }
    }

    /// The canonical (uppercase) code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Discount percentage taken off the subtotal.
    pub fn percent_off(&self) -> f64 {
        self.percent_off
    }

    /// The discount amount for a given subtotal, rounded to whole cents.
    pub fn discount_on(&self, subtotal: &Money) -> Money {
        subtotal.percentage(self.percent_off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_redeem_is_case_insensitive_and_trims() {
        for input in ["POLY10", "poly10", "Poly10", "  poly10  "] {
            let coupon = Coupon::redeem(input).unwrap();
            assert_eq!(coupon.code(), "POLY10");
            assert_eq!(coupon.percent_off(), 10.0);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(matches!(
            Coupon::redeem("POLY20"),
            Err(CommerceError::InvalidCoupon(code)) if code == "POLY20"
        ));
        assert!(Coupon::redeem("").is_err());
    }

    #[test]
    fn test_discount_rounds_to_whole_cents() {
        let coupon = Coupon::redeem("POLY10").unwrap();
        // 10% of 259,85 is 25,985 — rounds to 25,99.
        let subtotal = Money::new(25985, Currency::BRL);
        assert_eq!(coupon.discount_on(&subtotal).amount_cents, 2599);
    }
}
