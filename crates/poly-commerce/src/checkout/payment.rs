//! Payment gateway seam.
//!
//! Checkout talks to payment through [`PaymentGateway`], a two-phase
//! authorize-then-capture interface. Production wires in a real processor;
//! tests use an in-memory fake.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A successful authorization hold on the buyer's payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAuthorization {
    /// Gateway-issued authorization id.
    pub authorization_id: String,
    /// Amount held.
    pub amount: Money,
}

/// A settled capture of a previously authorized amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCapture {
    /// Gateway-issued capture id.
    pub capture_id: String,
    /// Amount settled.
    pub amount: Money,
}

/// Two-phase payment processing.
///
/// Implementations map their own failure modes onto
/// [`CommerceError::PaymentDeclined`].
pub trait PaymentGateway {
    /// Place a hold for `amount`, tagged with an order reference.
    fn authorize(
        &mut self,
        amount: &Money,
        reference: &str,
    ) -> Result<PaymentAuthorization, CommerceError>;

    /// Settle a previously placed hold.
    fn capture(
        &mut self,
        authorization: &PaymentAuthorization,
    ) -> Result<PaymentCapture, CommerceError>;
}


#[cfg(test)]
mod tests {
    use super::fake::FakeGateway;
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_fake_gateway_authorize_then_capture() {
        let mut gateway = FakeGateway::default();
        let amount = Money::new(10000, Currency::BRL);

        let auth = gateway.authorize(&amount, "POLY12345678").unwrap();
        assert_eq!(auth.amount, amount);

        let capture = gateway.capture(&auth).unwrap();
        assert_eq!(capture.amount, amount);
        assert_eq!(gateway.captures, vec![auth.authorization_id]);
    }

    #[test]
    fn test_fake_gateway_decline() {
        let mut gateway = FakeGateway {
            decline: true,
            ..FakeGateway::default()
        };
        let amount = Money::new(10000, Currency::BRL);
        assert!(matches!(
            gateway.authorize(&amount, "POLY12345678"),
            Err(CommerceError::PaymentDeclined(_))
        ));
    }
}
