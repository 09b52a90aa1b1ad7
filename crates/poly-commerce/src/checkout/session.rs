//! Checkout session: coupon, shipping selection, totals, and order placement.

use crate::checkout::{Coupon, PaymentGateway, ShippingMethod};
use crate::error::CommerceError;
use crate::ids::ShippingMethodId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// The derived money breakdown for a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub total: Money,
}

/// A placed order, returned after payment settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Human-facing order number, e.g. "POLY52031847".
    pub order_number: String,
    pub totals: CheckoutTotals,
    /// Coupon code applied, if any.
    pub coupon_code: Option<String>,
    /// Shipping method chosen.
    pub shipping_method: ShippingMethodId,
}

/// One buyer's checkout in progress.
///
/// The session holds the coupon and shipping selection; the cart subtotal
/// is passed in at read time so the cart stays the single source of truth
/// for line items.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    methods: Vec<ShippingMethod>,
    coupon: Option<Coupon>,
    selected: Option<ShippingMethod>,
}

impl CheckoutSession {
    /// Start a session offering the given shipping methods.
    pub fn new(methods: Vec<ShippingMethod>) -> Self {
        Self {
            methods,
            coupon: None,
            selected: None,
        }
    }

    /// Offered shipping methods, in display order.
    pub fn shipping_methods(&self) -> &[ShippingMethod] {
        &self.methods
    }

    /// The applied coupon, if any.
    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// The selected shipping method, if any.
    pub fn selected_shipping(&self) -> Option<&ShippingMethod> {
        self.selected.as_ref()
    }

    /// Redeem and apply a coupon code.
    ///
    /// A valid code replaces any previously applied coupon; an invalid code
    /// returns the error and leaves the current coupon in place.
    pub fn apply_coupon(&mut self, code: &str) -> Result<&Coupon, CommerceError> {
        let coupon = Coupon::redeem(code)?;
        Ok(self.coupon.insert(coupon))
    }

    /// Drop the applied coupon, if any.
    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    /// Select a shipping method by id.
    pub fn select_shipping(&mut self, id: &ShippingMethodId) -> Result<(), CommerceError> {
        match self.methods.iter().find(|m| &m.id == id) {
            Some(method) => {
                self.selected = Some(method.clone());
                Ok(())
            }
            None => Err(CommerceError::UnknownShippingMethod(id.to_string())),
        }
    }

    /// Compute the money breakdown for a given cart subtotal.
    ///
    /// Discount applies to the subtotal only, never to shipping. Without a
    /// shipping selection the shipping line is zero.
    pub fn totals(&self, subtotal: Money) -> Result<CheckoutTotals, CommerceError> {
        let discount = self
            .coupon
            .as_ref()
            .map_or(Money::zero(subtotal.currency), |c| c.discount_on(&subtotal));
        let shipping = self
            .selected
            .as_ref()
            .map_or(Money::zero(subtotal.currency), |m| m.price);

        let after_discount = subtotal
            .try_subtract(&discount)
            .ok_or(CommerceError::Overflow)?;
        let total = after_discount
            .try_add(&shipping)
            .ok_or(CommerceError::Overflow)?;

        Ok(CheckoutTotals {
            subtotal,
            discount,
            shipping,
            total,
        })
    }

    /// Place the order: authorize and capture the total through the gateway.
    ///
    /// Requires a shipping selection. A declined payment surfaces as
    /// [`CommerceError::PaymentDeclined`] and leaves the session untouched,
    /// so the buyer can retry.
    pub fn place_order<G: PaymentGateway>(
        &self,
        gateway: &mut G,
        subtotal: Money,
    ) -> Result<OrderConfirmation, CommerceError> {
        let shipping_method = self
            .selected
            .as_ref()
            .ok_or(CommerceError::ShippingNotSelected)?;
        let totals = self.totals(subtotal)?;
        let order_number = order_number(now_millis());

        let authorization = gateway.authorize(&totals.total, &order_number)?;
        gateway.capture(&authorization)?;

        Ok(OrderConfirmation {
            order_number,
            totals,
            coupon_code: self.coupon.as_ref().map(|c| c.code().to_string()),
            shipping_method: shipping_method.id.clone(),
        })
    }
}

impl Default for CheckoutSession {
    /// A session offering the standard shipping table.
    fn default() -> Self {
        Self::new(crate::checkout::standard_methods())
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Order number: "POLY" plus the last eight digits of the epoch timestamp
/// in milliseconds.
fn order_number(timestamp_millis: u128) -> String {
    let digits = timestamp_millis.to_string();
    let start = digits.len().saturating_sub(8);
    format!("POLY{}", &digits[start..])
}
