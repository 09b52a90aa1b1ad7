//! Checkout module.
//!
//! Couples the coupon table, the fixed shipping methods, and the payment
//! gateway seam into a per-buyer checkout session.

mod coupon;
mod payment;
mod session;
mod shipping;

pub use coupon::Coupon;
pub use payment::{PaymentAuthorization, PaymentCapture, PaymentGateway};
pub use session::{CheckoutSession, CheckoutTotals, OrderConfirmation};
pub use shipping::{standard_methods, ShippingMethod};
