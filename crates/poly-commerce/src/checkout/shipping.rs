//! Shipping methods and the fixed method table.

use crate::ids::ShippingMethodId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shipping option offered at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Stable identifier (e.g., "pac").
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Flat shipping price.
    pub price: Money,
    /// Minimum delivery time in business days.
    pub min_days: u32,
    /// Maximum delivery time in business days.
    pub max_days: u32,
}

impl ShippingMethod {
    /// Delivery window copy, e.g. "5 a 8 dias \u{fa}teis".
    pub fn delivery_estimate(&self) -> String {
        format!("{} a {} dias \u{fa}teis", self.min_days, self.max_days)
    }
}

/// The fixed shipping method table, in display order.
pub fn standard_methods() -> Vec<ShippingMethod> {
    vec![
        ShippingMethod {
            id: ShippingMethodId::new("pac"),
            name: "PAC".to_string(),
            price: Money::new(1890, Currency::BRL),
            min_days: 5,
            max_days: 8,
        },
        ShippingMethod {
            id: ShippingMethodId::new("sedex"),
            name: "SEDEX".to_string(),
            price: Money::new(3290, Currency::BRL),
            min_days: 2,
            max_days: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_methods_table() {
        let methods = standard_methods();
        assert_eq!(methods.len(), 2);

        assert_eq!(methods[0].id.as_str(), "pac");
        assert_eq!(methods[0].price.amount_cents, 1890);
        assert_eq!(methods[0].delivery_estimate(), "5 a 8 dias \u{fa}teis");

        assert_eq!(methods[1].id.as_str(), "sedex");
        assert_eq!(methods[1].price.amount_cents, 3290);
        assert_eq!(methods[1].delivery_estimate(), "2 a 4 dias \u{fa}teis");
    }
}
