//! Cart aggregate and line item types.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One (product, color, size, quantity) record in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Selected color name.
    pub color: String,
    /// Selected size name.
    pub size: String,
    /// Quantity, always >= 1 while the item exists.
    pub quantity: i64,
    /// Effective unit price captured when the item was added.
    pub unit_price: Money,
}

impl LineItem {
    /// Whether this item is keyed by the given (product, color, size) triple.
    pub fn has_key(&self, product_id: &ProductId, color: &str, size: &str) -> bool {
        &self.product_id == product_id && self.color == color && self.size == size
    }

    /// Line total (unit price times quantity), `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// A command dispatched into the cart.
///
/// Commands apply strictly in issue order; there is no batching or
/// coalescing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartCommand {
    /// Merge a variant into the cart, incrementing quantity when the
    /// (product, color, size) key already exists.
    AddItem {
        product_id: ProductId,
        color: String,
        size: String,
        quantity: i64,
    },
    /// Delete the line with the matching key, if any.
    RemoveItem {
        product_id: ProductId,
        color: String,
        size: String,
    },
    /// Set the quantity of the matching line; zero or below removes it.
    UpdateQuantity {
        product_id: ProductId,
        color: String,
        size: String,
        quantity: i64,
    },
    /// Empty the line-item collection.
    Clear,
    /// Set the drawer visibility flag.
    SetOpen(bool),
    /// Flip the drawer visibility flag.
    ToggleOpen,
}

impl CartCommand {
    /// Whether this command can touch the line-item collection (and thus
    /// triggers a persistence write when it does).
    pub fn targets_items(&self) -> bool {
        !matches!(self, CartCommand::SetOpen(_) | CartCommand::ToggleOpen)
    }
}

/// The cart aggregate: line items in insertion order plus the drawer flag.
///
/// Invariant: at most one line item exists per (product, color, size) key.
/// Totals are derived on every read, never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total item count: the sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal: the sum of quantity times effective unit price.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self
            .items
            .first()
            .map_or(Currency::default(), |i| i.unit_price.currency);
        let mut total = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Merge a product variant into the cart.
    ///
    /// Returns whether the collection changed. A non-positive quantity or a
    /// (color, size) pair that does not resolve to offered, available
    /// options makes this a silent no-op — the UI guards selection, but the
    /// core tolerates the call.
    pub fn add_item(&mut self, product: &Product, color: &str, size: &str, quantity: i64) -> bool {
        if quantity <= 0 || !product.has_available_variant(color, size) {
            return false;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.has_key(&product.id, color, size))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return true;
        }

        self.items.push(LineItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            color: color.to_string(),
            size: size.to_string(),
            quantity,
            unit_price: product.effective_price(),
        });
        true
    }

    /// Delete the line with the matching key. No-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId, color: &str, size: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| !i.has_key(product_id, color, size));
        self.items.len() < before
    }

    /// Set the quantity of the matching line. Zero or below removes the
    /// line entirely; no match is a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        color: &str,
        size: &str,
        quantity: i64,
    ) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id, color, size);
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.has_key(product_id, color, size))
        {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the line-item collection. The drawer flag is unaffected.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// Set the drawer visibility flag.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Flip the drawer visibility flag.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Reduce one command into the aggregate.
    ///
    /// `AddItem` resolves the product against the catalog; an unknown id is
    /// a silent no-op. Returns whether the line-item collection changed.
    pub fn apply(&mut self, command: CartCommand, catalog: &Catalog) -> bool {
        match command {
            CartCommand::AddItem {
                product_id,
                color,
                size,
                quantity,
            } => match catalog.by_id(&product_id) {
                Some(product) => self.add_item(product, &color, &size, quantity),
                None => false,
            },
            CartCommand::RemoveItem {
                product_id,
                color,
                size,
            } => self.remove_item(&product_id, &color, &size),
            CartCommand::UpdateQuantity {
                product_id,
                color,
                size,
                quantity,
            } => self.update_quantity(&product_id, &color, &size, quantity),
            CartCommand::Clear => self.clear(),
            CartCommand::SetOpen(open) => {
                self.set_open(open);
                false
            }
            CartCommand::ToggleOpen => {
                self.toggle_open();
                false
            }
        }
    }
}
