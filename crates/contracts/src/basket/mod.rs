//! Client-held basket: an explicit, serializable value object owned by
//! the session. Nothing here touches the network; `checkout` only
//! assembles the submission the storefront then sends.

use crate::domain::a001_product::Product;
use crate::domain::a002_order::OrderDto;
use serde::{Deserialize, Serialize};

/// One selected product. Price and stock are snapshots taken when the
/// item entered the basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub stock: i32,
    pub quantity: u32,
}

/// Customer identity as known to the storefront session. Phone and
/// address may be absent from the profile; checkout substitutes the
/// storefront's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// One per-item stock overwrite the client issues after the order is
/// accepted: `new_stock = snapshot − quantity`, absolute replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAdjustment {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "newStock")]
    pub new_stock: i32,
}

/// Everything `checkout` produces: the order submission plus the
/// stock writes to apply once the order is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSubmission {
    pub order: OrderDto,
    #[serde(rename = "stockAdjustments")]
    pub stock_adjustments: Vec<StockAdjustment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Basket {
    pub items: Vec<BasketItem>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product: bump the quantity when the product is
    /// already present, otherwise insert a fresh entry at quantity 1.
    pub fn add(&mut self, product: &Product) {
        let id = product.to_string_id();
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == id) {
            item.quantity += 1;
        } else {
            self.items.push(BasketItem {
                product_id: id,
                name: product.name.clone(),
                unit_price: product.price,
                stock: product.stock,
                quantity: 1,
            });
        }
    }

    /// Drop an entry entirely; unknown ids are ignored.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Lower the quantity by one, never below 1. Removal stays an
    /// explicit `remove` call.
    pub fn decrease(&mut self, product_id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = item.quantity.saturating_sub(1).max(1);
        }
    }

    /// Basket total, recomputed from the entries on every call.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.unit_price * i.quantity as f64)
            .sum()
    }

    /// Assemble the checkout submission. Returns `None` when the basket
    /// is empty or no authenticated customer is available. The order
    /// token is minted from the wall clock, exactly as the storefront
    /// does; the server treats it as an opaque non-unique field.
    pub fn checkout(
        &self,
        customer: Option<&CustomerProfile>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Option<CheckoutSubmission> {
        let customer = customer?;
        if self.is_empty() {
            return None;
        }

        let order = OrderDto {
            order_id: Some(now.timestamp_millis().to_string()),
            user_name: Some(customer.name.clone()),
            email: Some(customer.email.clone()),
            phone: Some(customer.phone.clone().unwrap_or_else(|| "000".into())),
            order_date: Some(now),
            order_amount: Some(self.total()),
            address: Some(
                customer
                    .address
                    .clone()
                    .unwrap_or_else(|| "No address".into()),
            ),
            status: Some("pending".into()),
        };

        let stock_adjustments = self
            .items
            .iter()
            .map(|i| StockAdjustment {
                product_id: i.product_id.clone(),
                new_stock: i.stock - i.quantity as i32,
            })
            .collect();

        Some(CheckoutSubmission {
            order,
            stock_adjustments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;

    fn product(name: &str, price: f64, stock: i32) -> Product {
        Product {
            id: ProductId::new_v4(),
            name: name.into(),
            price,
            image: "img.png".into(),
            category: "Dairy".into(),
            stock,
            metadata: Default::default(),
        }
    }

    fn customer() -> CustomerProfile {
        CustomerProfile {
            name: "Ayse".into(),
            email: "ayse@example.com".into(),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn add_merges_by_product_identity() {
        let milk = product("Milk", 10.0, 5);
        let mut basket = Basket::new();
        basket.add(&milk);
        basket.add(&milk);
        assert_eq!(basket.items.len(), 1);
        assert_eq!(basket.items[0].quantity, 2);
    }

    #[test]
    fn total_recomputes_over_surviving_entries() {
        let milk = product("Milk", 10.0, 5);
        let bread = product("Bread", 5.0, 8);
        let mut basket = Basket::new();
        basket.add(&milk);
        basket.add(&milk);
        basket.add(&bread);
        assert_eq!(basket.total(), 25.0);

        basket.remove(&bread.to_string_id());
        assert_eq!(basket.total(), 20.0);

        basket.decrease(&milk.to_string_id());
        assert_eq!(basket.total(), 10.0);
    }

    #[test]
    fn decrease_floors_at_one_and_never_removes() {
        let milk = product("Milk", 10.0, 5);
        let mut basket = Basket::new();
        basket.add(&milk);
        basket.decrease(&milk.to_string_id());
        basket.decrease(&milk.to_string_id());
        assert_eq!(basket.items.len(), 1);
        assert_eq!(basket.items[0].quantity, 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let milk = product("Milk", 10.0, 5);
        let mut basket = Basket::new();
        basket.add(&milk);
        basket.remove("not-a-known-id");
        assert_eq!(basket.items.len(), 1);
    }

    #[test]
    fn checkout_builds_order_and_one_write_per_item() {
        let p1 = product("Milk", 10.0, 5);
        let p2 = product("Bread", 5.0, 8);
        let mut basket = Basket::new();
        basket.add(&p1);
        basket.add(&p1);
        basket.add(&p2);

        let now = chrono::Utc::now();
        let submission = basket.checkout(Some(&customer()), now).unwrap();

        assert_eq!(submission.order.order_amount, Some(25.0));
        assert_eq!(submission.order.status.as_deref(), Some("pending"));
        assert_eq!(submission.order.phone.as_deref(), Some("000"));
        assert_eq!(submission.order.address.as_deref(), Some("No address"));
        assert_eq!(
            submission.order.order_id.as_deref(),
            Some(now.timestamp_millis().to_string().as_str())
        );
        assert!(submission.order.validate().is_ok());

        assert_eq!(submission.stock_adjustments.len(), 2);
        assert_eq!(
            submission.stock_adjustments[0],
            StockAdjustment {
                product_id: p1.to_string_id(),
                new_stock: 3,
            }
        );
        assert_eq!(submission.stock_adjustments[1].new_stock, 7);
    }

    #[test]
    fn checkout_requires_items_and_customer() {
        let empty = Basket::new();
        assert!(empty.checkout(Some(&customer()), chrono::Utc::now()).is_none());

        let mut basket = Basket::new();
        basket.add(&product("Milk", 10.0, 5));
        assert!(basket.checkout(None, chrono::Utc::now()).is_none());
    }
}
