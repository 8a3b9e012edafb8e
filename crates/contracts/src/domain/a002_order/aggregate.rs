use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
/// Closed set of order states. Parsing is case-insensitive; anything
/// outside the set is rejected rather than stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Transition table: pending may become delivered or cancelled,
    /// terminal states only re-assert themselves.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if *self == next {
            return true;
        }
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Delivered)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Persisted checkout record. The record `id` is assigned by the store;
/// `order_token` is the caller-supplied token kept for display and
/// correlation only, with no uniqueness guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "orderId")]
    pub order_token: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub orderdate: chrono::DateTime<chrono::Utc>,
    pub orderamount: f64,
    pub status: OrderStatus,
    #[serde(skip)]
    pub metadata: EntityMetadata,
}

impl Order {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Checkout submission as it arrives on the wire. Every field is
/// required; blank strings count as missing, matching how the
/// storefront treats them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDto {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "orderDate")]
    pub order_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "orderAmount")]
    pub order_amount: Option<f64>,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl OrderDto {
    fn present(s: &Option<String>) -> bool {
        s.as_deref().map_or(false, |v| !v.trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        let complete = Self::present(&self.order_id)
            && Self::present(&self.user_name)
            && Self::present(&self.email)
            && Self::present(&self.phone)
            && self.order_date.is_some()
            && self.order_amount.is_some()
            && Self::present(&self.address)
            && Self::present(&self.status);
        if !complete {
            return Err("All fields are required.".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_dto() -> OrderDto {
        OrderDto {
            order_id: Some("1718000000000".into()),
            user_name: Some("Ayse".into()),
            email: Some("ayse@example.com".into()),
            phone: Some("05550001122".into()),
            order_date: Some(chrono::Utc::now()),
            order_amount: Some(25.0),
            address: Some("Istanbul".into()),
            status: Some("pending".into()),
        }
    }

    #[test]
    fn complete_dto_validates() {
        assert!(full_dto().validate().is_ok());
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut dto = full_dto();
        dto.phone = None;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let mut dto = full_dto();
        dto.address = Some("   ".into());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("Pending"), Ok(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("DELIVERED"), Ok(OrderStatus::Delivered));
        assert!(OrderStatus::parse("shipped").is_err());
    }

    #[test]
    fn transition_table() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Delivered.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Delivered));
    }
}
