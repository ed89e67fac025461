use crate::model::MenuItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Assigned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order: a menu item reference and how many of it.
///
/// The reference is by id only; the menu item may later disappear from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(menu_item_id: impl Into<MenuItemId>, quantity: u32) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            quantity,
        }
    }
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation and replacement payloads ([`OrderCreate`])
/// - Partial updates ([`OrderPatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_name: String,
    pub items: Vec<CartLine>,
    /// Cached Σ price × quantity as of the last change to `items`.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_bill: Decimal,
}

/// Payload for creating or fully replacing an order.
///
/// There is no `total_bill` here: the order actor derives it. A JSON body that
/// carries one anyway has it ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_id: OrderId,
    pub customer_name: String,
    pub items: Vec<CartLine>,
}

impl OrderCreate {
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_name: impl Into<String>,
        items: Vec<CartLine>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            items,
        }
    }
}

/// Partial update for an order.
///
/// Supplying `items` replaces the whole line list and re-prices it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CartLine>>,
}

impl OrderPatch {
    pub fn customer_name(name: impl Into<String>) -> Self {
        Self {
            customer_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn items(items: Vec<CartLine>) -> Self {
        Self {
            items: Some(items),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_create_ignores_client_total() {
        let body = r#"{
            "order_id": 4,
            "customer_name": "Ana",
            "items": [{"menu_item_id": 1, "quantity": 2}],
            "total_bill": 1.0
        }"#;
        let params: OrderCreate = serde_json::from_str(body).unwrap();
        assert_eq!(params.order_id, OrderId(4));
        assert_eq!(params.items, vec![CartLine::new(1, 2)]);
    }

    #[test]
    fn test_patch_distinguishes_absent_and_empty_items() {
        let absent: OrderPatch = serde_json::from_str(r#"{"customer_name": "Ben"}"#).unwrap();
        assert_eq!(absent.items, None);

        let empty: OrderPatch = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(empty.items, Some(vec![]));
        assert_eq!(empty.customer_name, None);
    }
}
