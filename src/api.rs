//! # Boundary Facade
//!
//! [`RestaurantApi`] is what a transport layer calls: one method per verb and path, each
//! returning either a serializable reply or an [`ApiError`] with a status code. No server
//! is bundled; anything that can route a request and serialize JSON can sit on top.
//!
//! | Verb+Path | Method |
//! |-----------|--------|
//! | GET /menu | [`list_menu`](RestaurantApi::list_menu) |
//! | GET /menu/{id} | [`get_menu_item`](RestaurantApi::get_menu_item) |
//! | POST /menu | [`add_menu_item`](RestaurantApi::add_menu_item) |
//! | PUT /menu/{id} | [`replace_menu_item`](RestaurantApi::replace_menu_item) |
//! | PATCH /menu/{id} | [`patch_menu_item`](RestaurantApi::patch_menu_item) |
//! | DELETE /menu/{id} | [`delete_menu_item`](RestaurantApi::delete_menu_item) |
//! | POST /orders | [`create_order`](RestaurantApi::create_order) |
//! | GET /orders | [`list_orders`](RestaurantApi::list_orders) |
//! | GET /orders/{id} | [`get_order`](RestaurantApi::get_order) |
//! | PUT /orders/{id} | [`replace_order`](RestaurantApi::replace_order) |
//! | PATCH /orders/{id} | [`patch_order`](RestaurantApi::patch_order) |
//! | DELETE /orders/{id} | [`delete_order`](RestaurantApi::delete_order) |
//!
//! Raw request bodies go through [`decode_body`] first.

use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemId, MenuItemPatch, Order, OrderCreate, OrderId, OrderPatch};
use crate::order_actor::OrderError;
use resource_actor::ActorClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const UNPROCESSABLE_ENTITY: u16 = 422;
pub const SERVICE_UNAVAILABLE: u16 = 503;

/// A failed request, as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{status} {detail}")]
pub struct ApiError {
    pub status: u16,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NotFound(_) => Self::new(NOT_FOUND, "Menu item not found"),
            MenuError::DuplicateKey(_) => {
                Self::new(BAD_REQUEST, "Menu item with this ID already exists.")
            }
            MenuError::NegativePrice { .. } => Self::new(UNPROCESSABLE_ENTITY, e.to_string()),
            MenuError::ActorCommunicationError(_) => {
                Self::new(SERVICE_UNAVAILABLE, e.to_string())
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => Self::new(NOT_FOUND, "Order not found"),
            OrderError::DuplicateKey(_) => {
                Self::new(BAD_REQUEST, "Order with this ID already exists.")
            }
            OrderError::MenuItemNotFound(id) => {
                Self::new(NOT_FOUND, format!("Menu item with ID {id} not found"))
            }
            OrderError::InvalidQuantity { .. } | OrderError::TotalOverflow(_) => {
                Self::new(UNPROCESSABLE_ENTITY, e.to_string())
            }
            OrderError::MenuUnavailable(_) | OrderError::ActorCommunicationError(_) => {
                Self::new(SERVICE_UNAVAILABLE, e.to_string())
            }
        }
    }
}

/// Parses a JSON request body. Malformed or mistyped bodies are a 422.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::new(UNPROCESSABLE_ENTITY, e.to_string()))
}

/// Reply to a menu write. `item` is absent for deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuReply {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<MenuItem>,
}

/// Reply to an order write. `order` is absent for deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReply {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Verb-and-path operations over the menu catalog and the order book.
#[derive(Clone)]
pub struct RestaurantApi {
    menu: MenuClient,
    orders: OrderClient,
}

impl RestaurantApi {
    pub fn new(menu: MenuClient, orders: OrderClient) -> Self {
        Self { menu, orders }
    }

    // --- /menu ---

    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        Ok(self.menu.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<MenuItem, ApiError> {
        Ok(self.menu.get_item(id).await?)
    }

    #[instrument(skip(self, item))]
    pub async fn add_menu_item(&self, item: MenuItem) -> Result<MenuReply, ApiError> {
        let item = self.menu.add_item(item).await?;
        Ok(MenuReply {
            message: "Menu item added successfully",
            item: Some(item),
        })
    }

    #[instrument(skip(self, item))]
    pub async fn replace_menu_item(
        &self,
        id: MenuItemId,
        item: MenuItem,
    ) -> Result<MenuReply, ApiError> {
        let item = self.menu.replace_item(id, item).await?;
        Ok(MenuReply {
            message: "Menu item updated successfully",
            item: Some(item),
        })
    }

    #[instrument(skip(self))]
    pub async fn patch_menu_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuReply, ApiError> {
        let item = self.menu.patch_item(id, patch).await?;
        Ok(MenuReply {
            message: "Menu item partially updated",
            item: Some(item),
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<MenuReply, ApiError> {
        self.menu.remove_item(id).await?;
        Ok(MenuReply {
            message: "Menu item deleted successfully",
            item: None,
        })
    }

    // --- /orders ---

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderReply, ApiError> {
        let order = self.orders.create_order(order).await?;
        Ok(OrderReply {
            message: "Order created successfully",
            order: Some(order),
        })
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.orders.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        Ok(self.orders.get_order(id).await?)
    }

    #[instrument(skip(self, order))]
    pub async fn replace_order(
        &self,
        id: OrderId,
        order: OrderCreate,
    ) -> Result<OrderReply, ApiError> {
        let order = self.orders.replace_order(id, order).await?;
        Ok(OrderReply {
            message: "Order updated successfully",
            order: Some(order),
        })
    }

    #[instrument(skip(self))]
    pub async fn patch_order(&self, id: OrderId, patch: OrderPatch) -> Result<OrderReply, ApiError> {
        let order = self.orders.patch_order(id, patch).await?;
        Ok(OrderReply {
            message: "Order partially updated",
            order: Some(order),
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<OrderReply, ApiError> {
        self.orders.remove_order(id).await?;
        Ok(OrderReply {
            message: "Order deleted successfully",
            order: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_error_details() {
        assert_eq!(
            ApiError::from(MenuError::DuplicateKey("1".into())),
            ApiError::new(400, "Menu item with this ID already exists.")
        );
        assert_eq!(
            ApiError::from(OrderError::MenuItemNotFound(MenuItemId(999))),
            ApiError::new(404, "Menu item with ID 999 not found")
        );
        assert_eq!(
            ApiError::from(OrderError::NotFound("7".into())),
            ApiError::new(404, "Order not found")
        );
        assert_eq!(
            ApiError::from(MenuError::NegativePrice {
                id: MenuItemId(1),
                price: Decimal::new(-1, 0),
            })
            .status,
            422
        );
        assert_eq!(
            ApiError::from(OrderError::MenuUnavailable("closed".into())).status,
            503
        );
        assert_eq!(
            ApiError::from(OrderError::TotalOverflow(MenuItemId(1))),
            ApiError::new(422, "Order total overflowed at menu item 1")
        );
    }

    #[test]
    fn test_decode_body() {
        let patch: MenuItemPatch = decode_body(r#"{"price": 400}"#).unwrap();
        assert_eq!(patch.price, Some(Decimal::new(400, 0)));

        let err = decode_body::<OrderCreate>(r#"{"order_id": "x"}"#).unwrap_err();
        assert_eq!(err.status, 422);
    }

    #[test]
    fn test_delete_reply_has_only_message() {
        let reply = MenuReply {
            message: "Menu item deleted successfully",
            item: None,
        };
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({"message": "Menu item deleted successfully"})
        );
    }
}
