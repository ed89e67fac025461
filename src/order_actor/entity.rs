//! ActorEntity trait implementation for the Order domain type.
//!
//! Orders are priced against the menu catalog, so the order actor runs with a
//! [`MenuClient`] as its context. Every hook that touches `items` takes one catalog
//! snapshot and prices the whole list against it.

use super::error::OrderError;
use crate::clients::MenuClient;
use crate::model::{CartLine, MenuItem, Order, OrderCreate, OrderId, OrderPatch};
use crate::pricing::compute_total;
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;
use tracing::debug;

fn check_quantities(items: &[CartLine]) -> Result<(), OrderError> {
    match items.iter().find(|line| line.quantity == 0) {
        Some(line) => Err(OrderError::InvalidQuantity {
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
        }),
        None => Ok(()),
    }
}

async fn catalog_snapshot(menu: &MenuClient) -> Result<Vec<MenuItem>, OrderError> {
    menu.list()
        .await
        .map_err(|e| OrderError::MenuUnavailable(e.to_string()))
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Patch = OrderPatch;
    type Context = MenuClient;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    fn rekey(&mut self, id: OrderId) {
        self.order_id = id;
    }

    /// Builds an unpriced order; the total is filled in by `on_create`.
    fn from_create_params(params: OrderCreate) -> Result<Self, OrderError> {
        check_quantities(&params.items)?;
        Ok(Self {
            order_id: params.order_id,
            customer_name: params.customer_name,
            items: params.items,
            total_bill: Decimal::ZERO,
        })
    }

    /// Prices the order. Any line whose menu item is missing refuses the whole order,
    /// reporting the first such line. So does a total too large to represent.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), OrderError> {
        let catalog = catalog_snapshot(menu).await?;
        self.total_bill = compute_total(&self.items, &catalog)?
            .strict()
            .map_err(OrderError::MenuItemNotFound)?;
        debug!(order_id = %self.order_id, total = %self.total_bill, "Priced order");
        Ok(())
    }

    /// Handles partial updates.
    ///
    /// # Fields Updated
    /// - `customer_name`: replaced when supplied
    /// - `items`: stored as given; the total is recomputed from the lines that resolve,
    ///   unknown menu items count as zero instead of failing, an overflowing total fails
    async fn on_patch(&mut self, patch: OrderPatch, menu: &MenuClient) -> Result<(), OrderError> {
        if let Some(items) = patch.items {
            check_quantities(&items)?;
            let catalog = catalog_snapshot(menu).await?;
            let outcome = compute_total(&items, &catalog)?;
            if let Some(missing) = outcome.first_unresolved {
                debug!(order_id = %self.order_id, %missing, "Skipping unresolved menu item");
            }
            self.total_bill = outcome.total;
            self.items = items;
        }
        if let Some(name) = patch.customer_name {
            self.customer_name = name;
        }
        Ok(())
    }
}
