//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! The catalog is a leaf: menu items depend on nothing else, so the context is `()`.

use super::error::MenuError;
use crate::model::{MenuItem, MenuItemId, MenuItemPatch};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

fn check_price(id: MenuItemId, price: Decimal) -> Result<(), MenuError> {
    if price < Decimal::ZERO {
        return Err(MenuError::NegativePrice { id, price });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItem;
    type Patch = MenuItemPatch;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> &MenuItemId {
        &self.id
    }

    fn rekey(&mut self, id: MenuItemId) {
        self.id = id;
    }

    fn from_create_params(params: MenuItem) -> Result<Self, MenuError> {
        check_price(params.id, params.price)?;
        Ok(params)
    }

    /// Handles partial updates.
    ///
    /// # Fields Updated
    /// - `name`: Dish name
    /// - `price`: Unit price, rejected when negative
    async fn on_patch(&mut self, patch: MenuItemPatch, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = patch.price {
            check_price(self.id, price)?;
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        Ok(())
    }
}
