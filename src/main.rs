use menu_orders::api::decode_body;
use menu_orders::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig};
use menu_orders::model::{MenuItemId, OrderId};
use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

fn show<T: Serialize>(label: &str, value: &T) -> Result<(), serde_json::Error> {
    println!("{label}:\n{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting restaurant system");
    let system = RestaurantSystem::with_config(config);
    let api = system.api();

    async {
        let menu = api.list_menu().await?;
        info!(dishes = menu.len(), "Menu loaded");
        show("Adobo", &api.get_menu_item(MenuItemId(1)).await?)?;

        // Two Adobo: 2 × 350
        let body = r#"{"order_id": 1, "customer_name": "Ana", "items": [{"menu_item_id": 1, "quantity": 2}]}"#;
        let created = api.create_order(decode_body(body)?).await?;
        show("POST /orders", &created)?;

        // Down to one Adobo plus a dish that does not exist: it is kept but not charged
        let body = r#"{"items": [{"menu_item_id": 1, "quantity": 1}, {"menu_item_id": 999, "quantity": 5}]}"#;
        let patched = api.patch_order(OrderId(1), decode_body(body)?).await?;
        show("PATCH /orders/1", &patched)?;

        // Creating with the same unknown dish is refused outright
        let body = r#"{"order_id": 2, "customer_name": "Ben", "items": [{"menu_item_id": 999, "quantity": 1}]}"#;
        if let Err(e) = api.create_order(decode_body(body)?).await {
            warn!(status = e.status, detail = %e.detail, "Order refused");
            show("POST /orders (refused)", &e)?;
        }

        show("GET /orders", &api.list_orders().await?)?;
        show("DELETE /orders/1", &api.delete_order(OrderId(1)).await?)?;

        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(info_span!("adobo_scenario"))
    .await?;

    // Release the facade's clients so the actors can drain
    drop(api);
    system.shutdown().await?;
    Ok(())
}
