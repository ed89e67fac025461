use menu_orders::api::{decode_body, ApiError};
use menu_orders::lifecycle::RestaurantSystem;
use menu_orders::model::{MenuItemId, OrderId};
use serde_json::json;

#[tokio::test]
async fn test_menu_endpoints() {
    let system = RestaurantSystem::new();
    let api = system.api();

    assert_eq!(api.list_menu().await.unwrap().len(), 15);

    let body = r#"{"id": 16, "name": "Tinola", "price": 310}"#;
    let reply = api.add_menu_item(decode_body(body).unwrap()).await.unwrap();
    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({
            "message": "Menu item added successfully",
            "item": {"id": 16, "name": "Tinola", "price": 310.0}
        })
    );

    let err = api.add_menu_item(decode_body(body).unwrap()).await.unwrap_err();
    assert_eq!(err, ApiError::new(400, "Menu item with this ID already exists."));

    let reply = api
        .patch_menu_item(MenuItemId(16), decode_body(r#"{"price": "320.50"}"#).unwrap())
        .await
        .unwrap();
    assert_eq!(reply.message, "Menu item partially updated");
    assert_eq!(reply.item.unwrap().name, "Tinola");

    let reply = api
        .replace_menu_item(
            MenuItemId(16),
            decode_body(r#"{"id": 16, "name": "Tinolang Manok", "price": 330}"#).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(reply.message, "Menu item updated successfully");

    let reply = api.delete_menu_item(MenuItemId(16)).await.unwrap();
    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({"message": "Menu item deleted successfully"})
    );
    assert_eq!(
        api.get_menu_item(MenuItemId(16)).await.unwrap_err(),
        ApiError::new(404, "Menu item not found")
    );

    let err = api
        .patch_menu_item(MenuItemId(1), decode_body(r#"{"price": -1}"#).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status, 422);

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_endpoints() {
    let system = RestaurantSystem::new();
    let api = system.api();

    let body = r#"{"order_id": 1, "customer_name": "Ana", "items": [{"menu_item_id": 1, "quantity": 2}]}"#;
    let reply = api.create_order(decode_body(body).unwrap()).await.unwrap();
    assert_eq!(reply.message, "Order created successfully");
    assert_eq!(
        serde_json::to_value(reply.order.unwrap()).unwrap(),
        json!({
            "order_id": 1,
            "customer_name": "Ana",
            "items": [{"menu_item_id": 1, "quantity": 2}],
            "total_bill": 700.0
        })
    );

    let body = r#"{"items": [{"menu_item_id": 1, "quantity": 1}, {"menu_item_id": 999, "quantity": 5}]}"#;
    let reply = api
        .patch_order(OrderId(1), decode_body(body).unwrap())
        .await
        .unwrap();
    assert_eq!(reply.message, "Order partially updated");
    assert_eq!(
        serde_json::to_value(reply.order.unwrap()).unwrap(),
        json!({
            "order_id": 1,
            "customer_name": "Ana",
            "items": [
                {"menu_item_id": 1, "quantity": 1},
                {"menu_item_id": 999, "quantity": 5}
            ],
            "total_bill": 350.0
        })
    );

    let body = r#"{"order_id": 2, "customer_name": "Ben", "items": [{"menu_item_id": 999, "quantity": 1}]}"#;
    let err = api.create_order(decode_body(body).unwrap()).await.unwrap_err();
    assert_eq!(err, ApiError::new(404, "Menu item with ID 999 not found"));
    assert_eq!(
        api.get_order(OrderId(2)).await.unwrap_err(),
        ApiError::new(404, "Order not found")
    );

    let body = r#"{"order_id": 1, "customer_name": "Ana", "items": [{"menu_item_id": 15, "quantity": 1}]}"#;
    let reply = api
        .replace_order(OrderId(1), decode_body(body).unwrap())
        .await
        .unwrap();
    assert_eq!(reply.message, "Order updated successfully");

    assert_eq!(api.list_orders().await.unwrap().len(), 1);

    let reply = api.delete_order(OrderId(1)).await.unwrap();
    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({"message": "Order deleted successfully"})
    );
    assert!(api.list_orders().await.unwrap().is_empty());

    drop(api);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_bodies_are_unprocessable() {
    let err = decode_body::<menu_orders::model::OrderCreate>("not json").unwrap_err();
    assert_eq!(err.status, 422);

    let err = decode_body::<menu_orders::model::MenuItem>(r#"{"id": 1, "name": "Adobo"}"#)
        .unwrap_err();
    assert_eq!(err.status, 422);
}
