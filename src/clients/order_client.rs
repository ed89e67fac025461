use crate::model::{Order, OrderCreate, OrderId, OrderPatch};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Pricing happens inside the actor's hooks; this client only ships payloads.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(?order, "create_order called");
        let created = self.inner.create(order).await.map_err(Self::map_error)?;
        info!(total = %created.total_bill, "Order placed");
        Ok(created)
    }

    /// Fetches one order, failing with [`OrderError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.find(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, order))]
    pub async fn replace_order(&self, id: OrderId, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.replace(id, order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn patch_order(&self, id: OrderId, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.patch(id, patch).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;
    use resource_actor::mock::{create_mock_client, expect_list, MockClient};
    use rust_decimal::Decimal;

    fn order(id: u32, name: &str, total: i64) -> Order {
        Order {
            order_id: OrderId(id),
            customer_name: name.to_string(),
            items: vec![CartLine::new(1, 1)],
            total_bill: Decimal::new(total, 0),
        }
    }

    #[tokio::test]
    async fn test_replace_order_maps_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_replace(OrderId(1)).return_ok(order(1, "Ana", 350));
        mock.expect_replace(OrderId(2))
            .return_err(FrameworkError::NotFound("2".into()));

        let client = OrderClient::new(mock.client());
        let params = OrderCreate::new(9, "Ana", vec![CartLine::new(1, 1)]);

        let replaced = client.replace_order(OrderId(1), params.clone()).await.unwrap();
        assert_eq!(replaced.order_id, OrderId(1));
        assert_eq!(
            client.replace_order(OrderId(2), params).await,
            Err(OrderError::NotFound("2".into()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_goes_through_the_channel() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.list().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder
            .send(Ok(vec![order(1, "Ana", 350), order(2, "Ben", 190)]))
            .unwrap();

        let orders = task.await.unwrap().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].customer_name, "Ben");
    }
}
