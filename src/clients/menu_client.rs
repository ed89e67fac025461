use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemId, MenuItemPatch};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Fetches one dish, failing with [`MenuError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.find(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!(name = %item.name, "Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    /// Overwrites the dish stored under `id`. The stored record keeps `id` even when
    /// `item` carries another one.
    #[instrument(skip(self, item))]
    pub async fn replace_item(&self, id: MenuItemId, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.replace(id, item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn patch_item(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.patch(id, patch).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_create, expect_patch, MockClient};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_add_item_sends_dish_unchanged() {
        let (inner, mut receiver) = create_mock_client::<MenuItem>(10);
        let client = MenuClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .add_item(MenuItem::new(16, "Tinola", Decimal::new(310, 0)))
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.id, MenuItemId(16));
        assert_eq!(payload.name, "Tinola");
        responder.send(Ok(payload)).unwrap();

        assert_eq!(task.await.unwrap().unwrap().price, Decimal::new(310, 0));
    }

    #[tokio::test]
    async fn test_patch_item_forwards_patch() {
        let (inner, mut receiver) = create_mock_client::<MenuItem>(10);
        let client = MenuClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .patch_item(MenuItemId(1), MenuItemPatch::price(Decimal::new(400, 0)))
                .await
        });

        let (id, patch, responder) = expect_patch(&mut receiver)
            .await
            .expect("Expected Patch request");
        assert_eq!(id, MenuItemId(1));
        assert_eq!(patch.name, None);
        responder
            .send(Ok(MenuItem::new(1, "Adobo", Decimal::new(400, 0))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().name, "Adobo");
    }

    #[tokio::test]
    async fn test_errors_are_mapped() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_get(MenuItemId(42)).return_ok(None);
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("1".into()));
        mock.expect_delete(MenuItemId(3))
            .return_err(FrameworkError::ActorClosed);

        let client = MenuClient::new(mock.client());

        assert_eq!(
            client.get_item(MenuItemId(42)).await,
            Err(MenuError::NotFound("42".into()))
        );
        assert_eq!(
            client
                .add_item(MenuItem::new(1, "Adobo", Decimal::new(350, 0)))
                .await,
            Err(MenuError::DuplicateKey("1".into()))
        );
        assert!(matches!(
            client.remove_item(MenuItemId(3)).await,
            Err(MenuError::ActorCommunicationError(_))
        ));

        mock.verify();
    }
}
