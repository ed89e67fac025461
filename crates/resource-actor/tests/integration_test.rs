use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Table {
    id: u32,
    seats: u32,
    label: String,
}

#[derive(Debug)]
struct TableCreate {
    id: u32,
    seats: u32,
    label: String,
}

#[derive(Debug, Default)]
struct TablePatch {
    seats: Option<u32>,
    label: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TableError {
    #[error("a table needs at least one seat")]
    NoSeats,
}

#[async_trait]
impl ActorEntity for Table {
    type Id = u32;
    type Create = TableCreate;
    type Patch = TablePatch;
    type Context = ();
    type Error = TableError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn rekey(&mut self, id: u32) {
        self.id = id;
    }

    fn from_create_params(params: TableCreate) -> Result<Self, TableError> {
        Ok(Self {
            id: params.id,
            seats: params.seats,
            label: params.label,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), TableError> {
        if self.seats == 0 {
            return Err(TableError::NoSeats);
        }
        Ok(())
    }

    async fn on_patch(&mut self, patch: TablePatch, _ctx: &()) -> Result<(), TableError> {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(seats) = patch.seats {
            if seats == 0 {
                return Err(TableError::NoSeats);
            }
            self.seats = seats;
        }
        Ok(())
    }
}

fn table(id: u32, seats: u32, label: &str) -> TableCreate {
    TableCreate {
        id,
        seats,
        label: label.to_string(),
    }
}

fn labels(tables: &[Table]) -> Vec<&str> {
    tables.iter().map(|t| t.label.as_str()).collect()
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Table>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create with caller-assigned keys
    let created = client.create(table(7, 4, "window")).await.unwrap();
    assert_eq!(created.id, 7);
    client.create(table(3, 2, "bar")).await.unwrap();

    // 2. List keeps insertion order, not key order
    let all = client.list().await.unwrap();
    assert_eq!(labels(&all), vec!["window", "bar"]);

    // 3. Replace keeps the addressed key and position
    let replaced = client.replace(7, table(99, 6, "terrace")).await.unwrap();
    assert_eq!(replaced.id, 7);
    let all = client.list().await.unwrap();
    assert_eq!(labels(&all), vec!["terrace", "bar"]);
    assert!(client.get(99).await.unwrap().is_none());

    // 4. Patch touches only supplied fields
    let patched = client
        .patch(
            3,
            TablePatch {
                label: Some("counter".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.seats, 2);
    assert_eq!(patched.label, "counter");

    // 5. Delete returns the removed entity
    let removed = client.delete(7).await.unwrap();
    assert_eq!(removed.label, "terrace");
    assert!(client.get(7).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_key_is_rejected_without_change() {
    let (actor, client) = ResourceActor::<Table>::new(10);
    tokio::spawn(actor.run(()));

    client.create(table(1, 4, "first")).await.unwrap();
    let result = client.create(table(1, 8, "second")).await;
    assert!(matches!(result, Err(FrameworkError::AlreadyExists(id)) if id == "1"));

    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].label, "first");
}

#[tokio::test]
async fn test_missing_keys_report_not_found() {
    let (actor, client) = ResourceActor::<Table>::new(10);
    tokio::spawn(actor.run(()));

    assert!(matches!(
        client.replace(5, table(5, 2, "x")).await,
        Err(FrameworkError::NotFound(id)) if id == "5"
    ));
    assert!(matches!(
        client.patch(5, TablePatch::default()).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.delete(5).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(client.get(5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_hooks_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Table>::new(10);
    tokio::spawn(actor.run(()));

    // on_create rejects: nothing stored
    let err = client.create(table(1, 0, "broken")).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<TableError>().unwrap(),
        TableError::NoSeats
    );
    assert!(client.list().await.unwrap().is_empty());

    client.create(table(1, 4, "kept")).await.unwrap();

    // replace rejected by on_create: old record survives
    assert!(client.replace(1, table(1, 0, "broken")).await.is_err());

    // patch fails halfway: label change is not committed either
    let result = client
        .patch(
            1,
            TablePatch {
                label: Some("renamed".into()),
                seats: Some(0),
            },
        )
        .await;
    assert!(result.is_err());

    let stored = client.get(1).await.unwrap().unwrap();
    assert_eq!(stored.label, "kept");
    assert_eq!(stored.seats, 4);
}

#[tokio::test]
async fn test_seeded_actor_and_closed_channel() {
    let seed = vec![
        Table {
            id: 1,
            seats: 2,
            label: "a".into(),
        },
        Table {
            id: 2,
            seats: 4,
            label: "b".into(),
        },
    ];
    let (actor, client) = ResourceActor::<Table>::seeded(4, seed);
    let handle = tokio::spawn(actor.run(()));

    assert_eq!(labels(&client.list().await.unwrap()), vec!["a", "b"]);

    handle.abort();
    let _ = handle.await;
    assert!(matches!(
        client.list().await,
        Err(FrameworkError::ActorClosed)
    ));
}
