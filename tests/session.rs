use async_trait::async_trait;
use serde_json::json;

use studioflow::command::Command;
use studioflow::document::Language;
use studioflow::event_bus::EventBus;
use studioflow::persistence::{DocumentStore, MemoryStore, PersistenceError};
use studioflow::session::WorkflowSession;

fn add_channel() -> Command {
    Command::AddChannel {
        name: "True Stories".into(),
        niche: "History".into(),
        sub_niche: "WW2".into(),
        language: Language::English,
    }
}

#[tokio::test]
async fn open_on_empty_store_starts_with_empty_document() {
    let session = WorkflowSession::open_with_bus(MemoryStore::new(), EventBus::quiet()).await;
    assert!(session.document().channels.is_empty());
}

#[tokio::test]
async fn dispatch_applies_and_persists() {
    let store = MemoryStore::new();
    let mut session = WorkflowSession::open_with_bus(store.clone(), EventBus::quiet()).await;

    session.dispatch(add_channel()).await;
    assert_eq!(session.document().channels.len(), 1);

    // A fresh session over the same store sees the saved document.
    let reopened = WorkflowSession::open_with_bus(store, EventBus::quiet()).await;
    assert_eq!(reopened.document(), session.document());
}

#[tokio::test]
async fn open_migrates_legacy_blobs() {
    let legacy = json!({
        "channels": [{
            "id": "ch-1",
            "name": "Legacy",
            "niche": "History",
            "subNiche": "WW2",
            "language": "English",
        }]
    })
    .to_string();

    let session =
        WorkflowSession::open_with_bus(MemoryStore::with_blob(legacy), EventBus::quiet()).await;
    let channel = session.document().channel("ch-1").expect("channel loads");
    assert_eq!(channel.editors.len(), 2, "roster seeded on load");
}

#[tokio::test]
async fn unreadable_blob_falls_back_to_empty_document() {
    let session =
        WorkflowSession::open_with_bus(MemoryStore::with_blob("not json"), EventBus::quiet()).await;
    assert!(session.document().channels.is_empty());
}

/// Store whose every operation fails, for exercising the swallow-and-log
/// contract.
struct BrokenStore;

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn load(&self) -> studioflow::persistence::Result<Option<String>> {
        Err(PersistenceError::Backend {
            message: "disk on fire".to_string(),
        })
    }

    async fn save(&self, _body: &str) -> studioflow::persistence::Result<()> {
        Err(PersistenceError::Backend {
            message: "disk on fire".to_string(),
        })
    }
}

#[tokio::test]
async fn store_failures_never_reach_the_document() {
    let mut session = WorkflowSession::open_with_bus(BrokenStore, EventBus::quiet()).await;
    assert!(session.document().channels.is_empty());

    // The save fails, the in-memory document still advances.
    session.dispatch(add_channel()).await;
    assert_eq!(session.document().channels.len(), 1);
}
