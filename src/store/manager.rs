use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::{Client, Exercise, WorkoutPlan, WorkoutSession, WorkoutTemplate};
use crate::seed;
use crate::store::StoreError;
use crate::sync::{EntityKind, SyncAction, SyncLedgerEntry};

/// Storage key of the pending-sync ledger.
const PENDING_SYNC_KEY: &str = "pending_sync";

/// An entity persisted in a keyed collection.
trait Entity: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn entity_id(&self) -> &str;
}

impl Entity for WorkoutTemplate {
    const KIND: EntityKind = EntityKind::Template;

    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for WorkoutPlan {
    const KIND: EntityKind = EntityKind::Plan;

    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for WorkoutSession {
    const KIND: EntityKind = EntityKind::Session;

    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// One mutex per stored collection.
///
/// Every accessor is a read-modify-write over the full collection snapshot,
/// so overlapping saves to the same collection would silently drop the
/// earlier write. Holding the collection's mutex across load, mutate and
/// persist serializes them. Lock order is collection first, ledger second.
#[derive(Default)]
struct CollectionLocks {
    templates: Mutex<()>,
    plans: Mutex<()>,
    sessions: Mutex<()>,
    clients: Mutex<()>,
    exercises: Mutex<()>,
    ledger: Mutex<()>,
}

impl CollectionLocks {
    fn for_kind(&self, kind: EntityKind) -> &Mutex<()> {
        match kind {
            EntityKind::Template => &self.templates,
            EntityKind::Plan => &self.plans,
            EntityKind::Session => &self.sessions,
            EntityKind::Client => &self.clients,
            EntityKind::Exercise => &self.exercises,
        }
    }
}

/// Durable, namespaced storage of typed entity collections.
///
/// Each collection lives in its own JSON file under the store's data
/// directory. Mutations rewrite the whole collection and record the intent
/// in the pending-sync ledger for later reconciliation with the backend.
pub struct LocalStore {
    data_dir: PathBuf,
    locks: CollectionLocks,
}

impl LocalStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(StoreError::DataDir)?;
        Ok(Self {
            data_dir,
            locks: CollectionLocks::default(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    // ===== Generic key-value primitives =====

    /// Serialize `value` and durably persist it under `key`.
    ///
    /// Write failures propagate; the caller must not assume the mutation
    /// took effect.
    pub async fn write_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        tokio::fs::write(self.key_path(key), contents)
            .await
            .map_err(|source| StoreError::Write {
                key: key.to_string(),
                source,
            })
    }

    /// Read and deserialize the value at `key`.
    ///
    /// A missing key is `None`. An unreadable or malformed value is logged
    /// and also treated as `None`: a corrupt cache must never crash the app,
    /// the user re-creates the data instead.
    pub async fn read_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored value is malformed, treating as absent");
                None
            }
        }
    }

    /// Delete the value at `key`. Deleting a missing key is a no-op.
    pub async fn remove_value(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                key: key.to_string(),
                source,
            }),
        }
    }

    // ===== Generic collection operations =====

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_value(key).await.unwrap_or_default()
    }

    async fn write_collection<T: Serialize>(
        &self,
        kind: EntityKind,
        items: &[T],
    ) -> Result<(), StoreError> {
        self.write_value(kind.collection_key(), &items).await
    }

    /// Insert-or-replace `entity` by id, then record the mutation.
    ///
    /// Replacing an existing id records an `update` action, a new id records
    /// `create`.
    async fn save_entity<T: Entity>(&self, entity: T) -> Result<(), StoreError> {
        let kind = T::KIND;
        let id = entity.entity_id().to_string();

        let _guard = self.locks.for_kind(kind).lock().await;
        let mut items: Vec<T> = self.read_collection(kind.collection_key()).await;
        let before = items.len();
        items.retain(|e| e.entity_id() != id);
        let replaced = items.len() < before;
        items.push(entity);
        self.write_collection(kind, &items).await?;

        let action = if replaced {
            SyncAction::Update
        } else {
            SyncAction::Create
        };
        debug!(kind = %kind, id, action = %action, "saved entity");
        self.enqueue_sync(kind, &id, action).await
    }

    /// Remove the entity with `id` from its collection, then record the
    /// deletion. Removing an absent id is idempotent and still recorded.
    async fn delete_entity<T: Entity>(&self, id: &str) -> Result<(), StoreError> {
        let kind = T::KIND;

        let _guard = self.locks.for_kind(kind).lock().await;
        let mut items: Vec<T> = self.read_collection(kind.collection_key()).await;
        items.retain(|e| e.entity_id() != id);
        self.write_collection(kind, &items).await?;

        debug!(kind = %kind, id, "deleted entity");
        self.enqueue_sync(kind, id, SyncAction::Delete).await
    }

    // ===== Templates =====

    pub async fn save_template(&self, template: WorkoutTemplate) -> Result<(), StoreError> {
        self.save_entity(template).await
    }

    pub async fn templates(&self) -> Vec<WorkoutTemplate> {
        self.read_collection(EntityKind::Template.collection_key())
            .await
    }

    pub async fn template(&self, id: &str) -> Option<WorkoutTemplate> {
        self.templates().await.into_iter().find(|t| t.id == id)
    }

    pub async fn delete_template(&self, id: &str) -> Result<(), StoreError> {
        self.delete_entity::<WorkoutTemplate>(id).await
    }

    // ===== Plans =====

    /// Upsert a plan. Rejects plans whose end date precedes their start date.
    pub async fn save_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError> {
        if !plan.date_range_valid() {
            return Err(StoreError::InvalidEntity {
                kind: EntityKind::Plan,
                id: plan.id.clone(),
                reason: "end date precedes start date".to_string(),
            });
        }
        self.save_entity(plan).await
    }

    pub async fn plans(&self) -> Vec<WorkoutPlan> {
        self.read_collection(EntityKind::Plan.collection_key()).await
    }

    pub async fn plan(&self, id: &str) -> Option<WorkoutPlan> {
        self.plans().await.into_iter().find(|p| p.id == id)
    }

    /// Plans assigned to one client, in no guaranteed order.
    pub async fn client_plans(&self, client_id: &str) -> Vec<WorkoutPlan> {
        let mut plans = self.plans().await;
        plans.retain(|p| p.client_id == client_id);
        plans
    }

    pub async fn delete_plan(&self, id: &str) -> Result<(), StoreError> {
        self.delete_entity::<WorkoutPlan>(id).await
    }

    // ===== Sessions =====

    pub async fn save_session(&self, session: WorkoutSession) -> Result<(), StoreError> {
        self.save_entity(session).await
    }

    pub async fn sessions(&self) -> Vec<WorkoutSession> {
        self.read_collection(EntityKind::Session.collection_key())
            .await
    }

    pub async fn session(&self, id: &str) -> Option<WorkoutSession> {
        self.sessions().await.into_iter().find(|s| s.id == id)
    }

    /// Sessions logged by one client, in no guaranteed order.
    pub async fn client_sessions(&self, client_id: &str) -> Vec<WorkoutSession> {
        let mut sessions = self.sessions().await;
        sessions.retain(|s| s.client_id == client_id);
        sessions
    }

    pub async fn delete_session(&self, id: &str) -> Result<(), StoreError> {
        self.delete_entity::<WorkoutSession>(id).await
    }

    // ===== Clients =====

    pub async fn save_client(&self, client: Client) -> Result<(), StoreError> {
        self.save_entity(client).await
    }

    pub async fn clients(&self) -> Vec<Client> {
        self.read_collection(EntityKind::Client.collection_key())
            .await
    }

    pub async fn client(&self, id: &str) -> Option<Client> {
        self.clients().await.into_iter().find(|c| c.id == id)
    }

    /// Clients coached by one trainer, in no guaranteed order.
    pub async fn trainer_clients(&self, trainer_id: &str) -> Vec<Client> {
        let mut clients = self.clients().await;
        clients.retain(|c| c.trainer_id == trainer_id);
        clients
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), StoreError> {
        self.delete_entity::<Client>(id).await
    }

    // ===== Exercises =====

    // The exercise catalog is reference data: read and replace only, never
    // mutated per-id and never recorded in the ledger.

    pub async fn exercises(&self) -> Vec<Exercise> {
        self.read_collection(EntityKind::Exercise.collection_key())
            .await
    }

    pub async fn exercise(&self, id: &str) -> Option<Exercise> {
        self.exercises().await.into_iter().find(|e| e.id == id)
    }

    pub async fn replace_exercises(&self, exercises: Vec<Exercise>) -> Result<(), StoreError> {
        let _guard = self.locks.exercises.lock().await;
        self.write_collection(EntityKind::Exercise, &exercises).await
    }

    // ===== Pending-sync ledger =====

    /// Record an outstanding mutation for `(kind, id)`.
    ///
    /// Any earlier entry for the same pair is replaced, so the ledger holds
    /// the current intended state change per entity rather than a history.
    pub async fn enqueue_sync(
        &self,
        kind: EntityKind,
        id: &str,
        action: SyncAction,
    ) -> Result<(), StoreError> {
        let _guard = self.locks.ledger.lock().await;
        let mut pending: Vec<SyncLedgerEntry> = self.read_collection(PENDING_SYNC_KEY).await;
        pending.retain(|e| !e.matches(kind, id));
        pending.push(SyncLedgerEntry::new(kind, id, action));
        self.write_value(PENDING_SYNC_KEY, &pending).await
    }

    /// All outstanding mutations, oldest first.
    pub async fn pending_sync(&self) -> Vec<SyncLedgerEntry> {
        self.read_collection(PENDING_SYNC_KEY).await
    }

    /// Drop the whole ledger after a successful sync round-trip.
    pub async fn clear_pending_sync(&self) -> Result<(), StoreError> {
        let _guard = self.locks.ledger.lock().await;
        self.write_value(PENDING_SYNC_KEY, &Vec::<SyncLedgerEntry>::new())
            .await
    }

    /// Acknowledge a single synced entity.
    pub async fn remove_sync_item(&self, kind: EntityKind, id: &str) -> Result<(), StoreError> {
        let _guard = self.locks.ledger.lock().await;
        let mut pending: Vec<SyncLedgerEntry> = self.read_collection(PENDING_SYNC_KEY).await;
        pending.retain(|e| !e.matches(kind, id));
        self.write_value(PENDING_SYNC_KEY, &pending).await
    }

    // ===== Seeding =====

    /// Populate empty collections with the built-in default data.
    ///
    /// Safe to call on every app start: a collection is only written when it
    /// is currently empty, so user data is never overwritten. Seed writes do
    /// not touch the ledger, defaults are data the backend already knows.
    pub async fn initialize_default_data(&self) -> Result<(), StoreError> {
        {
            let _guard = self.locks.exercises.lock().await;
            let existing: Vec<Exercise> = self
                .read_collection(EntityKind::Exercise.collection_key())
                .await;
            if existing.is_empty() {
                debug!("seeding default exercise catalog");
                self.write_collection(EntityKind::Exercise, &seed::default_exercises())
                    .await?;
            }
        }
        {
            let _guard = self.locks.clients.lock().await;
            let existing: Vec<Client> = self
                .read_collection(EntityKind::Client.collection_key())
                .await;
            if existing.is_empty() {
                debug!("seeding sample clients");
                self.write_collection(EntityKind::Client, &seed::sample_clients())
                    .await?;
            }
        }
        {
            let _guard = self.locks.templates.lock().await;
            let existing: Vec<WorkoutTemplate> = self
                .read_collection(EntityKind::Template.collection_key())
                .await;
            if existing.is_empty() {
                debug!("seeding starter template");
                self.write_collection(EntityKind::Template, &[seed::starter_template()])
                    .await?;
            }
        }
        Ok(())
    }

    // ===== Summary =====

    async fn collection_len(&self, key: &str) -> usize {
        self.read_collection::<serde_json::Value>(key).await.len()
    }

    /// Entity counts across all collections plus the ledger backlog.
    pub async fn summary(&self) -> StoreSummary {
        let counts = futures::future::join_all(
            EntityKind::ALL
                .iter()
                .map(|kind| self.collection_len(kind.collection_key())),
        )
        .await;
        StoreSummary {
            templates: counts[0],
            plans: counts[1],
            sessions: counts[2],
            clients: counts[3],
            exercises: counts[4],
            pending: self.collection_len(PENDING_SYNC_KEY).await,
        }
    }
}

/// Entity counts for display.
#[derive(Debug, Default)]
pub struct StoreSummary {
    pub templates: usize,
    pub plans: usize,
    pub sessions: usize,
    pub clients: usize,
    pub exercises: usize,
    pub pending: usize,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        (dir, store)
    }

    fn template(id: &str, name: &str) -> WorkoutTemplate {
        let mut t = WorkoutTemplate::new(name, "Strength", 45, "trainer-1");
        t.id = id.to_string();
        t
    }

    fn plan(id: &str, client_id: &str) -> WorkoutPlan {
        let mut p = WorkoutPlan::new(
            "Plan",
            client_id,
            "trainer-1",
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 28).unwrap(),
        );
        p.id = id.to_string();
        p
    }

    #[tokio::test]
    async fn test_get_all_empty_store() {
        let (_dir, store) = open_store();
        assert!(store.templates().await.is_empty());
        assert!(store.pending_sync().await.is_empty());
        assert_eq!(store.template("missing").await.map(|t| t.id), None);
    }

    #[tokio::test]
    async fn test_save_and_get_by_id() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();

        let loaded = store.template("t-1").await.unwrap();
        assert_eq!(loaded.name, "Push Day");
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let (_dir, store) = open_store();
        let t = template("t-1", "Push Day");
        store.save_template(t.clone()).await.unwrap();
        store.save_template(t).await.unwrap();

        assert_eq!(store.templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_replaces_by_id_without_merging() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        store.save_template(template("t-2", "Pull Day")).await.unwrap();
        store.save_template(template("t-1", "Leg Day")).await.unwrap();

        let templates = store.templates().await;
        assert_eq!(templates.len(), 2);
        assert_eq!(store.template("t-1").await.unwrap().name, "Leg Day");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();

        store.delete_template("missing").await.unwrap();
        assert_eq!(store.templates().await.len(), 1);

        store.delete_template("t-1").await.unwrap();
        store.delete_template("t-1").await.unwrap();
        assert!(store.templates().await.is_empty());
    }

    #[tokio::test]
    async fn test_ledger_keeps_one_entry_per_entity() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        store.delete_template("t-1").await.unwrap();

        let pending = store.pending_sync().await;
        let entries: Vec<_> = pending
            .iter()
            .filter(|e| e.matches(EntityKind::Template, "t-1"))
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, SyncAction::Delete);
    }

    #[tokio::test]
    async fn test_save_records_create_then_update() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        assert_eq!(store.pending_sync().await[0].action, SyncAction::Create);

        store.save_template(template("t-1", "Leg Day")).await.unwrap();
        let pending = store.pending_sync().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].action, SyncAction::Update);
    }

    #[tokio::test]
    async fn test_owner_filters() {
        let (_dir, store) = open_store();
        store.save_plan(plan("p-1", "client-1")).await.unwrap();
        store.save_plan(plan("p-2", "client-2")).await.unwrap();
        store.save_plan(plan("p-3", "client-1")).await.unwrap();

        let plans = store.client_plans("client-1").await;
        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(|p| p.client_id == "client-1"));
        assert!(store.client_plans("client-9").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_plan_rejects_inverted_date_range() {
        let (_dir, store) = open_store();
        let mut p = plan("p-1", "client-1");
        p.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let err = store.save_plan(p).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidEntity { .. }));
        assert!(store.plans().await.is_empty());
        assert!(store.pending_sync().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_collection_reads_as_empty() {
        let (dir, store) = open_store();
        std::fs::write(dir.path().join("workout_templates.json"), "{not json").unwrap();

        assert!(store.templates().await.is_empty());

        // The store stays usable: the next save rewrites the collection
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        assert_eq!(store.templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let (dir, store) = open_store();
        std::fs::remove_dir_all(dir.path()).unwrap();

        let err = store.save_template(template("t-1", "Push Day")).await;
        assert!(matches!(err, Err(StoreError::Write { .. })));
    }

    #[tokio::test]
    async fn test_remove_value_missing_key_is_ok() {
        let (_dir, store) = open_store();
        store.remove_value("user_role").await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_saves_both_survive() {
        let (_dir, store) = open_store();
        let (a, b) = tokio::join!(
            store.save_template(template("t-1", "Push Day")),
            store.save_template(template("t-2", "Pull Day")),
        );
        a.unwrap();
        b.unwrap();

        assert_eq!(store.templates().await.len(), 2);
        assert_eq!(store.pending_sync().await.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_sync_item_acknowledges_one_key() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        store.save_plan(plan("p-1", "client-1")).await.unwrap();

        store
            .remove_sync_item(EntityKind::Template, "t-1")
            .await
            .unwrap();

        let pending = store.pending_sync().await;
        assert_eq!(pending.len(), 1);
        assert!(pending[0].matches(EntityKind::Plan, "p-1"));
    }

    #[tokio::test]
    async fn test_clear_pending_sync() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        store.clear_pending_sync().await.unwrap();
        assert!(store.pending_sync().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_exercises_skips_ledger() {
        let (_dir, store) = open_store();
        store
            .replace_exercises(vec![Exercise {
                id: "1".to_string(),
                name: "Push-ups".to_string(),
                category: "Bodyweight".to_string(),
                muscle_groups: vec!["Chest".to_string()],
                instructions: None,
                equipment: None,
            }])
            .await
            .unwrap();

        assert_eq!(store.exercises().await.len(), 1);
        assert_eq!(store.exercise("1").await.unwrap().name, "Push-ups");
        assert!(store.pending_sync().await.is_empty());
    }

    #[tokio::test]
    async fn test_seeding_runs_once() {
        let (_dir, store) = open_store();
        store.initialize_default_data().await.unwrap();
        let first = store.summary().await;
        assert_eq!(first.exercises, 8);
        assert_eq!(first.clients, 3);
        assert_eq!(first.templates, 1);
        assert_eq!(first.pending, 0);

        store.initialize_default_data().await.unwrap();
        let second = store.summary().await;
        assert_eq!(second.exercises, 8);
        assert_eq!(second.clients, 3);
        assert_eq!(second.templates, 1);
    }

    #[tokio::test]
    async fn test_seeding_keeps_user_data() {
        let (_dir, store) = open_store();
        store.save_client(Client {
            id: "client-9".to_string(),
            name: "Alex Doe".to_string(),
            email: "alex@example.com".to_string(),
            avatar: String::new(),
            join_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            trainer_id: "trainer-2".to_string(),
        })
        .await
        .unwrap();

        store.initialize_default_data().await.unwrap();

        let clients = store.clients().await;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "client-9");
    }

    #[tokio::test]
    async fn test_seed_save_delete_scenario() {
        let (_dir, store) = open_store();
        store.initialize_default_data().await.unwrap();

        let templates = store.templates().await;
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "template-1");

        store.save_template(template("template-2", "Pull Day")).await.unwrap();
        assert_eq!(store.templates().await.len(), 2);

        store.delete_template("template-1").await.unwrap();
        let templates = store.templates().await;
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "template-2");

        let pending = store.pending_sync().await;
        assert_eq!(pending.len(), 2);
        let deleted = pending
            .iter()
            .find(|e| e.matches(EntityKind::Template, "template-1"))
            .unwrap();
        assert_eq!(deleted.action, SyncAction::Delete);
        let created = pending
            .iter()
            .find(|e| e.matches(EntityKind::Template, "template-2"))
            .unwrap();
        assert_eq!(created.action, SyncAction::Create);
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let (_dir, store) = open_store();
        store.save_template(template("t-1", "Push Day")).await.unwrap();
        store.save_plan(plan("p-1", "client-1")).await.unwrap();

        let summary = store.summary().await;
        assert_eq!(summary.templates, 1);
        assert_eq!(summary.plans, 1);
        assert_eq!(summary.sessions, 0);
        assert_eq!(summary.pending, 2);
    }
}
