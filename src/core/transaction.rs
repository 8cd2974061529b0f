use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, Delete, Put, TransactWriteItem};
use serde_json::Value;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{next_version_value, Persistent};
use crate::core::repository::memory_repository::{MemoryStore, stored_version};
use crate::utils::ddb::parse_item;

// DynamoDB rejects larger transactions
const MAX_TRANSACTION_ITEMS: usize = 100;

#[derive(Debug, PartialEq, Clone)]
pub enum WriteOp {
    Insert {
        table_name: &'static str,
        key_name: &'static str,
        id: String,
        item: Value,
    },
    Update {
        table_name: &'static str,
        key_name: &'static str,
        id: String,
        expected_version: i64,
        item: Value,
    },
    Delete {
        table_name: &'static str,
        key_name: &'static str,
        id: String,
    },
}

impl WriteOp {
    pub fn table_name(&self) -> &'static str {
        match self {
            WriteOp::Insert { table_name, .. } => table_name,
            WriteOp::Update { table_name, .. } => table_name,
            WriteOp::Delete { table_name, .. } => table_name,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            WriteOp::Insert { id, .. } => id.as_str(),
            WriteOp::Update { id, .. } => id.as_str(),
            WriteOp::Delete { id, .. } => id.as_str(),
        }
    }
}

// Changeset is an ordered list of writes that must land together.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Changeset {
    ops: Vec<WriteOp>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<E: Persistent>(&mut self, entity: &E) -> LibraryResult<()> {
        self.ops.push(WriteOp::Insert {
            table_name: E::table_name(),
            key_name: E::key_name(),
            id: entity.id(),
            item: serde_json::to_value(entity)?,
        });
        Ok(())
    }

    // the stored version must still match the entity's version at commit time
    pub fn update<E: Persistent>(&mut self, entity: &E) -> LibraryResult<()> {
        self.ops.push(WriteOp::Update {
            table_name: E::table_name(),
            key_name: E::key_name(),
            id: entity.id(),
            expected_version: entity.version(),
            item: next_version_value(entity)?,
        });
        Ok(())
    }

    pub fn delete<E: Persistent>(&mut self, id: &str) {
        self.ops.push(WriteOp::Delete {
            table_name: E::table_name(),
            key_name: E::key_name(),
            id: id.to_string(),
        });
    }

    pub fn append(&mut self, other: Changeset) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[async_trait]
pub trait TransactionalStore: Sync + Send {
    // applies every op or none of them, returns the number of applied ops
    async fn commit(&self, changes: Changeset) -> LibraryResult<usize>;
}

#[derive(Debug)]
pub(crate) struct DDBTransactionalStore {
    client: Client,
}

impl DDBTransactionalStore {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
        }
    }
}

fn to_transact_item(op: WriteOp) -> LibraryResult<TransactWriteItem> {
    match op {
        WriteOp::Insert { table_name, key_name, item, .. } => {
            Ok(TransactWriteItem::builder().put(Put::builder()
                .table_name(table_name)
                .set_item(Some(parse_item(item)?))
                .condition_expression("attribute_not_exists(#pk)")
                .expression_attribute_names("#pk", key_name)
                .build()).build())
        }
        WriteOp::Update { table_name, expected_version, item, .. } => {
            Ok(TransactWriteItem::builder().put(Put::builder()
                .table_name(table_name)
                .set_item(Some(parse_item(item)?))
                .condition_expression("attribute_exists(#version) AND #version = :old_version")
                .expression_attribute_names("#version", "version")
                .expression_attribute_values(":old_version", AttributeValue::N(expected_version.to_string()))
                .build()).build())
        }
        WriteOp::Delete { table_name, key_name, id } => {
            Ok(TransactWriteItem::builder().delete(Delete::builder()
                .table_name(table_name)
                .key(key_name, AttributeValue::S(id))
                .build()).build())
        }
    }
}

#[async_trait]
impl TransactionalStore for DDBTransactionalStore {
    async fn commit(&self, changes: Changeset) -> LibraryResult<usize> {
        let size = changes.len();
        if size == 0 {
            return Ok(0);
        }
        if size > MAX_TRANSACTION_ITEMS {
            return Err(LibraryError::validation(
                format!("transaction has {} items, max is {}", size, MAX_TRANSACTION_ITEMS).as_str(), None));
        }
        let items = changes.ops.into_iter()
            .map(to_transact_item)
            .collect::<LibraryResult<Vec<TransactWriteItem>>>()?;
        self.client
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await.map(|_| size).map_err(LibraryError::from)
    }
}

#[derive(Debug)]
pub(crate) struct MemoryTransactionalStore {
    store: Arc<MemoryStore>,
}

impl MemoryTransactionalStore {
    pub(crate) fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
        }
    }
}

#[async_trait]
impl TransactionalStore for MemoryTransactionalStore {
    async fn commit(&self, changes: Changeset) -> LibraryResult<usize> {
        let size = changes.len();
        self.store.write(|tables| {
            // validate everything against the state each op would see, then apply
            let mut pending: HashMap<(&'static str, String), Option<i64>> = HashMap::new();
            for op in changes.ops() {
                let key = (op.table_name(), op.id().to_string());
                let current = match pending.get(&key) {
                    Some(version) => *version,
                    None => tables.get(op.table_name()).and_then(|t| t.get(op.id())).map(stored_version),
                };
                match op {
                    WriteOp::Insert { item, .. } => {
                        if current.is_some() {
                            return Err(LibraryError::unavailable(
                                format!("transaction canceled, {} {} already exists",
                                        op.table_name(), op.id()).as_str(), Some("409".to_string()), true));
                        }
                        pending.insert(key, Some(stored_version(item)));
                    }
                    WriteOp::Update { expected_version, .. } => {
                        if current != Some(*expected_version) {
                            return Err(LibraryError::unavailable(
                                format!("transaction canceled, {} {} expected version {} but found {:?}",
                                        op.table_name(), op.id(), expected_version, current).as_str(),
                                Some("409".to_string()), true));
                        }
                        pending.insert(key, Some(expected_version + 1));
                    }
                    WriteOp::Delete { .. } => {
                        pending.insert(key, None);
                    }
                }
            }
            for op in changes.ops {
                match op {
                    WriteOp::Insert { table_name, id, item, .. } |
                    WriteOp::Update { table_name, id, item, .. } => {
                        tables.entry(table_name.to_string()).or_default().insert(id, item);
                    }
                    WriteOp::Delete { table_name, id, .. } => {
                        if let Some(table) = tables.get_mut(table_name) {
                            table.remove(&id);
                        }
                    }
                }
            }
            Ok(size)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use serde::{Deserialize, Serialize};
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::{Persistent, Repository};
    use crate::core::repository::memory_repository::{MemoryRepository, MemoryStore};
    use crate::core::transaction::{Changeset, MemoryTransactionalStore, TransactionalStore, WriteOp};

    #[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
    struct Counter {
        counter_id: String,
        version: i64,
        value: i64,
    }

    impl Identifiable for Counter {
        fn id(&self) -> String {
            self.counter_id.to_string()
        }

        fn version(&self) -> i64 {
            self.version
        }
    }

    impl Persistent for Counter {
        fn table_name() -> &'static str {
            "counters"
        }

        fn key_name() -> &'static str {
            "counter_id"
        }
    }

    fn counter(id: &str, value: i64) -> Counter {
        Counter { counter_id: id.to_string(), version: 0, value }
    }

    #[tokio::test]
    async fn test_should_build_changeset() {
        let mut changes = Changeset::new();
        assert!(changes.is_empty());
        changes.insert(&counter("c1", 1)).expect("should add insert");
        changes.update(&counter("c2", 2)).expect("should add update");
        changes.delete::<Counter>("c3");
        assert_eq!(3, changes.len());
        assert!(matches!(&changes.ops()[1], WriteOp::Update { expected_version: 0, .. }));
        if let WriteOp::Update { item, .. } = &changes.ops()[1] {
            assert_eq!(Some(1), item.get("version").and_then(|v| v.as_i64()));
        }
        assert_eq!("counters", changes.ops()[2].table_name());
        assert_eq!("c3", changes.ops()[2].id());
    }

    #[tokio::test]
    async fn test_should_commit_all_ops() {
        let store = Arc::new(MemoryStore::new());
        let repo = MemoryRepository::<Counter>::new(store.clone());
        repo.create(&counter("c2", 2)).await.expect("should create");
        repo.create(&counter("c3", 3)).await.expect("should create");

        let mut changes = Changeset::new();
        changes.insert(&counter("c1", 1)).expect("should add insert");
        changes.update(&Counter { value: 20, ..counter("c2", 2) }).expect("should add update");
        changes.delete::<Counter>("c3");
        let applied = MemoryTransactionalStore::new(store.clone()).commit(changes).await.expect("should commit");
        assert_eq!(3, applied);

        assert_eq!(1, repo.get("c1").await.expect("should get").value);
        let c2 = repo.get("c2").await.expect("should get");
        assert_eq!(20, c2.value);
        assert_eq!(1, c2.version);
        assert!(repo.get("c3").await.is_err());
    }

    #[tokio::test]
    async fn test_should_apply_nothing_on_stale_version() {
        let store = Arc::new(MemoryStore::new());
        let repo = MemoryRepository::<Counter>::new(store.clone());
        let c2 = counter("c2", 2);
        repo.create(&c2).await.expect("should create");
        repo.update(&c2).await.expect("should bump version");

        let mut changes = Changeset::new();
        changes.insert(&counter("c1", 1)).expect("should add insert");
        changes.update(&c2).expect("should add update");
        let res = MemoryTransactionalStore::new(store.clone()).commit(changes).await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { .. })));
        assert!(repo.get("c1").await.is_err());
        assert_eq!(2, repo.query_all(&HashMap::new()).await.map(|all| all[0].value).expect("should query"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_insert() {
        let store = Arc::new(MemoryStore::new());
        let repo = MemoryRepository::<Counter>::new(store.clone());
        repo.create(&counter("c1", 1)).await.expect("should create");

        let mut changes = Changeset::new();
        changes.delete::<Counter>("c9");
        changes.insert(&counter("c1", 5)).expect("should add insert");
        let res = MemoryTransactionalStore::new(store.clone()).commit(changes).await;
        assert!(res.is_err());
        assert_eq!(1, repo.get("c1").await.expect("should get").value);
    }

    #[tokio::test]
    async fn test_should_commit_empty_changeset() {
        let store = Arc::new(MemoryStore::new());
        let applied = MemoryTransactionalStore::new(store).commit(Changeset::new()).await.expect("should commit");
        assert_eq!(0, applied);
    }
}
