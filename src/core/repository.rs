pub mod ddb_repository;
pub mod memory_repository;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use aws_sdk_dynamodb::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::memory_repository::{MemoryStore, SHARED_MEMORY_STORE};
use crate::core::transaction::{DDBTransactionalStore, MemoryTransactionalStore, TransactionalStore};
use crate::utils::ddb::{build_db_client, create_table};

const QUERY_ALL_PAGE_SIZE: usize = 500;

#[async_trait]
pub trait Repository<Entity: Send + 'static>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // find by string-equality predicate
    async fn query(&self, predicate: &HashMap::<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;

    // drains every page of a query
    async fn query_all(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>> {
        let mut records = vec![];
        let mut next_page: Option<String> = None;
        loop {
            let res = self.query(predicate, next_page.as_deref(), QUERY_ALL_PAGE_SIZE).await?;
            records.extend(res.records);
            next_page = res.next_page;
            if next_page.is_none() {
                break;
            }
        }
        Ok(records)
    }
}

// Persistent binds an entity to the table that stores it.
pub trait Persistent: Identifiable + Serialize + DeserializeOwned + Clone + 'static {
    fn table_name() -> &'static str;
    fn key_name() -> &'static str;
}

// serialized form of an entity as it is stored after an update, i.e. with its version bumped
pub(crate) fn next_version_value<E: Persistent>(entity: &E) -> LibraryResult<Value> {
    let mut val = serde_json::to_value(entity)?;
    match val.as_object_mut() {
        Some(map) => {
            map.insert("version".to_string(), Value::from(entity.version() + 1));
            Ok(val)
        }
        None => Err(LibraryError::serialization(
            format!("{} record {} is not an object", E::table_name(), entity.id()).as_str())),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Memory,
}

impl RepositoryStore {
    // LMS_STORE selects the backend, anything unrecognized falls back to the default
    pub fn from_env(default: RepositoryStore) -> RepositoryStore {
        match std::env::var("LMS_STORE") {
            Ok(val) => RepositoryStore::parse(val.as_str()).unwrap_or(default),
            Err(_) => default,
        }
    }

    pub fn parse(name: &str) -> Option<RepositoryStore> {
        match name.trim().to_lowercase().as_str() {
            "dynamodb" | "ddb" => Some(RepositoryStore::DynamoDB),
            "local" | "localdynamodb" => Some(RepositoryStore::LocalDynamoDB),
            "memory" | "mem" => Some(RepositoryStore::Memory),
            _ => None,
        }
    }
}

// StoreBackend is a connected handle that factories use to build repositories
// sharing the same underlying store.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    DynamoDB(Client),
    LocalDynamoDB(Client),
    Memory(Arc<MemoryStore>),
}

impl StoreBackend {
    pub async fn connect(store: RepositoryStore) -> StoreBackend {
        match store {
            RepositoryStore::DynamoDB => {
                StoreBackend::DynamoDB(build_db_client(store).await)
            }
            RepositoryStore::LocalDynamoDB => {
                StoreBackend::LocalDynamoDB(build_db_client(store).await)
            }
            RepositoryStore::Memory => {
                StoreBackend::Memory(SHARED_MEMORY_STORE.clone())
            }
        }
    }

    // isolated in-memory backend, mostly for tests
    pub fn isolated_memory() -> StoreBackend {
        StoreBackend::Memory(Arc::new(MemoryStore::new()))
    }

    // creates the table for an entity when running against local dynamodb
    pub async fn prepare<E: Persistent>(&self) {
        if let StoreBackend::LocalDynamoDB(client) = self {
            let _ = create_table(client, E::table_name(), E::key_name()).await;
        }
    }

    pub fn transactional_store(&self) -> Box<dyn TransactionalStore> {
        match self {
            StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
                Box::new(DDBTransactionalStore::new(client.clone()))
            }
            StoreBackend::Memory(store) => {
                Box::new(MemoryTransactionalStore::new(store.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::{RepositoryStore, StoreBackend};

    #[tokio::test]
    async fn test_should_parse_repository_store() {
        assert_eq!(Some(RepositoryStore::DynamoDB), RepositoryStore::parse("dynamodb"));
        assert_eq!(Some(RepositoryStore::LocalDynamoDB), RepositoryStore::parse("Local"));
        assert_eq!(Some(RepositoryStore::Memory), RepositoryStore::parse(" memory "));
        assert_eq!(None, RepositoryStore::parse("postgres"));
    }

    #[tokio::test]
    async fn test_should_connect_memory_backend() {
        let backend = StoreBackend::connect(RepositoryStore::Memory).await;
        assert!(matches!(backend, StoreBackend::Memory(_)));
        let other = StoreBackend::connect(RepositoryStore::Memory).await;
        if let (StoreBackend::Memory(a), StoreBackend::Memory(b)) = (backend, other) {
            assert!(std::sync::Arc::ptr_eq(&a, &b));
        }
    }
}
