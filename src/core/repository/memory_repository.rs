use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde_json::Value;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{next_version_value, Persistent, Repository};

pub(crate) type MemoryTables = HashMap<String, BTreeMap<String, Value>>;

lazy_static! {
    pub(crate) static ref SHARED_MEMORY_STORE: Arc<MemoryStore> = Arc::new(MemoryStore::new());
}

// MemoryStore keeps every table as JSON documents ordered by id. All repositories and
// the transactional store built over the same instance see the same data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&MemoryTables) -> R) -> R {
        let tables = self.tables.read();
        f(&tables)
    }

    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut MemoryTables) -> R) -> R {
        let mut tables = self.tables.write();
        f(&mut tables)
    }
}

pub(crate) fn stored_version(record: &Value) -> i64 {
    record.get("version").and_then(Value::as_i64).unwrap_or(0)
}

// only string attributes match, same as the S-typed DynamoDB filter
fn matches(record: &Value, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, v)| match record.get(k) {
        Some(Value::String(s)) => s == v,
        _ => false,
    })
}

#[derive(Debug)]
pub struct MemoryRepository<E> {
    store: Arc<MemoryStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Persistent> MemoryRepository<E> {
    pub(crate) fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Persistent> Repository<E> for MemoryRepository<E> {
    async fn create(&self, entity: &E) -> LibraryResult<usize> {
        let val = serde_json::to_value(entity)?;
        let id = entity.id();
        self.store.write(|tables| {
            let table = tables.entry(E::table_name().to_string()).or_default();
            if table.contains_key(&id) {
                return Err(LibraryError::duplicate_key(
                    format!("{} {} already exists", E::table_name(), id).as_str()));
            }
            table.insert(id, val);
            Ok(1)
        })
    }

    async fn update(&self, entity: &E) -> LibraryResult<usize> {
        let val = next_version_value(entity)?;
        let id = entity.id();
        self.store.write(|tables| {
            let table = tables.entry(E::table_name().to_string()).or_default();
            match table.get(&id).map(stored_version) {
                Some(current) if current == entity.version() => {
                    table.insert(id, val);
                    Ok(1)
                }
                _ => Err(LibraryError::unavailable(
                    format!("{} {} was modified concurrently", E::table_name(), id).as_str(),
                    Some("409".to_string()), true)),
            }
        })
    }

    async fn get(&self, id: &str) -> LibraryResult<E> {
        let val = self.store.read(|tables| {
            tables.get(E::table_name()).and_then(|table| table.get(id)).cloned()
        });
        match val {
            Some(val) => serde_json::from_value(val).map_err(LibraryError::from),
            None => Err(LibraryError::not_found(format!("{} not found for {}", E::table_name(), id).as_str())),
        }
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.store.write(|tables| {
            if let Some(table) = tables.get_mut(E::table_name()) {
                table.remove(id);
            }
        });
        Ok(1)
    }

    // page tokens are offsets into the id-ordered table
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<E>> {
        let offset = page.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
        let page_size = page_size.max(1);
        let (matched, total) = self.store.read(|tables| {
            match tables.get(E::table_name()) {
                Some(table) => {
                    let all = table.values().filter(|v| matches(v, predicate)).collect::<Vec<&Value>>();
                    let total = all.len();
                    (all.into_iter().skip(offset).take(page_size).cloned().collect::<Vec<Value>>(), total)
                }
                None => (vec![], 0),
            }
        });
        let records = matched.into_iter()
            .map(|v| serde_json::from_value(v).map_err(LibraryError::from))
            .collect::<LibraryResult<Vec<E>>>()?;
        let next_page = if offset + page_size < total {
            Some((offset + page_size).to_string())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}
