use crate::core::repository::StoreBackend;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::history::domain::model::CheckoutHistoryEntity;
use crate::history::repository::CheckoutHistoryRepository;

pub(crate) async fn create_history_repository(backend: &StoreBackend) -> Box<dyn CheckoutHistoryRepository> {
    backend.prepare::<CheckoutHistoryEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<CheckoutHistoryEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<CheckoutHistoryEntity>::new(store.clone()))
        }
    }
}
