use crate::assets::domain::AssetService;
use crate::assets::domain::model::AssetEntity;
use crate::assets::domain::service::AssetServiceImpl;
use crate::assets::repository::AssetRepository;
use crate::core::domain::Configuration;
use crate::core::repository::{RepositoryStore, StoreBackend};
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;

pub(crate) async fn create_asset_repository(backend: &StoreBackend) -> Box<dyn AssetRepository> {
    backend.prepare::<AssetEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<AssetEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<AssetEntity>::new(store.clone()))
        }
    }
}

pub(crate) async fn create_asset_service_with(config: &Configuration, backend: &StoreBackend) -> Box<dyn AssetService> {
    let asset_repo = create_asset_repository(backend).await;
    Box::new(AssetServiceImpl::new(config, asset_repo))
}

pub async fn create_asset_service(config: &Configuration, store: RepositoryStore) -> Box<dyn AssetService> {
    let backend = StoreBackend::connect(store).await;
    create_asset_service_with(config, &backend).await
}
