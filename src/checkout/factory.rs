use crate::assets::factory::create_asset_repository;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::repository::{RepositoryStore, StoreBackend};
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::history::factory::create_history_repository;
use crate::hold::factory::create_hold_repository;
use crate::patrons::factory::{create_card_repository, create_patron_repository};

pub(crate) async fn create_checkout_repository(backend: &StoreBackend) -> Box<dyn CheckoutRepository> {
    backend.prepare::<CheckoutEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<CheckoutEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<CheckoutEntity>::new(store.clone()))
        }
    }
}

// every repository and the transactional store share one backend so that a
// commit is visible to the next load
pub(crate) async fn create_checkout_service_with(config: &Configuration, backend: &StoreBackend) -> Box<dyn CheckoutService> {
    let asset_repo = create_asset_repository(backend).await;
    let checkout_repo = create_checkout_repository(backend).await;
    let history_repo = create_history_repository(backend).await;
    let hold_repo = create_hold_repository(backend).await;
    let card_repo = create_card_repository(backend).await;
    let patron_repo = create_patron_repository(backend).await;
    Box::new(CheckoutServiceImpl::new(config, asset_repo, checkout_repo, history_repo,
                                      hold_repo, card_repo, patron_repo,
                                      backend.transactional_store()))
}

pub async fn create_checkout_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CheckoutService> {
    let backend = StoreBackend::connect(store).await;
    create_checkout_service_with(config, &backend).await
}
