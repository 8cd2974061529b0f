use crate::checkout::factory::create_checkout_repository;
use crate::core::domain::Configuration;
use crate::core::repository::{RepositoryStore, StoreBackend};
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::history::factory::create_history_repository;
use crate::hold::factory::create_hold_repository;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::{BranchEntity, LibraryCardEntity, PatronEntity};
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::repository::{BranchRepository, LibraryCardRepository, PatronRepository};

pub(crate) async fn create_patron_repository(backend: &StoreBackend) -> Box<dyn PatronRepository> {
    backend.prepare::<PatronEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<PatronEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<PatronEntity>::new(store.clone()))
        }
    }
}

pub(crate) async fn create_card_repository(backend: &StoreBackend) -> Box<dyn LibraryCardRepository> {
    backend.prepare::<LibraryCardEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<LibraryCardEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<LibraryCardEntity>::new(store.clone()))
        }
    }
}

pub(crate) async fn create_branch_repository(backend: &StoreBackend) -> Box<dyn BranchRepository> {
    backend.prepare::<BranchEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<BranchEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<BranchEntity>::new(store.clone()))
        }
    }
}

pub(crate) async fn create_patron_service_with(config: &Configuration, backend: &StoreBackend) -> Box<dyn PatronService> {
    let patron_repo = create_patron_repository(backend).await;
    let card_repo = create_card_repository(backend).await;
    let branch_repo = create_branch_repository(backend).await;
    let checkout_repo = create_checkout_repository(backend).await;
    let hold_repo = create_hold_repository(backend).await;
    let history_repo = create_history_repository(backend).await;
    Box::new(PatronServiceImpl::new(config, patron_repo, card_repo, branch_repo,
                                    checkout_repo, hold_repo, history_repo,
                                    backend.transactional_store()))
}

pub async fn create_patron_service(config: &Configuration, store: RepositoryStore) -> Box<dyn PatronService> {
    let backend = StoreBackend::connect(store).await;
    create_patron_service_with(config, &backend).await
}
