use crate::core::repository::StoreBackend;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::hold::domain::model::HoldEntity;
use crate::hold::repository::HoldRepository;

pub(crate) async fn create_hold_repository(backend: &StoreBackend) -> Box<dyn HoldRepository> {
    backend.prepare::<HoldEntity>().await;
    match backend {
        StoreBackend::DynamoDB(client) | StoreBackend::LocalDynamoDB(client) => {
            Box::new(DDBRepository::<HoldEntity>::new(client.clone()))
        }
        StoreBackend::Memory(store) => {
            Box::new(MemoryRepository::<HoldEntity>::new(store.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::core::repository::{Repository, StoreBackend};
    use crate::hold::domain::model::HoldEntity;
    use crate::hold::factory::create_hold_repository;
    use crate::hold::repository::HoldRepository;

    #[tokio::test]
    async fn test_should_find_holds_in_queue_order() {
        let hold_repo = create_hold_repository(&StoreBackend::isolated_memory()).await;
        let now = Utc::now().naive_utc();
        let late = HoldEntity::new("asset1", "card2", now);
        let early = HoldEntity::new("asset1", "card1", now - Duration::minutes(5));
        let other = HoldEntity::new("asset2", "card1", now);
        for hold in [&late, &early, &other] {
            hold_repo.create(hold).await.expect("should create hold");
        }

        let holds = hold_repo.find_by_asset("asset1").await.expect("should find holds");
        assert_eq!(vec![early.hold_id.clone(), late.hold_id.clone()],
                   holds.iter().map(|h| h.hold_id.clone()).collect::<Vec<String>>());
        let holds = hold_repo.find_by_card("card1").await.expect("should find holds");
        assert_eq!(2, holds.len());
        assert!(hold_repo.find_by_asset("asset3").await.expect("should find holds").is_empty());
    }
}
