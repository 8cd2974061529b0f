use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::hold::domain::model::HoldEntity;

#[async_trait]
pub trait HoldRepository: Repository<HoldEntity> {
    // holds queued on the asset, earliest placed first
    async fn find_by_asset(&self, asset_id: &str) -> LibraryResult<Vec<HoldEntity>> {
        let mut holds = self.query_all(
            &HashMap::from([("asset_id".to_string(), asset_id.to_string())])).await?;
        holds.sort_by(|a, b| a.queue_key().cmp(&b.queue_key()));
        Ok(holds)
    }

    async fn find_by_card(&self, library_card_id: &str) -> LibraryResult<Vec<HoldEntity>> {
        self.query_all(
            &HashMap::from([("library_card_id".to_string(), library_card_id.to_string())])).await
    }
}

impl HoldRepository for DDBRepository<HoldEntity> {}

impl HoldRepository for MemoryRepository<HoldEntity> {}
