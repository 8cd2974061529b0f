use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::history::domain::model::CheckoutHistoryEntity;

#[async_trait]
pub trait CheckoutHistoryRepository: Repository<CheckoutHistoryEntity> {
    // most recent checkout first
    async fn find_by_asset(&self, asset_id: &str) -> LibraryResult<Vec<CheckoutHistoryEntity>> {
        let mut rows = self.query_all(
            &HashMap::from([("asset_id".to_string(), asset_id.to_string())])).await?;
        rows.sort_by(|a, b| b.checked_out.cmp(&a.checked_out));
        Ok(rows)
    }

    // most recent checkout first
    async fn find_by_card(&self, library_card_id: &str) -> LibraryResult<Vec<CheckoutHistoryEntity>> {
        let mut rows = self.query_all(
            &HashMap::from([("library_card_id".to_string(), library_card_id.to_string())])).await?;
        rows.sort_by(|a, b| b.checked_out.cmp(&a.checked_out));
        Ok(rows)
    }

    async fn find_open_by_asset(&self, asset_id: &str) -> LibraryResult<Vec<CheckoutHistoryEntity>> {
        let rows = self.find_by_asset(asset_id).await?;
        Ok(rows.into_iter().filter(CheckoutHistoryEntity::is_open).collect())
    }
}

impl CheckoutHistoryRepository for DDBRepository<CheckoutHistoryEntity> {}

impl CheckoutHistoryRepository for MemoryRepository<CheckoutHistoryEntity> {}
