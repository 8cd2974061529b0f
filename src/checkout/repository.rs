use async_trait::async_trait;
use std::collections::HashMap;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;

#[async_trait]
pub trait CheckoutRepository : Repository<CheckoutEntity> {
    // live checkouts of the asset, latest first
    async fn find_by_asset(&self, asset_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        let mut checkouts = self.query_all(
            &HashMap::from([("asset_id".to_string(), asset_id.to_string())])).await?;
        checkouts.sort_by(|a, b| b.since.cmp(&a.since));
        Ok(checkouts)
    }

    async fn find_by_card(&self, library_card_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        self.query_all(
            &HashMap::from([("library_card_id".to_string(), library_card_id.to_string())])).await
    }
}

impl CheckoutRepository for DDBRepository<CheckoutEntity> {}

impl CheckoutRepository for MemoryRepository<CheckoutEntity> {}
