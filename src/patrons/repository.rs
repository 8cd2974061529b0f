use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::repository::ddb_repository::DDBRepository;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::patrons::domain::model::{BranchEntity, LibraryCardEntity, PatronEntity};

#[async_trait]
pub trait PatronRepository: Repository<PatronEntity> {
    // the patron owning the card if any
    async fn find_by_card(&self, library_card_id: &str) -> LibraryResult<Option<PatronEntity>> {
        let patrons = self.query_all(
            &HashMap::from([("library_card_id".to_string(), library_card_id.to_string())])).await?;
        Ok(patrons.into_iter().next())
    }
}

pub trait LibraryCardRepository: Repository<LibraryCardEntity> {}

pub trait BranchRepository: Repository<BranchEntity> {}

impl PatronRepository for DDBRepository<PatronEntity> {}

impl PatronRepository for MemoryRepository<PatronEntity> {}

impl LibraryCardRepository for DDBRepository<LibraryCardEntity> {}

impl LibraryCardRepository for MemoryRepository<LibraryCardEntity> {}

impl BranchRepository for DDBRepository<BranchEntity> {}

impl BranchRepository for MemoryRepository<BranchEntity> {}
