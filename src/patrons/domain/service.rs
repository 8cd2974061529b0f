use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{info, warn};
use crate::checkout::dto::CheckoutDto;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::transaction::{Changeset, TransactionalStore};
use crate::history::dto::CheckoutHistoryDto;
use crate::history::repository::CheckoutHistoryRepository;
use crate::hold::dto::HoldDto;
use crate::hold::repository::HoldRepository;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::{BranchEntity, LibraryCardEntity, PatronEntity};
use crate::patrons::dto::{BranchDto, LibraryCardDto, PatronDto};
use crate::patrons::repository::{BranchRepository, LibraryCardRepository, PatronRepository};

pub(crate) struct PatronServiceImpl {
    patron_repository: Box<dyn PatronRepository>,
    card_repository: Box<dyn LibraryCardRepository>,
    branch_repository: Box<dyn BranchRepository>,
    checkout_repository: Box<dyn CheckoutRepository>,
    hold_repository: Box<dyn HoldRepository>,
    history_repository: Box<dyn CheckoutHistoryRepository>,
    store: Box<dyn TransactionalStore>,
}

impl PatronServiceImpl {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(_config: &Configuration,
                      patron_repository: Box<dyn PatronRepository>,
                      card_repository: Box<dyn LibraryCardRepository>,
                      branch_repository: Box<dyn BranchRepository>,
                      checkout_repository: Box<dyn CheckoutRepository>,
                      hold_repository: Box<dyn HoldRepository>,
                      history_repository: Box<dyn CheckoutHistoryRepository>,
                      store: Box<dyn TransactionalStore>) -> Self {
        PatronServiceImpl {
            patron_repository,
            card_repository,
            branch_repository,
            checkout_repository,
            hold_repository,
            history_repository,
            store,
        }
    }

    async fn card_of(&self, patron_id: &str) -> LibraryResult<String> {
        self.patron_repository.get(patron_id).await.map(|p| p.library_card_id)
    }

    // a dangling branch reference is tolerated, anything else propagates
    async fn find_branch(&self, branch_id: &str) -> LibraryResult<Option<BranchDto>> {
        match self.branch_repository.get(branch_id).await {
            Ok(branch) => Ok(Some(BranchDto::from(&branch))),
            Err(LibraryError::NotFound { .. }) => {
                warn!(branch_id, "home library branch not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    // the patron and a fresh card are stored together or not at all
    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto> {
        if patron.first_name.trim().is_empty() || patron.last_name.trim().is_empty() {
            return Err(LibraryError::validation("patron first and last name are required", Some("400".to_string())));
        }
        let card = LibraryCardEntity::new();
        let mut entity = PatronEntity::from(patron);
        entity.version = 0;
        entity.library_card_id = card.library_card_id.to_string();

        let mut changes = Changeset::new();
        changes.insert(&card)?;
        changes.insert(&entity)?;
        self.store.commit(changes).await?;
        info!(patron_id = entity.patron_id.as_str(), library_card_id = card.library_card_id.as_str(), "patron added");

        let mut added = PatronDto::from(&entity);
        added.library_card = Some(LibraryCardDto::from(&card));
        Ok(added)
    }

    async fn add_branch(&self, branch: &BranchDto) -> LibraryResult<BranchDto> {
        if branch.name.trim().is_empty() {
            return Err(LibraryError::validation("branch name is required", Some("400".to_string())));
        }
        let mut entity = BranchEntity::from(branch);
        entity.version = 0;
        self.branch_repository.create(&entity).await?;
        Ok(BranchDto::from(&entity))
    }

    async fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto> {
        let patron = self.patron_repository.get(id).await?;
        let card = self.card_repository.get(patron.library_card_id.as_str()).await?;
        let mut dto = PatronDto::from(&patron);
        dto.library_card = Some(LibraryCardDto::from(&card));
        dto.home_library_branch = self.find_branch(patron.home_library_branch_id.as_str()).await?;
        Ok(dto)
    }

    async fn find_all_patrons(&self) -> LibraryResult<Vec<PatronDto>> {
        let res = self.patron_repository.query_all(&HashMap::new()).await?;
        Ok(res.iter().map(PatronDto::from).collect())
    }

    async fn find_checkouts(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>> {
        let card_id = self.card_of(patron_id).await?;
        let res = self.checkout_repository.find_by_card(card_id.as_str()).await?;
        Ok(res.iter().map(CheckoutDto::from).collect())
    }

    async fn find_holds(&self, patron_id: &str) -> LibraryResult<Vec<HoldDto>> {
        let card_id = self.card_of(patron_id).await?;
        let mut res = self.hold_repository.find_by_card(card_id.as_str()).await?;
        res.sort_by(|a, b| b.queue_key().cmp(&a.queue_key()));
        Ok(res.iter().map(HoldDto::from).collect())
    }

    async fn find_checkout_history(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutHistoryDto>> {
        let card_id = self.card_of(patron_id).await?;
        let res = self.history_repository.find_by_card(card_id.as_str()).await?;
        Ok(res.iter().map(CheckoutHistoryDto::from).collect())
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
            address: other.address.to_string(),
            date_of_birth: other.date_of_birth,
            telephone_number: other.telephone_number.to_string(),
            library_card_id: other.library_card_id.to_string(),
            home_library_branch_id: other.home_library_branch_id.to_string(),
            library_card: None,
            home_library_branch: None,
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            first_name: other.first_name.to_string(),
            last_name: other.last_name.to_string(),
            address: other.address.to_string(),
            date_of_birth: other.date_of_birth,
            telephone_number: other.telephone_number.to_string(),
            library_card_id: other.library_card_id.to_string(),
            home_library_branch_id: other.home_library_branch_id.to_string(),
        }
    }
}

impl From<&LibraryCardEntity> for LibraryCardDto {
    fn from(other: &LibraryCardEntity) -> Self {
        Self {
            library_card_id: other.library_card_id.to_string(),
            version: other.version,
            fees: other.fees,
            created_at: other.created_at,
        }
    }
}

impl From<&BranchEntity> for BranchDto {
    fn from(other: &BranchEntity) -> Self {
        Self {
            branch_id: other.branch_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            address: other.address.to_string(),
            telephone_number: other.telephone_number.to_string(),
        }
    }
}

impl From<&BranchDto> for BranchEntity {
    fn from(other: &BranchDto) -> Self {
        Self {
            branch_id: other.branch_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            address: other.address.to_string(),
            telephone_number: other.telephone_number.to_string(),
        }
    }
}
