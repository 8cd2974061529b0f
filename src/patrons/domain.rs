pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;
use crate::history::dto::CheckoutHistoryDto;
use crate::hold::dto::HoldDto;
use crate::patrons::dto::{BranchDto, PatronDto};

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn add_patron(&self, patron: &PatronDto) -> LibraryResult<PatronDto>;
    async fn add_branch(&self, branch: &BranchDto) -> LibraryResult<BranchDto>;
    async fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto>;
    async fn find_all_patrons(&self) -> LibraryResult<Vec<PatronDto>>;
    async fn find_checkouts(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutDto>>;
    async fn find_holds(&self, patron_id: &str) -> LibraryResult<Vec<HoldDto>>;
    async fn find_checkout_history(&self, patron_id: &str) -> LibraryResult<Vec<CheckoutHistoryDto>>;
}
