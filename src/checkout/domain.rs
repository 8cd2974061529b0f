pub mod circulation;
pub mod model;
pub mod service;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;
use crate::history::dto::CheckoutHistoryDto;
use crate::hold::dto::HoldDto;

// CheckoutService is the only writer of asset status and of checkout, hold and
// history records. Every mutating operation commits as one transaction.
#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn check_out_item(&self, asset_id: &str, library_card_id: &str) -> LibraryResult<()>;
    async fn check_in_item(&self, asset_id: &str) -> LibraryResult<()>;
    async fn place_hold(&self, asset_id: &str, library_card_id: &str) -> LibraryResult<()>;
    async fn mark_lost(&self, asset_id: &str) -> LibraryResult<()>;
    async fn mark_found(&self, asset_id: &str) -> LibraryResult<()>;

    // read paths return empty values for unknown ids
    async fn is_checked_out(&self, asset_id: &str) -> LibraryResult<bool>;
    async fn get_all(&self) -> LibraryResult<Vec<CheckoutDto>>;
    async fn get_by_id(&self, checkout_id: &str) -> LibraryResult<Option<CheckoutDto>>;
    async fn get_latest_checkout(&self, asset_id: &str) -> LibraryResult<Option<CheckoutDto>>;
    async fn get_checkout_history(&self, asset_id: &str) -> LibraryResult<Vec<CheckoutHistoryDto>>;
    async fn get_current_holds(&self, asset_id: &str) -> LibraryResult<Vec<HoldDto>>;
    async fn get_current_hold_patron_name(&self, hold_id: &str) -> LibraryResult<String>;
    async fn get_current_hold_placed(&self, hold_id: &str) -> LibraryResult<NaiveDateTime>;
    async fn get_current_checkout_patron(&self, asset_id: &str) -> LibraryResult<String>;
}
