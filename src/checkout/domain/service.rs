use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::info;
use crate::assets::repository::AssetRepository;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::circulation::Circulation;
use crate::checkout::dto::CheckoutDto;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::transaction::TransactionalStore;
use crate::history::dto::CheckoutHistoryDto;
use crate::history::repository::CheckoutHistoryRepository;
use crate::hold::dto::HoldDto;
use crate::hold::repository::HoldRepository;
use crate::patrons::repository::{LibraryCardRepository, PatronRepository};

pub(crate) struct CheckoutServiceImpl {
    branch_id: String,
    loan_days: i64,
    asset_repository: Box<dyn AssetRepository>,
    checkout_repository: Box<dyn CheckoutRepository>,
    history_repository: Box<dyn CheckoutHistoryRepository>,
    hold_repository: Box<dyn HoldRepository>,
    card_repository: Box<dyn LibraryCardRepository>,
    patron_repository: Box<dyn PatronRepository>,
    store: Box<dyn TransactionalStore>,
}

impl CheckoutServiceImpl {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(config: &Configuration,
                      asset_repository: Box<dyn AssetRepository>,
                      checkout_repository: Box<dyn CheckoutRepository>,
                      history_repository: Box<dyn CheckoutHistoryRepository>,
                      hold_repository: Box<dyn HoldRepository>,
                      card_repository: Box<dyn LibraryCardRepository>,
                      patron_repository: Box<dyn PatronRepository>,
                      store: Box<dyn TransactionalStore>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            loan_days: config.checkout_loan_days,
            asset_repository,
            checkout_repository,
            history_repository,
            hold_repository,
            card_repository,
            patron_repository,
            store,
        }
    }

    // snapshot of everything a transition on the asset may touch
    async fn load(&self, asset_id: &str) -> LibraryResult<Circulation> {
        let asset = self.asset_repository.get(asset_id).await?;
        let checkouts = self.checkout_repository.find_by_asset(asset_id).await?;
        let open_history = self.history_repository.find_open_by_asset(asset_id).await?;
        let holds = self.hold_repository.find_by_asset(asset_id).await?;
        Ok(Circulation::new(asset, checkouts, open_history, holds, self.loan_days))
    }

    async fn commit(&self, circulation: Circulation) -> LibraryResult<usize> {
        self.store.commit(circulation.into_changeset()?).await
    }

    async fn patron_name_for_card(&self, library_card_id: &str) -> LibraryResult<String> {
        let patron = self.patron_repository.find_by_card(library_card_id).await?;
        Ok(patron.map(|p| p.full_name()).unwrap_or_default())
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

// turns a missing record into None for read paths
fn soft_miss<T>(res: LibraryResult<T>) -> LibraryResult<Option<T>> {
    match res {
        Ok(val) => Ok(Some(val)),
        Err(LibraryError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn check_out_item(&self, asset_id: &str, library_card_id: &str) -> LibraryResult<()> {
        let mut circulation = self.load(asset_id).await?;
        let _ = self.card_repository.get(library_card_id).await?;
        if circulation.check_out(library_card_id, now())? {
            self.commit(circulation).await?;
            info!(branch_id = self.branch_id.as_str(), asset_id, library_card_id, "asset checked out");
        }
        Ok(())
    }

    async fn check_in_item(&self, asset_id: &str) -> LibraryResult<()> {
        let mut circulation = self.load(asset_id).await?;
        let fulfilled = circulation.check_in(now())?;
        let status = circulation.status();
        self.commit(circulation).await?;
        match fulfilled {
            Some(hold) => {
                info!(branch_id = self.branch_id.as_str(), asset_id, hold_id = hold.hold_id.as_str(),
                    library_card_id = hold.library_card_id.as_str(), "asset checked in and handed to hold");
            }
            None => {
                info!(branch_id = self.branch_id.as_str(), asset_id, status = %status, "asset checked in");
            }
        }
        Ok(())
    }

    async fn place_hold(&self, asset_id: &str, library_card_id: &str) -> LibraryResult<()> {
        let mut circulation = self.load(asset_id).await?;
        let _ = self.card_repository.get(library_card_id).await?;
        let hold = circulation.place_hold(library_card_id, now())?;
        let queued = circulation.holds().len();
        self.commit(circulation).await?;
        info!(branch_id = self.branch_id.as_str(), asset_id, library_card_id,
            hold_id = hold.hold_id.as_str(), queued, "hold placed");
        Ok(())
    }

    async fn mark_lost(&self, asset_id: &str) -> LibraryResult<()> {
        let mut circulation = self.load(asset_id).await?;
        circulation.mark_lost(now());
        let checked_out = circulation.is_checked_out();
        self.commit(circulation).await?;
        info!(branch_id = self.branch_id.as_str(), asset_id, checked_out, "asset marked lost");
        Ok(())
    }

    async fn mark_found(&self, asset_id: &str) -> LibraryResult<()> {
        let mut circulation = self.load(asset_id).await?;
        circulation.mark_found(now())?;
        let title = circulation.asset().title.to_string();
        self.commit(circulation).await?;
        info!(branch_id = self.branch_id.as_str(), asset_id, title = title.as_str(), "asset marked found");
        Ok(())
    }

    async fn is_checked_out(&self, asset_id: &str) -> LibraryResult<bool> {
        let checkouts = self.checkout_repository.find_by_asset(asset_id).await?;
        Ok(!checkouts.is_empty())
    }

    async fn get_all(&self) -> LibraryResult<Vec<CheckoutDto>> {
        let res = self.checkout_repository.query_all(&HashMap::new()).await?;
        Ok(res.iter().map(CheckoutDto::from).collect())
    }

    async fn get_by_id(&self, checkout_id: &str) -> LibraryResult<Option<CheckoutDto>> {
        let res = soft_miss(self.checkout_repository.get(checkout_id).await)?;
        Ok(res.as_ref().map(CheckoutDto::from))
    }

    async fn get_latest_checkout(&self, asset_id: &str) -> LibraryResult<Option<CheckoutDto>> {
        let res = self.checkout_repository.find_by_asset(asset_id).await?;
        Ok(res.first().map(CheckoutDto::from))
    }

    async fn get_checkout_history(&self, asset_id: &str) -> LibraryResult<Vec<CheckoutHistoryDto>> {
        let res = self.history_repository.find_by_asset(asset_id).await?;
        Ok(res.iter().map(CheckoutHistoryDto::from).collect())
    }

    async fn get_current_holds(&self, asset_id: &str) -> LibraryResult<Vec<HoldDto>> {
        let res = self.hold_repository.find_by_asset(asset_id).await?;
        Ok(res.iter().map(HoldDto::from).collect())
    }

    async fn get_current_hold_patron_name(&self, hold_id: &str) -> LibraryResult<String> {
        match soft_miss(self.hold_repository.get(hold_id).await)? {
            Some(hold) => self.patron_name_for_card(hold.library_card_id.as_str()).await,
            None => Ok("".to_string()),
        }
    }

    async fn get_current_hold_placed(&self, hold_id: &str) -> LibraryResult<NaiveDateTime> {
        self.hold_repository.get(hold_id).await.map(|h| h.hold_placed)
    }

    async fn get_current_checkout_patron(&self, asset_id: &str) -> LibraryResult<String> {
        let checkouts = self.checkout_repository.find_by_asset(asset_id).await?;
        match checkouts.first() {
            Some(checkout) => self.patron_name_for_card(checkout.library_card_id.as_str()).await,
            None => Ok("".to_string()),
        }
    }
}
