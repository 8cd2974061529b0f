use chrono::NaiveDateTime;
use tracing::{debug, error};
use crate::assets::domain::model::AssetEntity;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::{AssetStatus, LibraryResult};
use crate::core::transaction::Changeset;
use crate::history::domain::model::CheckoutHistoryEntity;
use crate::hold::domain::model::HoldEntity;

// Circulation applies status transitions to one asset snapshot and records the
// writes they need. Nothing is persisted until the changeset is committed.
#[derive(Debug)]
pub(crate) struct Circulation {
    asset: AssetEntity,
    checkouts: Vec<CheckoutEntity>,
    open_history: Vec<CheckoutHistoryEntity>,
    holds: Vec<HoldEntity>,
    loan_days: i64,
    changes: Changeset,
    touched: bool,
}

impl Circulation {
    pub(crate) fn new(asset: AssetEntity,
                      checkouts: Vec<CheckoutEntity>,
                      open_history: Vec<CheckoutHistoryEntity>,
                      mut holds: Vec<HoldEntity>,
                      loan_days: i64) -> Self {
        if checkouts.len() > 1 {
            error!(asset_id = asset.asset_id.as_str(), checkouts = checkouts.len(),
                "asset has more than one live checkout");
        }
        if open_history.len() > 1 {
            error!(asset_id = asset.asset_id.as_str(), open_history = open_history.len(),
                "asset has more than one open checkout history");
        }
        holds.sort_by(|a, b| a.queue_key().cmp(&b.queue_key()));
        Self {
            asset,
            checkouts,
            open_history,
            holds,
            loan_days,
            changes: Changeset::new(),
            touched: false,
        }
    }

    pub(crate) fn asset(&self) -> &AssetEntity {
        &self.asset
    }

    pub(crate) fn status(&self) -> AssetStatus {
        self.asset.asset_status
    }

    pub(crate) fn checkouts(&self) -> &[CheckoutEntity] {
        &self.checkouts
    }

    pub(crate) fn holds(&self) -> &[HoldEntity] {
        &self.holds
    }

    pub(crate) fn is_checked_out(&self) -> bool {
        !self.checkouts().is_empty()
    }

    // Lends the asset to the card. Returns false without recording anything when
    // the asset is already checked out to anyone.
    pub(crate) fn check_out(&mut self, library_card_id: &str, now: NaiveDateTime) -> LibraryResult<bool> {
        if self.is_checked_out() {
            debug!(asset_id = self.asset.asset_id.as_str(), library_card_id, "asset already checked out");
            return Ok(false);
        }
        if !self.open_history.is_empty() {
            error!(asset_id = self.asset.asset_id.as_str(), "closing checkout history left open without a checkout");
            self.close_open_history(now)?;
        }
        let checkout = CheckoutEntity::new(self.asset.asset_id.as_str(), library_card_id, now, self.loan_days);
        let history = CheckoutHistoryEntity::new(self.asset.asset_id.as_str(), library_card_id, now);
        self.changes.insert(&checkout)?;
        self.changes.insert(&history)?;
        self.checkouts.push(checkout);
        self.open_history.push(history);
        self.set_status(AssetStatus::CheckedOut, now);
        Ok(true)
    }

    // Ends the current loan and hands the asset to the earliest hold if there is
    // one, so that a queued asset never becomes available in between.
    pub(crate) fn check_in(&mut self, now: NaiveDateTime) -> LibraryResult<Option<HoldEntity>> {
        self.end_loans(now)?;
        if self.holds.is_empty() {
            self.set_status(AssetStatus::Available, now);
            return Ok(None);
        }
        let hold = self.holds.remove(0);
        self.changes.delete::<HoldEntity>(hold.hold_id.as_str());
        self.check_out(hold.library_card_id.as_str(), now)?;
        Ok(Some(hold))
    }

    // Only the first hold on an available asset changes its status.
    pub(crate) fn place_hold(&mut self, library_card_id: &str, now: NaiveDateTime) -> LibraryResult<HoldEntity> {
        let hold = HoldEntity::new(self.asset.asset_id.as_str(), library_card_id, now);
        self.changes.insert(&hold)?;
        self.holds.push(hold.clone());
        if self.asset.asset_status == AssetStatus::Available {
            self.set_status(AssetStatus::OnHold, now);
        } else {
            self.touch(now);
        }
        Ok(hold)
    }

    // Loss leaves checkouts, history and holds as they are.
    pub(crate) fn mark_lost(&mut self, now: NaiveDateTime) {
        self.set_status(AssetStatus::Lost, now);
    }

    // Found assets go back on the shelf without serving the hold queue.
    pub(crate) fn mark_found(&mut self, now: NaiveDateTime) -> LibraryResult<()> {
        self.set_status(AssetStatus::Available, now);
        self.end_loans(now)
    }

    // The versioned asset write goes first so concurrent transitions on the
    // same asset cannot both commit.
    pub(crate) fn into_changeset(self) -> LibraryResult<Changeset> {
        let mut changes = Changeset::new();
        if !self.touched {
            return Ok(changes);
        }
        changes.update(&self.asset)?;
        changes.append(self.changes);
        Ok(changes)
    }

    fn end_loans(&mut self, now: NaiveDateTime) -> LibraryResult<()> {
        for checkout in self.checkouts.drain(..) {
            self.changes.delete::<CheckoutEntity>(checkout.checkout_id.as_str());
        }
        self.close_open_history(now)?;
        self.touch(now);
        Ok(())
    }

    fn close_open_history(&mut self, now: NaiveDateTime) -> LibraryResult<()> {
        for mut history in self.open_history.drain(..) {
            history.close(now);
            self.changes.update(&history)?;
        }
        Ok(())
    }

    fn set_status(&mut self, status: AssetStatus, now: NaiveDateTime) {
        self.asset.asset_status = status;
        self.touch(now);
    }

    fn touch(&mut self, now: NaiveDateTime) {
        self.asset.updated_at = now;
        self.touched = true;
    }
}
