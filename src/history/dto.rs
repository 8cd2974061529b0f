use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::history::domain::model::{CheckinState, CheckoutHistoryEntity};
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutHistoryDto {
    pub history_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub checked_out: NaiveDateTime,
    pub checked_in: CheckinState,
}

impl Identifiable for CheckoutHistoryDto {
    fn id(&self) -> String {
        self.history_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&CheckoutHistoryEntity> for CheckoutHistoryDto {
    fn from(other: &CheckoutHistoryEntity) -> Self {
        Self {
            history_id: other.history_id.to_string(),
            version: other.version,
            asset_id: other.asset_id.to_string(),
            library_card_id: other.library_card_id.to_string(),
            checked_out: other.checked_out,
            checked_in: other.checked_in,
        }
    }
}
