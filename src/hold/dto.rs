use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::hold::domain::model::HoldEntity;
use crate::utils::date::serializer;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HoldDto {
    pub hold_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub hold_placed: NaiveDateTime,
}

impl Identifiable for HoldDto {
    fn id(&self) -> String {
        self.hold_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&HoldEntity> for HoldDto {
    fn from(other: &HoldEntity) -> Self {
        Self {
            hold_id: other.hold_id.to_string(),
            version: other.version,
            asset_id: other.asset_id.to_string(),
            library_card_id: other.library_card_id.to_string(),
            hold_placed: other.hold_placed,
        }
    }
}
