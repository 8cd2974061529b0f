use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::AssetStatus;
use crate::utils::date::serializer;

// AssetDto is the outward view of an asset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AssetDto {
    pub asset_id: String,
    pub version: i64,
    pub title: String,
    pub asset_status: AssetStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AssetDto {
    pub fn new(title: &str) -> Self {
        Self {
            asset_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            asset_status: AssetStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AssetDto {
    fn id(&self) -> String {
        self.asset_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
