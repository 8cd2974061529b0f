use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::AssetStatus;
use crate::core::repository::Persistent;
use crate::utils::date::serializer;

// AssetEntity abstracts a physical circulating item such as a book or media copy.
// Its status is only changed by the circulation engine.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AssetEntity {
    pub asset_id: String,
    pub version: i64,
    pub title: String,
    pub asset_status: AssetStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl AssetEntity {
    pub fn new(title: &str, status: AssetStatus) -> Self {
        Self {
            asset_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            asset_status: status,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for AssetEntity {
    fn id(&self) -> String {
        self.asset_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for AssetEntity {
    fn table_name() -> &'static str {
        "assets"
    }

    fn key_name() -> &'static str {
        "asset_id"
    }
}
