use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::repository::Persistent;
use crate::utils::date::serializer;

// CheckoutEntity is the live record of an asset lent to a library card. It is removed
// outright when the asset comes back.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutEntity {
    pub checkout_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub since: NaiveDateTime,
    #[serde(with = "serializer")]
    pub until: NaiveDateTime,
}

impl CheckoutEntity {
    pub fn new(asset_id: &str, library_card_id: &str, since: NaiveDateTime, loan_days: i64) -> Self {
        Self {
            checkout_id: Uuid::new_v4().to_string(),
            version: 0,
            asset_id: asset_id.to_string(),
            library_card_id: library_card_id.to_string(),
            since,
            until: since + Duration::days(loan_days),
        }
    }
}

impl Identifiable for CheckoutEntity {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for CheckoutEntity {
    fn table_name() -> &'static str {
        "checkouts"
    }

    fn key_name() -> &'static str {
        "checkout_id"
    }
}
