use chrono::NaiveDateTime;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::Persistent;
use crate::utils::date::serializer;

// HoldEntity is a patron's place in the queue for an asset. Holds are created when
// placed and deleted when fulfilled, they are never updated in place.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HoldEntity {
    pub hold_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub hold_placed: NaiveDateTime,
}

impl HoldEntity {
    pub fn new(asset_id: &str, library_card_id: &str, hold_placed: NaiveDateTime) -> Self {
        Self {
            // time-ordered so that ids break ties between holds placed at the same instant
            hold_id: Uuid::now_v7().to_string(),
            version: 0,
            asset_id: asset_id.to_string(),
            library_card_id: library_card_id.to_string(),
            hold_placed,
        }
    }

    // position in the hold queue, earliest first
    pub fn queue_key(&self) -> (NaiveDateTime, &str) {
        (self.hold_placed, self.hold_id.as_str())
    }
}

impl Identifiable for HoldEntity {
    fn id(&self) -> String {
        self.hold_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for HoldEntity {
    fn table_name() -> &'static str {
        "holds"
    }

    fn key_name() -> &'static str {
        "hold_id"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::hold::domain::model::HoldEntity;

    #[tokio::test]
    async fn test_should_build_hold() {
        let now = Utc::now().naive_utc();
        let hold = HoldEntity::new("asset1", "card1", now);
        assert_eq!("asset1", hold.asset_id.as_str());
        assert_eq!("card1", hold.library_card_id.as_str());
        assert_eq!(now, hold.hold_placed);
    }

    #[tokio::test]
    async fn test_should_order_holds_placed_at_same_time() {
        let now = Utc::now().naive_utc();
        let first = HoldEntity::new("asset1", "card1", now);
        let second = HoldEntity::new("asset1", "card2", now);
        assert!(first.queue_key() < second.queue_key());
    }
}
