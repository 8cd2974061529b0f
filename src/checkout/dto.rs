use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// CheckoutDto abstracts the asset that is checked out or borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub since: NaiveDateTime,
    #[serde(with = "serializer")]
    pub until: NaiveDateTime,
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&CheckoutEntity> for CheckoutDto {
    fn from(other: &CheckoutEntity) -> CheckoutDto {
        CheckoutDto {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            asset_id: other.asset_id.to_string(),
            library_card_id: other.library_card_id.to_string(),
            since: other.since,
            until: other.until,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::dto::CheckoutDto;

    #[tokio::test]
    async fn test_should_build_checkout_dto() {
        let checkout = CheckoutEntity::new("asset1", "card1", Utc::now().naive_utc(), 30);
        let dto = CheckoutDto::from(&checkout);
        assert_eq!(checkout.checkout_id, dto.checkout_id);
        assert_eq!(checkout.until, dto.until);
    }
}
