use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::repository::Persistent;
use crate::utils::date::serializer;

// PatronEntity abstracts library member. The card and home branch are referenced by id
// and fetched explicitly when needed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub version: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    #[serde(with = "serializer")]
    pub date_of_birth: NaiveDateTime,
    pub telephone_number: String,
    pub library_card_id: String,
    pub home_library_branch_id: String,
}

impl PatronEntity {
    pub fn new(first_name: &str, last_name: &str, library_card_id: &str, home_library_branch_id: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            version: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "".to_string(),
            date_of_birth: Utc::now().naive_utc(),
            telephone_number: "".to_string(),
            library_card_id: library_card_id.to_string(),
            home_library_branch_id: home_library_branch_id.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for PatronEntity {
    fn table_name() -> &'static str {
        "patrons"
    }

    fn key_name() -> &'static str {
        "patron_id"
    }
}

// LibraryCardEntity is the borrowing credential, one per patron.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryCardEntity {
    pub library_card_id: String,
    pub version: i64,
    pub fees: f64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl LibraryCardEntity {
    pub fn new() -> Self {
        Self {
            library_card_id: Uuid::new_v4().to_string(),
            version: 0,
            fees: 0.0,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Default for LibraryCardEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl Identifiable for LibraryCardEntity {
    fn id(&self) -> String {
        self.library_card_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for LibraryCardEntity {
    fn table_name() -> &'static str {
        "library_cards"
    }

    fn key_name() -> &'static str {
        "library_card_id"
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BranchEntity {
    pub branch_id: String,
    pub version: i64,
    pub name: String,
    pub address: String,
    pub telephone_number: String,
}

impl BranchEntity {
    pub fn new(name: &str) -> Self {
        Self {
            branch_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            address: "".to_string(),
            telephone_number: "".to_string(),
        }
    }
}

impl Identifiable for BranchEntity {
    fn id(&self) -> String {
        self.branch_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for BranchEntity {
    fn table_name() -> &'static str {
        "branches"
    }

    fn key_name() -> &'static str {
        "branch_id"
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::{BranchEntity, LibraryCardEntity, PatronEntity};

    #[tokio::test]
    async fn test_should_build_patron() {
        let card = LibraryCardEntity::new();
        let branch = BranchEntity::new("Main");
        let patron = PatronEntity::new("Ada", "Lovelace", card.library_card_id.as_str(), branch.branch_id.as_str());
        assert_eq!("Ada Lovelace", patron.full_name().as_str());
        assert_eq!(card.library_card_id, patron.library_card_id);
        assert_eq!(branch.branch_id, patron.home_library_branch_id);
        assert_eq!(0.0, card.fees);
    }
}
