use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// Patron abstracts library member, the card and home branch are only attached
// when the patron is looked up by id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
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
    pub library_card: Option<LibraryCardDto>,
    pub home_library_branch: Option<BranchDto>,
}

impl PatronDto {
    pub fn new(first_name: &str, last_name: &str, home_library_branch_id: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            version: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "".to_string(),
            date_of_birth: Utc::now().naive_utc(),
            telephone_number: "".to_string(),
            library_card_id: "".to_string(),
            home_library_branch_id: home_library_branch_id.to_string(),
            library_card: None,
            home_library_branch: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryCardDto {
    pub library_card_id: String,
    pub version: i64,
    pub fees: f64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BranchDto {
    pub branch_id: String,
    pub version: i64,
    pub name: String,
    pub address: String,
    pub telephone_number: String,
}

impl BranchDto {
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
