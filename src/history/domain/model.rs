use chrono::NaiveDateTime;
use uuid::Uuid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use crate::core::domain::Identifiable;
use crate::core::repository::Persistent;
use crate::utils::date::{format_date, parse_date, serializer};

// CheckinState tells whether a checkout recorded in the ledger has ended.
// It is stored as a nullable timestamp.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CheckinState {
    Open,
    Closed(NaiveDateTime),
}

impl CheckinState {
    pub fn is_open(&self) -> bool {
        matches!(self, CheckinState::Open)
    }

    pub fn checked_in(&self) -> Option<NaiveDateTime> {
        match self {
            CheckinState::Open => None,
            CheckinState::Closed(at) => Some(*at),
        }
    }
}

impl Serialize for CheckinState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckinState::Open => serializer.serialize_none(),
            CheckinState::Closed(at) => serializer.serialize_some(&format_date(*at)),
        }
    }
}

impl<'de> Deserialize<'de> for CheckinState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_time {
            None => Ok(CheckinState::Open),
            Some(s) if s.is_empty() => Ok(CheckinState::Open),
            Some(s) => parse_date(&s).map(CheckinState::Closed).map_err(D::Error::custom),
        }
    }
}

// CheckoutHistoryEntity is an append-only ledger row spanning one checkout from
// check-out to check-in. Rows are closed but never deleted.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutHistoryEntity {
    pub history_id: String,
    pub version: i64,
    pub asset_id: String,
    pub library_card_id: String,
    #[serde(with = "serializer")]
    pub checked_out: NaiveDateTime,
    pub checked_in: CheckinState,
}

impl CheckoutHistoryEntity {
    pub fn new(asset_id: &str, library_card_id: &str, checked_out: NaiveDateTime) -> Self {
        Self {
            history_id: Uuid::new_v4().to_string(),
            version: 0,
            asset_id: asset_id.to_string(),
            library_card_id: library_card_id.to_string(),
            checked_out,
            checked_in: CheckinState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.checked_in.is_open()
    }

    pub fn close(&mut self, checked_in: NaiveDateTime) {
        self.checked_in = CheckinState::Closed(checked_in);
    }
}

impl Identifiable for CheckoutHistoryEntity {
    fn id(&self) -> String {
        self.history_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Persistent for CheckoutHistoryEntity {
    fn table_name() -> &'static str {
        "checkout_histories"
    }

    fn key_name() -> &'static str {
        "history_id"
    }
}
