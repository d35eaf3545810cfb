//! Response model for the homework-status endpoint.
//!
//! Shape validation works on the raw [`serde_json::Value`] so that an absent
//! `homeworks` key and a wrong-typed one stay distinguishable; a typed
//! deserialize would collapse both into one serde error.

use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::core::{PollError, Result};

/// Review verdict for a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Localized verdict text shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }
}

/// One homework entry as returned by the API. Fields stay optional; presence
/// is checked by [`describe_status`], not by deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Checks a response against the documented shape and extracts the records.
///
/// The top-level value must be an object and `homeworks` must be present and
/// an array. An empty array is a valid "no update" answer, not an error.
pub fn validate_response(response: &Value) -> Result<Vec<HomeworkRecord>> {
    let object = response.as_object().ok_or_else(|| {
        PollError::Shape(format!("top-level value is not an object: {}", response))
    })?;
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;
    let items = homeworks.as_array().ok_or_else(|| {
        PollError::Shape(format!("'homeworks' is not an array: {}", homeworks))
    })?;
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(PollError::Json))
        .collect()
}

/// `current_date` from the response, when present and integral.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

/// Renders the notification text for one homework record.
///
/// An empty `homework_name` counts as absent so a blank name never produces
/// a blank notification.
pub fn describe_status(record: &HomeworkRecord) -> Result<String> {
    let name = record
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(PollError::MissingField("homework_name"))?;
    let status: HomeworkStatus = record
        .status
        .as_deref()
        .ok_or(PollError::MissingField("status"))?
        .parse()?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
