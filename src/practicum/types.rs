//! Homework API types and the verdict table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Review status of a homework submission.
///
/// The set is closed; anything else reported by the API is rejected by the
/// status formatter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work was picked up for review.
    Reviewing,
    /// The reviewer requested changes.
    Rejected,
}

impl HomeworkStatus {
    /// Parses a status code as reported by the API.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns the status code used on the wire.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the human-readable verdict for this status.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// Normalized result of one homework API request.
#[derive(Debug, Clone)]
pub struct ApiAnswer {
    /// Decoded response payload.
    pub payload: Value,
    /// Top-level `from_date` echo, when the API reports one.
    pub from_date: Option<i64>,
    /// HTTP status code of the response.
    pub status: u16,
}
