use serde::{Deserialize, Serialize};
use std::fmt;

/// How a doctor sees patients. Exactly one mode per doctor; when the raw
/// data advertises both, video wins (see `ingest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsultationType {
    #[serde(rename = "Video Consult")]
    VideoConsult,
    #[serde(rename = "In Clinic")]
    InClinic,
}

impl ConsultationType {
    /// Canonical form, as used in the query string and in the raw data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "Video Consult",
            ConsultationType::InClinic => "In Clinic",
        }
    }

    /// Strict parse of the canonical form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Video Consult" => Some(ConsultationType::VideoConsult),
            "In Clinic" => Some(ConsultationType::InClinic),
            _ => None,
        }
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "fees")]
    Fees,
    #[serde(rename = "experience")]
    Experience,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fees" => Some(SortKey::Fees),
            "experience" => Some(SortKey::Experience),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// A validated, normalized practitioner record. Immutable once built; only
/// `ingest` constructs these, so every field is present and well-typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    /// Insertion order preserved for display.
    pub specialties: Vec<String>,
    /// Years of experience.
    pub experience: u32,
    pub fees: u32,
    pub consultation_type: ConsultationType,
}

/// The complete set of user-chosen search/filter/sort criteria.
///
/// Always fully defined: a field at its default (empty string, empty vec,
/// `None`) means "no filter", never "unknown". The state round-trips through
/// the query string via the `query` module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub consultation_type: Option<ConsultationType>,
    pub specialties: Vec<String>,
    pub sort_key: Option<SortKey>,
    /// Meaningful only when `sort_key` is set; an unset direction sorts
    /// ascending.
    pub sort_direction: Option<SortDirection>,
}

impl FilterState {
    /// True when no filter or sort is active.
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}
