//! # Ingest - The Validation Boundary
//!
//! The remote endpoint returns untyped JSON with its own quirks: numbers
//! encoded as strings, fees carrying currency symbols, a `specialities`
//! spelling, and two independent boolean-ish consultation flags. Nothing
//! downstream is allowed to touch that shape. This module validates each raw
//! record and normalizes survivors into [`Doctor`] values; invalid records
//! are dropped silently and only counted.
//!
//! If *no* record survives, the whole fetch is treated as failed. A partial
//! drop is a diagnostic, not an error.

use crate::error::{DocfindError, Result};
use crate::model::{ConsultationType, Doctor};
use serde_json::Value;

/// The surviving doctors plus a count of records that failed validation.
#[derive(Debug)]
pub struct IngestOutcome {
    pub doctors: Vec<Doctor>,
    pub dropped: usize,
}

/// Validate and normalize a raw payload.
///
/// Returns [`DocfindError::AllRecordsInvalid`] when nothing survives,
/// including for an empty payload.
pub fn ingest(records: &[Value]) -> Result<IngestOutcome> {
    let doctors: Vec<Doctor> = records
        .iter()
        .filter(|record| validate(record))
        .map(transform)
        .collect();

    if doctors.is_empty() {
        return Err(DocfindError::AllRecordsInvalid);
    }

    Ok(IngestOutcome {
        dropped: records.len() - doctors.len(),
        doctors,
    })
}

/// A record is accepted only when every field the transformer relies on has
/// the type the API promises: `id` and `name` strings, `specialities` a
/// list, `experience` and `fees` strings (the API encodes numbers as
/// strings).
fn validate(record: &Value) -> bool {
    record.get("id").is_some_and(Value::is_string)
        && record.get("name").is_some_and(Value::is_string)
        && record.get("specialities").is_some_and(Value::is_array)
        && record.get("experience").is_some_and(Value::is_string)
        && record.get("fees").is_some_and(Value::is_string)
}

fn transform(record: &Value) -> Doctor {
    let specialties = record["specialities"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Doctor {
        id: record["id"].as_str().unwrap_or_default().to_string(),
        name: record["name"].as_str().unwrap_or_default().to_string(),
        specialties,
        experience: parse_leading_int(record["experience"].as_str().unwrap_or_default()),
        fees: parse_fees(record["fees"].as_str().unwrap_or_default()),
        consultation_type: consultation_type(record),
    }
}

/// Leading-integer parse: "13 Years of experience" is 13, junk after the
/// digits is ignored, and anything without leading digits is 0.
fn parse_leading_int(s: &str) -> u32 {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Fees arrive as display strings ("₹ 500"): strip everything that is not a
/// digit, then parse. Empty or unparseable is 0.
fn parse_fees(s: &str) -> u32 {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// The raw flags are not guaranteed to be booleans, so truthiness follows
/// the source data's own rules: false, null, 0, "" and a missing key are
/// falsy, everything else is truthy.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Collapse the two independent raw flags into one mode.
///
/// A doctor offering both is listed under video, and one advertising
/// neither falls back to in-clinic. Both defaults are deliberate product
/// rules, not data cleanup.
fn consultation_type(record: &Value) -> ConsultationType {
    let video = truthy(record.get("video_consult"));
    let clinic = truthy(record.get("in_clinic"));
    match (video, clinic) {
        (true, false) => ConsultationType::VideoConsult,
        (false, true) => ConsultationType::InClinic,
        (true, true) => ConsultationType::VideoConsult,
        (false, false) => ConsultationType::InClinic,
    }
}
