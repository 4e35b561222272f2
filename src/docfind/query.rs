//! # Query-String Synchronization
//!
//! Bidirectional mapping between [`FilterState`] and a URL query string, so
//! a view can be shared or bookmarked. Both directions are idempotent and
//! total:
//!
//! - [`decode`] never fails. Malformed values fall back field-by-field to
//!   the default, and unknown keys are ignored.
//! - [`encode`] writes only non-default fields, so the query string stays
//!   minimal and never accumulates stale empty parameters.
//!
//! `decode(encode(s)) == s` holds for every state.

use crate::model::{ConsultationType, FilterState, SortDirection, SortKey};
use url::form_urlencoded;

const KEY_SEARCH: &str = "search";
const KEY_CONSULTATION: &str = "consultation";
const KEY_SPECIALTIES: &str = "specialties";
const KEY_SORT_BY: &str = "sortBy";
const KEY_SORT_ORDER: &str = "sortOrder";

/// Serialize the state to a query string (without the leading `?`).
///
/// Fields at their default are omitted entirely, never written empty. The
/// default state encodes to an empty string.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search_query.is_empty() {
        serializer.append_pair(KEY_SEARCH, &state.search_query);
    }
    if let Some(mode) = state.consultation_type {
        serializer.append_pair(KEY_CONSULTATION, mode.as_str());
    }
    if !state.specialties.is_empty() {
        serializer.append_pair(KEY_SPECIALTIES, &state.specialties.join(","));
    }
    if let Some(key) = state.sort_key {
        serializer.append_pair(KEY_SORT_BY, key.as_str());
    }
    if let Some(direction) = state.sort_direction {
        serializer.append_pair(KEY_SORT_ORDER, direction.as_str());
    }

    serializer.finish()
}

/// Parse a query string (with or without the leading `?`) into a complete
/// state. The result replaces any in-memory state wholesale; there is no
/// merging with what came before.
///
/// The first occurrence of a key wins. `consultation` must be exactly
/// `"Video Consult"` or `"In Clinic"` to take effect, `sortBy` must be
/// `"fees"` or `"experience"`, and `sortOrder` must be `"asc"` or `"desc"`;
/// anything else leaves the field at its default. Empty segments in the
/// comma-separated specialty list are discarded.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search = None;
    let mut consultation = None;
    let mut specialties = None;
    let mut sort_by = None;
    let mut sort_order = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            KEY_SEARCH => &mut search,
            KEY_CONSULTATION => &mut consultation,
            KEY_SPECIALTIES => &mut specialties,
            KEY_SORT_BY => &mut sort_by,
            KEY_SORT_ORDER => &mut sort_order,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterState {
        search_query: search.unwrap_or_default(),
        consultation_type: consultation.as_deref().and_then(ConsultationType::parse),
        specialties: specialties
            .map(|raw| {
                raw.split(',')
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        sort_key: sort_by.as_deref().and_then(SortKey::parse),
        sort_direction: sort_order.as_deref().and_then(SortDirection::parse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state() -> FilterState {
        FilterState {
            search_query: "Dr. Alok Sharma".to_string(),
            consultation_type: Some(ConsultationType::VideoConsult),
            specialties: vec!["Cardiology".to_string(), "General Physician".to_string()],
            sort_key: Some(SortKey::Fees),
            sort_direction: Some(SortDirection::Descending),
        }
    }

    #[test]
    fn default_state_encodes_to_nothing() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn every_reachable_state_round_trips() {
        let states = [
            FilterState::default(),
            full_state(),
            FilterState {
                search_query: "nair".to_string(),
                ..FilterState::default()
            },
            FilterState {
                consultation_type: Some(ConsultationType::InClinic),
                sort_key: Some(SortKey::Experience),
                sort_direction: Some(SortDirection::Ascending),
                ..FilterState::default()
            },
            FilterState {
                specialties: vec!["Dermatology".to_string()],
                ..FilterState::default()
            },
            // Reachable via URL only: a sort key without a direction.
            FilterState {
                sort_key: Some(SortKey::Fees),
                ..FilterState::default()
            },
        ];

        for state in states {
            assert_eq!(decode(&encode(&state)), state, "state: {state:?}");
        }
    }

    #[test]
    fn spaces_and_commas_survive_the_encoding() {
        let encoded = encode(&full_state());
        // form encoding turns spaces into '+'; decode must restore them.
        assert!(encoded.contains("consultation=Video+Consult"));
        assert!(encoded.contains("specialties=Cardiology%2CGeneral+Physician"));
        assert_eq!(decode(&encoded), full_state());
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        assert_eq!(decode("?search=nair").search_query, "nair");
        assert_eq!(decode("search=nair").search_query, "nair");
    }

    #[test]
    fn malformed_values_fall_back_field_by_field() {
        let state = decode("consultation=telepathy&sortBy=name&sortOrder=up&search=ok");
        assert_eq!(state.search_query, "ok");
        assert_eq!(state.consultation_type, None);
        assert_eq!(state.sort_key, None);
        assert_eq!(state.sort_direction, None);
    }

    #[test]
    fn consultation_value_must_match_exactly() {
        assert_eq!(decode("consultation=video+consult").consultation_type, None);
        assert_eq!(
            decode("consultation=Video+Consult").consultation_type,
            Some(ConsultationType::VideoConsult)
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = decode("page=3&utm_source=share&search=gupta");
        assert_eq!(state.search_query, "gupta");
        assert!(!state.is_default());
        assert_eq!(encode(&state), "search=gupta");
    }

    #[test]
    fn empty_specialty_segments_are_discarded() {
        let state = decode("specialties=,Cardiology,,Dermatology,");
        assert_eq!(state.specialties, vec!["Cardiology", "Dermatology"]);

        assert!(decode("specialties=").specialties.is_empty());
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let state = decode("search=first&search=second&sortBy=fees&sortBy=experience");
        assert_eq!(state.search_query, "first");
        assert_eq!(state.sort_key, Some(SortKey::Fees));
    }

    #[test]
    fn decode_is_idempotent_through_encode() {
        let state = decode("search=nair&sortBy=fees");
        assert_eq!(decode(&encode(&state)), state);
    }
}
