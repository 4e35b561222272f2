//! # Filter/Sort Engine
//!
//! Pure functions from (doctor list, filter state) to derived lists. Nothing
//! here mutates its inputs or does I/O, which is what keeps the whole
//! pipeline trivially testable.

use crate::model::{Doctor, FilterState, SortDirection, SortKey};

/// Maximum number of autocomplete suggestions offered for a search term.
pub const MAX_SUGGESTIONS: usize = 3;

/// Apply the filter state to the full list and return the visible list.
///
/// Predicates are independent, so their order is irrelevant; the sort runs
/// last. With no sort key the source order is preserved, and the sort itself
/// is stable so equal keys also keep their source order. An unset direction
/// sorts ascending.
pub fn apply(doctors: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let mut result: Vec<Doctor> = doctors.to_vec();

    if !state.search_query.is_empty() {
        let needle = state.search_query.to_lowercase();
        result.retain(|doctor| doctor.name.to_lowercase().contains(&needle));
    }

    if let Some(mode) = state.consultation_type {
        result.retain(|doctor| doctor.consultation_type == mode);
    }

    if !state.specialties.is_empty() {
        // OR semantics: any overlap with the selected specialties keeps the
        // doctor.
        result.retain(|doctor| {
            state
                .specialties
                .iter()
                .any(|selected| doctor.specialties.contains(selected))
        });
    }

    if let Some(key) = state.sort_key {
        result.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Fees => a.fees.cmp(&b.fees),
                SortKey::Experience => a.experience.cmp(&b.experience),
            };
            match state.sort_direction {
                Some(SortDirection::Descending) => ordering.reverse(),
                _ => ordering,
            }
        });
    }

    result
}

/// Autocomplete: up to [`MAX_SUGGESTIONS`] doctor names containing `input`
/// case-insensitively, in list order. An empty input suggests nothing.
pub fn suggestions(doctors: &[Doctor], input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    doctors
        .iter()
        .filter(|doctor| doctor.name.to_lowercase().contains(&needle))
        .map(|doctor| doctor.name.clone())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Every specialty present in the directory, deduplicated, in first-seen
/// order. This feeds the filter controls.
pub fn specialty_options(doctors: &[Doctor]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for doctor in doctors {
        for specialty in &doctor.specialties {
            if !options.contains(specialty) {
                options.push(specialty.clone());
            }
        }
    }
    options
}
