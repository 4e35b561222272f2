//! # Directory Session
//!
//! The single logical owner of the doctor list and the [`FilterState`] for
//! one browsing session. All user intents mutate state here, the derived
//! list is recomputed synchronously from current state (never from stale
//! snapshots), and the query string is always encoded from whatever state
//! resulted from the latest decode or user action.
//!
//! Search input is special: the visible query (what suggestions and the
//! query string see) updates on every keystroke, but the value used for
//! *filtering* follows only after the debounce window closes. Initial
//! values, whether from a decoded query string or a wholesale state
//! replacement, apply immediately with no artificial delay.

use crate::filter;
use crate::model::{ConsultationType, Doctor, FilterState, SortDirection, SortKey};
use crate::query;
use quiesce::Debouncer;
use std::time::Duration;

#[derive(Debug)]
pub struct DirectorySession {
    doctors: Vec<Doctor>,
    state: FilterState,
    /// The debounced search value the engine filters with.
    applied_search: String,
    search_debounce: Debouncer<String>,
}

impl DirectorySession {
    /// Start a session with an all-default filter state.
    pub fn new(doctors: Vec<Doctor>, debounce_delay: Duration) -> Self {
        Self {
            doctors,
            state: FilterState::default(),
            applied_search: String::new(),
            search_debounce: Debouncer::new(debounce_delay),
        }
    }

    /// Start a session from a shared query string.
    pub fn with_query(doctors: Vec<Doctor>, debounce_delay: Duration, query: &str) -> Self {
        let mut session = Self::new(doctors, debounce_delay);
        session.apply_query(query);
        session
    }

    /// The full validated list, unfiltered. Suggestion and specialty lists
    /// are built from this, not from the visible subset.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the whole filter state, e.g. from CLI flags. This is
    /// initialization, not typing: the search value takes effect
    /// immediately.
    pub fn replace_state(&mut self, state: FilterState) {
        self.applied_search = state.search_query.clone();
        self.state = state;
    }

    /// Decode a query string and adopt it wholesale. Nothing of the prior
    /// state survives; this is the single source of truth on (re)load and
    /// on external navigation.
    pub fn apply_query(&mut self, query: &str) {
        self.replace_state(query::decode(query));
    }

    /// The shareable query string for the current state. Always encoded
    /// from current state, so it can never serialize a stale snapshot.
    pub fn query_string(&self) -> String {
        query::encode(&self.state)
    }

    /// A keystroke in the search box: the visible query updates at once,
    /// filtering follows once the input has been quiet for the debounce
    /// window.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.search_query = text.clone();
        self.search_debounce.submit(text);
    }

    /// Adopt the latest settled search value, if any window has closed.
    pub fn pump(&mut self) {
        if let Some(settled) = self.search_debounce.try_settled() {
            self.applied_search = settled;
        }
    }

    /// Block until a pending search value settles, then adopt it. A no-op
    /// when nothing is pending.
    pub fn settle_search(&mut self) {
        if let Some(settled) = self.search_debounce.settle() {
            self.applied_search = settled;
        }
    }

    /// Selecting the active mode again clears the filter.
    pub fn toggle_consultation(&mut self, mode: ConsultationType) {
        self.state.consultation_type = if self.state.consultation_type == Some(mode) {
            None
        } else {
            Some(mode)
        };
    }

    /// Add the specialty to the filter set, or remove it when already
    /// selected.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if let Some(position) = self.state.specialties.iter().position(|s| s == specialty) {
            self.state.specialties.remove(position);
        } else {
            self.state.specialties.push(specialty.to_string());
        }
    }

    /// Selecting the current ascending key flips it to descending; anything
    /// else selects the key ascending.
    pub fn choose_sort(&mut self, key: SortKey) {
        let flip = self.state.sort_key == Some(key)
            && self.state.sort_direction == Some(SortDirection::Ascending);
        self.state.sort_key = Some(key);
        self.state.sort_direction = Some(if flip {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        });
    }

    /// The filtered, sorted list. Reads the debounced search together with
    /// the current filters and the current list in one synchronous pass.
    pub fn visible(&self) -> Vec<Doctor> {
        let mut effective = self.state.clone();
        effective.search_query = self.applied_search.clone();
        filter::apply(&self.doctors, &effective)
    }

    /// Name suggestions for the search box. These track the raw input, not
    /// the debounced value, so they feel immediate.
    pub fn suggestions(&self) -> Vec<String> {
        filter::suggestions(&self.doctors, &self.state.search_query)
    }

    pub fn specialty_options(&self) -> Vec<String> {
        filter::specialty_options(&self.doctors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConsultationType;

    const NO_DELAY: Duration = Duration::from_millis(0);

    fn doctor(id: &str, name: &str, specialty: &str, experience: u32, fees: u32) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialties: vec![specialty.to_string()],
            experience,
            fees,
            consultation_type: ConsultationType::InClinic,
        }
    }

    fn session() -> DirectorySession {
        DirectorySession::new(
            vec![
                doctor("1", "Dr. Alok Sharma", "Cardiology", 13, 500),
                doctor("2", "Dr. Meera Nair", "Dermatology", 8, 300),
                doctor("3", "Dr. Ramesh Gupta", "Cardiology", 20, 700),
            ],
            NO_DELAY,
        )
    }

    #[test]
    fn toggling_consultation_selects_then_clears() {
        let mut s = session();
        s.toggle_consultation(ConsultationType::InClinic);
        assert_eq!(
            s.state().consultation_type,
            Some(ConsultationType::InClinic)
        );

        s.toggle_consultation(ConsultationType::VideoConsult);
        assert_eq!(
            s.state().consultation_type,
            Some(ConsultationType::VideoConsult)
        );

        s.toggle_consultation(ConsultationType::VideoConsult);
        assert_eq!(s.state().consultation_type, None);
    }

    #[test]
    fn toggling_specialty_adds_then_removes() {
        let mut s = session();
        s.toggle_specialty("Cardiology");
        s.toggle_specialty("Dermatology");
        assert_eq!(s.state().specialties, vec!["Cardiology", "Dermatology"]);

        s.toggle_specialty("Cardiology");
        assert_eq!(s.state().specialties, vec!["Dermatology"]);
    }

    #[test]
    fn repeated_sort_selection_toggles_direction() {
        let mut s = session();
        s.choose_sort(SortKey::Fees);
        assert_eq!(s.state().sort_key, Some(SortKey::Fees));
        assert_eq!(s.state().sort_direction, Some(SortDirection::Ascending));

        s.choose_sort(SortKey::Fees);
        assert_eq!(s.state().sort_direction, Some(SortDirection::Descending));

        // Switching keys resets to ascending.
        s.choose_sort(SortKey::Experience);
        assert_eq!(s.state().sort_key, Some(SortKey::Experience));
        assert_eq!(s.state().sort_direction, Some(SortDirection::Ascending));
    }

    #[test]
    fn typed_search_filters_only_after_settling() {
        let mut s = DirectorySession::new(
            vec![
                doctor("1", "Dr. Alok Sharma", "Cardiology", 13, 500),
                doctor("2", "Dr. Meera Nair", "Dermatology", 8, 300),
            ],
            Duration::from_millis(30),
        );

        s.set_search("nair");
        // The raw query is visible immediately (query string, suggestions)...
        assert_eq!(s.state().search_query, "nair");
        assert_eq!(s.query_string(), "search=nair");
        // ...but the filtered list still reflects the previous applied value.
        assert_eq!(s.visible().len(), 2);

        s.settle_search();
        let visible = s.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Dr. Meera Nair");
    }

    #[test]
    fn query_string_round_trips_through_the_session() {
        let mut s = session();
        s.set_search("sharma");
        s.settle_search();
        s.toggle_consultation(ConsultationType::InClinic);
        s.toggle_specialty("Cardiology");
        s.choose_sort(SortKey::Fees);
        s.choose_sort(SortKey::Fees);

        let shared = s.query_string();
        let restored = DirectorySession::with_query(session().doctors.clone(), NO_DELAY, &shared);
        assert_eq!(restored.state(), s.state());
        assert_eq!(restored.query_string(), shared);
    }

    #[test]
    fn applying_a_query_replaces_prior_state_wholesale() {
        let mut s = session();
        s.toggle_specialty("Cardiology");
        s.choose_sort(SortKey::Experience);

        s.apply_query("search=gupta");
        assert_eq!(s.state().search_query, "gupta");
        assert!(s.state().specialties.is_empty());
        assert_eq!(s.state().sort_key, None);

        // Initialization applies the search immediately, no debounce.
        let visible = s.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Dr. Ramesh Gupta");
    }

    #[test]
    fn suggestions_track_the_raw_input() {
        let mut s = session();
        s.set_search("dr");
        assert_eq!(s.suggestions().len(), 3);

        s.set_search("mee");
        assert_eq!(s.suggestions(), vec!["Dr. Meera Nair"]);
    }

    #[test]
    fn specialty_options_come_from_the_full_list() {
        let mut s = session();
        s.toggle_specialty("Dermatology");
        // Filtering does not shrink the options offered.
        assert_eq!(s.specialty_options(), vec!["Cardiology", "Dermatology"]);
    }
}
