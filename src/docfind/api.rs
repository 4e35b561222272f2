//! # API Facade
//!
//! The single entry point for building a directory session, regardless of
//! the UI in front of it. The facade fetches the raw payload from a
//! [`DoctorSource`], runs it through the ingest boundary, and hands back a
//! ready [`DirectorySession`] plus structured diagnostics.
//!
//! The facade never prints. Diagnostics travel as leveled [`CmdMessage`]s
//! and it is the client's job to render them (or not).
//!
//! ## Generic Over DoctorSource
//!
//! `DocfindApi<S: DoctorSource>` is generic over the record source:
//! - Production: `DocfindApi<RemoteSource>`
//! - Testing: `DocfindApi<StaticSource>`
//!
//! This keeps the whole load path testable without a network.

use crate::error::Result;
use crate::ingest;
use crate::session::DirectorySession;
use crate::source::DoctorSource;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A loaded directory: the session plus load-time diagnostics.
#[derive(Debug)]
pub struct LoadResult {
    pub session: DirectorySession,
    /// Records that failed validation. A non-zero count is a warning, not a
    /// failure; zero survivors never reaches here (that is an error).
    pub dropped: usize,
    pub messages: Vec<CmdMessage>,
}

/// The main API facade for docfind operations.
///
/// Generic over [`DoctorSource`] to allow different record sources. All UI
/// clients should interact through this facade.
pub struct DocfindApi<S: DoctorSource> {
    source: S,
}

impl<S: DoctorSource> DocfindApi<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch, validate, and build a session. The fetch happens exactly once
    /// per session; there is no refetch or retry path.
    pub fn load(&self, debounce_delay: Duration) -> Result<LoadResult> {
        let raw = self.source.fetch()?;
        let outcome = ingest::ingest(&raw)?;

        let mut messages = Vec::new();
        if outcome.dropped > 0 {
            messages.push(CmdMessage::warning(format!(
                "{} doctor record(s) were invalid and filtered out",
                outcome.dropped
            )));
        }

        Ok(LoadResult {
            session: DirectorySession::new(outcome.doctors, debounce_delay),
            dropped: outcome.dropped,
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocfindError;
    use crate::source::StaticSource;
    use serde_json::json;

    const NO_DELAY: Duration = Duration::from_millis(0);

    #[test]
    fn load_builds_a_session_from_valid_records() {
        let api = DocfindApi::new(StaticSource::new(json!([{
            "id": "1",
            "name": "Dr. Alok Sharma",
            "specialities": [{ "name": "Cardiology" }],
            "experience": "13",
            "fees": "₹500",
            "video_consult": true,
            "in_clinic": false
        }])));

        let result = api.load(NO_DELAY).unwrap();
        assert_eq!(result.dropped, 0);
        assert!(result.messages.is_empty());
        assert_eq!(result.session.doctors().len(), 1);
    }

    #[test]
    fn partial_drops_surface_as_a_warning() {
        let api = DocfindApi::new(StaticSource::new(json!([
            {
                "id": "1",
                "name": "Dr. Meera Nair",
                "specialities": [],
                "experience": "8",
                "fees": "300"
            },
            { "id": "broken" }
        ])));

        let result = api.load(NO_DELAY).unwrap();
        assert_eq!(result.dropped, 1);
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }

    #[test]
    fn all_invalid_payload_fails_the_load() {
        let api = DocfindApi::new(StaticSource::new(json!([{ "id": 1 }])));
        assert!(matches!(
            api.load(NO_DELAY),
            Err(DocfindError::AllRecordsInvalid)
        ));
    }

    #[test]
    fn non_array_body_fails_the_load() {
        let api = DocfindApi::new(StaticSource::new(json!("nope")));
        assert!(matches!(
            api.load(NO_DELAY),
            Err(DocfindError::MalformedResponse)
        ));
    }
}
