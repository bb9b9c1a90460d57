use crate::store::SessionStore;
use seedlog_types::{SeedRecord, SessionId};
use std::path::PathBuf;

/// Per-invocation session settings supplied by the caller.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// When false, recording performs no I/O at all.
    pub enabled: bool,
    /// Explicit session id; a timestamp-derived id is generated when absent.
    pub session_id: Option<SessionId>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            enabled: true,
            session_id: None,
        }
    }
}

/// One recording request: the seed plus its provenance.
#[derive(Debug, Clone)]
pub struct RecordRequest {
    pub seed: u64,
    pub source_label: String,
    pub notes: Option<String>,
    pub session: SessionContext,
}

/// What a recording call produced. The seed always passes through
/// unchanged; `log_path` is absent when recording was disabled or both the
/// primary and fallback appends failed.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub seed: u64,
    pub log_path: Option<PathBuf>,
    pub warning: Option<String>,
}

/// Record a seed observation without ever failing the caller.
///
/// Recording sits inline in generation workflows, so filesystem trouble is
/// absorbed here: the primary append is retried against a temp-directory
/// fallback store, and whatever went wrong is reported on the outcome and
/// stderr instead of as an `Err`.
pub fn record(store: &SessionStore, request: RecordRequest) -> RecordOutcome {
    if !request.session.enabled {
        return RecordOutcome {
            seed: request.seed,
            log_path: None,
            warning: None,
        };
    }

    let session_id = request
        .session
        .session_id
        .unwrap_or_else(SessionId::generate);
    let record = SeedRecord::new(request.seed, request.source_label, request.notes);

    match store.append(&session_id, &record) {
        Ok(path) => RecordOutcome {
            seed: request.seed,
            log_path: Some(path),
            warning: None,
        },
        Err(primary_err) => {
            let (log_path, warning) = match fallback_append(&session_id, &record) {
                Ok(path) => (
                    Some(path.clone()),
                    format!(
                        "seed log append failed ({}); recorded to fallback {}",
                        primary_err,
                        path.display()
                    ),
                ),
                Err(fallback_err) => (
                    None,
                    format!(
                        "seed log append failed ({}); fallback also failed ({})",
                        primary_err, fallback_err
                    ),
                ),
            };

            eprintln!("Warning: {}", warning);
            RecordOutcome {
                seed: request.seed,
                log_path,
                warning: Some(warning),
            }
        }
    }
}

fn fallback_append(session_id: &SessionId, record: &SeedRecord) -> crate::Result<PathBuf> {
    let store = SessionStore::open(&std::env::temp_dir().join("seedlog"))?;
    store.append(session_id, record)
}
