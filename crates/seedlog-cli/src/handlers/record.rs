use crate::config::Config;
use anyhow::Result;
use seedlog_store::{RecordRequest, SessionContext, SessionStore, record};
use seedlog_types::SessionId;

const DEFAULT_LABEL: &str = "unknown_node";

/// Recording never fails the invocation: I/O trouble is absorbed by the
/// recorder and reported as a warning, and the seed is echoed regardless so
/// callers scripting around this command can keep using it.
pub fn handle(
    store: &SessionStore,
    config: &Config,
    seed: u64,
    label: Option<String>,
    notes: Option<String>,
    session: Option<String>,
    disabled: bool,
) -> Result<()> {
    let label = label
        .or_else(|| config.default_label.clone())
        .unwrap_or_else(|| DEFAULT_LABEL.to_string());
    let session_id = session
        .or_else(|| config.default_session.clone())
        .map(SessionId::new);

    let outcome = record(
        store,
        RecordRequest {
            seed,
            source_label: label,
            notes,
            session: SessionContext {
                enabled: !disabled,
                session_id,
            },
        },
    );

    match outcome.log_path {
        Some(path) => println!("Recorded seed {} to {}", outcome.seed, path.display()),
        None if disabled => println!("Recording disabled; seed {} passed through", outcome.seed),
        None => println!("Seed {} passed through (recording failed)", outcome.seed),
    }

    Ok(())
}
