use crate::Result;
use crate::lock::FileLockGuard;
use chrono::Local;
use seedlog_types::{SeedRecord, SessionId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_PREFIX: &str = "seed_log_";
const LOG_EXTENSION: &str = "jsonl";
const LOGS_SUBDIR: &str = "seed_logs";

/// One discovered session log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    pub session_id: SessionId,
    /// Creation timestamp token embedded in the file name (`YYYYMMDD-HHMMSS`).
    pub created: String,
    pub path: PathBuf,
}

/// Session summary for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub created: String,
    pub record_count: usize,
    pub path: PathBuf,
}

/// File-backed store of session logs under `<data_dir>/seed_logs`.
///
/// Each session is one append-only JSONL file whose name embeds the session
/// id and a creation timestamp. Sessions are created implicitly on first
/// append; there is no deletion or compaction.
#[derive(Debug, Clone)]
pub struct SessionStore {
    output_dir: PathBuf,
}

impl SessionStore {
    /// Open the store rooted at `data_dir`, creating the logs directory
    /// if it does not exist yet.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let output_dir = data_dir.join(LOGS_SUBDIR);
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Append one record to the session's log, creating the log file on
    /// first use. The whole find-or-create-then-write runs under an
    /// exclusive per-session lock so concurrent appenders never interleave
    /// partial lines or split one session across two files.
    pub fn append(&self, session_id: &SessionId, record: &SeedRecord) -> Result<PathBuf> {
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(self.lock_path(session_id))?;
        let _lock = FileLockGuard::exclusive(lock_file)?;

        let path = match self.find_log(session_id)? {
            Some(log) => log.path,
            None => self.output_dir.join(log_file_name(
                session_id,
                &Local::now().format("%Y%m%d-%H%M%S").to_string(),
            )),
        };

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        writeln!(file, "{}", line)?;
        file.flush()?;

        Ok(path)
    }

    fn lock_path(&self, session_id: &SessionId) -> PathBuf {
        self.output_dir.join(format!(".{}.lock", session_id))
    }

    /// Find the log file for a session, if one exists. When multiple files
    /// carry the same session id the oldest one keeps receiving appends.
    pub fn find_log(&self, session_id: &SessionId) -> Result<Option<SessionLog>> {
        Ok(self.logs(Some(session_id))?.into_iter().next())
    }

    /// Enumerate session logs, optionally filtered to one session id.
    /// Sorted by file name so the order is deterministic across reads.
    pub fn logs(&self, session_id: Option<&SessionId>) -> Result<Vec<SessionLog>> {
        let mut logs = Vec::new();

        for entry in fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some((id, created)) = parse_log_name(name) else {
                continue;
            };
            if let Some(wanted) = session_id
                && &id != wanted
            {
                continue;
            }
            logs.push(SessionLog {
                session_id: id,
                created,
                path: entry.path(),
            });
        }

        logs.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(logs)
    }

    /// Read all records from one session log in insertion order.
    ///
    /// Lines that fail to parse are skipped with a warning so one corrupt
    /// line does not hide the rest of the session.
    pub fn read_records(&self, path: &Path) -> Result<Vec<SeedRecord>> {
        let text = fs::read_to_string(path)?;

        let mut records = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<SeedRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    eprintln!(
                        "Warning: Skipping malformed record in {}: {}",
                        path.display(),
                        e
                    );
                }
            }
        }

        Ok(records)
    }

    /// Summarize every known session: id, creation token, record count.
    pub fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        let mut summaries = Vec::new();

        for log in self.logs(None)? {
            let record_count = self.read_records(&log.path)?.len();
            summaries.push(SessionSummary {
                session_id: log.session_id,
                created: log.created,
                record_count,
                path: log.path,
            });
        }

        Ok(summaries)
    }
}

fn log_file_name(session_id: &SessionId, created: &str) -> String {
    format!("{}{}_{}.{}", LOG_PREFIX, session_id, created, LOG_EXTENSION)
}

/// Parse `seed_log_{session_id}_{YYYYMMDD-HHMMSS}.jsonl` back into its parts.
/// Session ids may contain underscores, so the creation token is taken from
/// the final underscore-separated segment and validated by shape.
fn parse_log_name(name: &str) -> Option<(SessionId, String)> {
    let stem = name
        .strip_prefix(LOG_PREFIX)?
        .strip_suffix(&format!(".{}", LOG_EXTENSION))?;

    let (id, created) = stem.rsplit_once('_')?;
    if id.is_empty() || !is_created_token(created) {
        return None;
    }

    Some((SessionId::new(id), created.to_string()))
}

fn is_created_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'-'
        && token
            .chars()
            .enumerate()
            .all(|(i, c)| i == 8 || c.is_ascii_digit())
}
