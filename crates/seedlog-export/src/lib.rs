//! Export engine: reads session logs through `seedlog-store` and writes a
//! single artifact in the requested format. Per-session insertion order is
//! preserved; sessions are concatenated in deterministic (file name) order.

mod writer;

use chrono::Local;
use seedlog_store::{SessionLog, SessionStore};
use seedlog_types::{SeedRecord, SessionId};
use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    /// No records matched the selector; no artifact was written.
    NoData(String),
    Io(std::io::Error),
    Store(seedlog_store::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoData(selector) => {
                write!(f, "No seed records found for {}", selector)
            }
            ExportError::Io(err) => write!(f, "IO error: {}", err),
            ExportError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Store(err) => Some(err),
            ExportError::NoData(_) => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<seedlog_store::Error> for ExportError {
    fn from(err: seedlog_store::Error) -> Self {
        ExportError::Store(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Io(std::io::Error::other(err))
    }
}

/// Which sessions an export covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSelector {
    One(SessionId),
    All,
}

impl SessionSelector {
    fn file_token(&self) -> &str {
        match self {
            SessionSelector::One(id) => id.as_str(),
            SessionSelector::All => "all",
        }
    }
}

impl fmt::Display for SessionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionSelector::One(id) => write!(f, "session {}", id),
            SessionSelector::All => write!(f, "all sessions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A written export file.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub record_count: usize,
}

/// Export all records matching `selector` into one artifact next to the
/// session logs. Fails with `NoData` before touching the filesystem when
/// nothing matches, so an empty export never leaves a file behind.
pub fn export(
    store: &SessionStore,
    selector: &SessionSelector,
    format: ExportFormat,
) -> Result<ExportArtifact> {
    let records = collect_records(store, selector)?;

    if records.is_empty() {
        return Err(ExportError::NoData(selector.to_string()));
    }

    let path = store.output_dir().join(format!(
        "seed_export_{}_{}.{}",
        selector.file_token(),
        Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    ));

    match format {
        ExportFormat::Json => writer::write_json(&path, &records)?,
        ExportFormat::Csv => writer::write_csv(&path, &records)?,
        ExportFormat::Txt => writer::write_text(&path, &records)?,
    }

    Ok(ExportArtifact {
        path,
        format,
        record_count: records.len(),
    })
}

fn collect_records(store: &SessionStore, selector: &SessionSelector) -> Result<Vec<SeedRecord>> {
    let logs: Vec<SessionLog> = match selector {
        SessionSelector::One(id) => store.logs(Some(id))?,
        SessionSelector::All => store.logs(None)?,
    };

    let mut records = Vec::new();
    for log in &logs {
        records.extend(store.read_records(&log.path)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedlog_types::SeedRecord;
    use std::fs;
    use tempfile::TempDir;

    fn seeded_store(session: &str, count: u64) -> (TempDir, SessionStore) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let id = SessionId::new(session);
        for seed in 0..count {
            let notes = (seed % 2 == 0).then(|| format!("pass {}, retry", seed));
            store
                .append(&id, &SeedRecord::new(seed, "ksampler", notes))
                .unwrap();
        }
        (dir, store)
    }

    #[test]
    fn test_json_export_round_trips_all_records() {
        let (_dir, store) = seeded_store("json_rt", 5);
        let selector = SessionSelector::One(SessionId::new("json_rt"));

        let artifact = export(&store, &selector, ExportFormat::Json).unwrap();
        assert_eq!(artifact.record_count, 5);

        let text = fs::read_to_string(&artifact.path).unwrap();
        let parsed: Vec<SeedRecord> = serde_json::from_str(&text).unwrap();

        let log = store.find_log(&SessionId::new("json_rt")).unwrap().unwrap();
        let original = store.read_records(&log.path).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_csv_export_preserves_order_and_quoting() {
        let (_dir, store) = seeded_store("csv_q", 4);
        let selector = SessionSelector::One(SessionId::new("csv_q"));

        let artifact = export(&store, &selector, ExportFormat::Csv).unwrap();
        let mut reader = csv::Reader::from_path(&artifact.path).unwrap();

        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["seed", "source_label", "notes", "timestamp"])
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.get(0).unwrap(), i.to_string());
            if i % 2 == 0 {
                // Notes containing commas must survive CSV quoting.
                assert_eq!(row.get(2).unwrap(), format!("pass {}, retry", i));
            } else {
                assert_eq!(row.get(2).unwrap(), "");
            }
        }
    }

    #[test]
    fn test_txt_export_one_line_per_record() {
        let (_dir, store) = seeded_store("txt_s", 3);
        let selector = SessionSelector::One(SessionId::new("txt_s"));

        let artifact = export(&store, &selector, ExportFormat::Txt).unwrap();
        let text = fs::read_to_string(&artifact.path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ksampler"));
        assert!(lines[0].contains("seed=0"));
        // Odd records carry no notes and the notes column is omitted.
        assert!(!lines[1].contains("notes="));
        assert!(lines[2].contains("notes="));
    }

    #[test]
    fn test_no_data_writes_no_artifact() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        let selector = SessionSelector::One(SessionId::new("missing"));

        let err = export(&store, &selector, ExportFormat::Json).unwrap_err();
        assert!(matches!(err, ExportError::NoData(_)));

        let leftovers: Vec<_> = fs::read_dir(store.output_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("seed_export"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_all_sessions_merges_in_session_order() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        for session in ["alpha", "beta"] {
            let id = SessionId::new(session);
            for seed in 0..2u64 {
                store
                    .append(&id, &SeedRecord::new(seed, session, None))
                    .unwrap();
            }
        }

        let artifact = export(&store, &SessionSelector::All, ExportFormat::Json).unwrap();
        assert_eq!(artifact.record_count, 4);

        let parsed: Vec<SeedRecord> =
            serde_json::from_str(&fs::read_to_string(&artifact.path).unwrap()).unwrap();
        let labels: Vec<&str> = parsed.iter().map(|r| r.source_label.as_str()).collect();
        assert_eq!(labels, ["alpha", "alpha", "beta", "beta"]);
    }

    #[test]
    fn test_export_skips_malformed_lines() {
        use std::io::Write;

        let (_dir, store) = seeded_store("dirty", 2);
        let log = store.find_log(&SessionId::new("dirty")).unwrap().unwrap();
        let mut file = fs::OpenOptions::new().append(true).open(&log.path).unwrap();
        writeln!(file, "garbage line").unwrap();

        let selector = SessionSelector::One(SessionId::new("dirty"));
        let artifact = export(&store, &selector, ExportFormat::Json).unwrap();
        assert_eq!(artifact.record_count, 2);
    }
}
