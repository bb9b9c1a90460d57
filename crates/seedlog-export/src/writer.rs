use crate::Result;
use seedlog_types::SeedRecord;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON array of record objects. Field names and timestamp
/// encoding come straight from the record's serde representation, so a JSON
/// export parses back into the same records.
pub fn write_json(path: &Path, records: &[SeedRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
    fs::write(path, json)?;
    Ok(())
}

/// CSV with a header row; the csv writer applies RFC 4180 quoting so notes
/// containing delimiters or quotes survive a round trip.
pub fn write_csv(path: &Path, records: &[SeedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["seed", "source_label", "notes", "timestamp"])?;

    for record in records {
        writer.write_record([
            record.seed.to_string(),
            record.source_label.clone(),
            record.notes.clone().unwrap_or_default(),
            record.timestamp.to_rfc3339(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// One human-readable line per record: timestamp, label, seed, then notes
/// when present.
pub fn write_text(path: &Path, records: &[SeedRecord]) -> Result<()> {
    let mut file = fs::File::create(path)?;

    for record in records {
        match &record.notes {
            Some(notes) => writeln!(
                file,
                "[{}] {} seed={} notes={}",
                record.timestamp.to_rfc3339(),
                record.source_label,
                record.seed,
                notes
            )?,
            None => writeln!(
                file,
                "[{}] {} seed={}",
                record.timestamp.to_rfc3339(),
                record.source_label,
                record.seed
            )?,
        }
    }

    Ok(())
}
