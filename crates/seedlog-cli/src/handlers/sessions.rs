use crate::types::OutputFormat;
use anyhow::Result;
use seedlog_store::SessionStore;

pub fn handle(store: &SessionStore, format: &OutputFormat) -> Result<()> {
    let sessions = store.list_sessions()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        OutputFormat::Plain => {
            if sessions.is_empty() {
                println!("No sessions found");
                return Ok(());
            }

            for session in &sessions {
                println!(
                    "{}  created {}  {} records  {}",
                    session.session_id,
                    session.created,
                    session.record_count,
                    session.path.display()
                );
            }
        }
    }

    Ok(())
}
