use crate::types::ExportFormat;
use anyhow::Result;
use seedlog_export::{ExportError, SessionSelector, export};
use seedlog_store::SessionStore;
use seedlog_types::SessionId;

pub fn handle(store: &SessionStore, session: Option<String>, format: ExportFormat) -> Result<()> {
    let selector = match session {
        Some(id) => SessionSelector::One(SessionId::new(id)),
        None => SessionSelector::All,
    };

    match export(store, &selector, format.into()) {
        Ok(artifact) => {
            println!(
                "Exported {} records to {}",
                artifact.record_count,
                artifact.path.display()
            );
            Ok(())
        }
        Err(ExportError::NoData(selector)) => {
            anyhow::bail!("No seed records found for {}", selector)
        }
        Err(e) => Err(e.into()),
    }
}
