use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::sanitize_component;

/// Identifier grouping seed records into one session.
///
/// User-supplied ids are sanitized for filesystem safety since the id is
/// embedded in the session log file name. Auto-generated ids are derived
/// from the local time at creation (`YYYYMMDD_HHMMSS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(sanitize_component(&id.into()))
    }

    /// Generate a session id from the current local time.
    pub fn generate() -> Self {
        Self(Local::now().format("%Y%m%d_%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizes_path_separators() {
        let id = SessionId::new("../etc/passwd");
        assert_eq!(id.as_str(), ".._etc_passwd");
    }

    #[test]
    fn test_generated_id_shape() {
        let id = SessionId::generate();
        assert_eq!(id.as_str().len(), 15);
        assert_eq!(&id.as_str()[8..9], "_");
    }

    #[test]
    fn test_transparent_serde() {
        let id = SessionId::new("batch_42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"batch_42\"");
    }
}
