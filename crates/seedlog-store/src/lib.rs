pub mod error;
mod lock;
pub mod paths;
pub mod recorder;
mod store;

pub use error::{Error, Result};
pub use paths::{expand_tilde, resolve_data_dir};
pub use recorder::{RecordOutcome, RecordRequest, SessionContext, record};
pub use store::{SessionLog, SessionStore, SessionSummary};
