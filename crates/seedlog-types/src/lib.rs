pub mod error;
pub mod record;
pub mod session;
mod util;

pub use error::{Error, Result};
pub use record::SeedRecord;
pub use session::SessionId;
pub use util::*;
