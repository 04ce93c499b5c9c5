pub mod account;
pub mod history;
pub mod profile;

pub use account::{LoginInput, RegisterInput, User};
pub use history::ScanRecord;
pub use profile::{HealthProfile, HealthSummary, SaveProfileInput};

use sqlx::SqlitePool;

/// Write side of the user domain. Reads go through the free functions of
/// each module and take the read pool directly.
#[derive(Clone)]
pub struct Command {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }
}
