pub mod accounts;
pub mod readings;

use crate::db::{accounts::Accounts, readings::Readings};

/// In-memory application state shared by the request handlers.
#[must_use]
pub struct Db {
    pub readings: Readings,
    pub accounts: Accounts,
}

impl Db {
    pub fn new(accounts: Accounts) -> Self {
        Self { readings: Readings::default(), accounts }
    }
}
