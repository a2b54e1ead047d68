//! Repository Layer
//!
//! Data access abstractions and their SQLite implementations.

mod traits;
mod db;
mod account_repo;
mod profile_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection};
pub use account_repo::{Account, AccountRepository};
pub use profile_repo::ProfileRepository;
