//! Database repositories
//!
//! Repositories encapsulate data access logic and provide a clean API for
//! business logic to interact with the database.

pub mod catalog;
pub mod voter;

pub use catalog::{CatalogRepository, CatalogRepositoryError};
pub use voter::{VoterRepository, VoterRepositoryError};
