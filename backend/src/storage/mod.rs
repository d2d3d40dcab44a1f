//! # Storage Layer
//!
//! sqlite persistence behind the [`UserStorage`] trait, plus the schema
//! migrations applied by the migration worker.

pub mod migrations;
pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, UserRepository};
pub use traits::UserStorage;
