//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so services can be tested
//! against any backend.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{NewUser, User};

/// Trait defining the interface for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user and return the id assigned to it
    async fn store_user(&self, user: &NewUser) -> Result<i64>;

    /// Retrieve a specific user by ID
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;

    /// Retrieve a user by unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Number of stored users
    async fn count_users(&self) -> Result<i64>;

    /// Verify the backing store answers at all
    async fn ping(&self) -> Result<()>;
}
