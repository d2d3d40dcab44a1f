use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::models::{NewUser, User};
use crate::error::ApiError;
use crate::storage::UserStorage;

/// User lookups and registration on top of any [`UserStorage`]
#[derive(Clone)]
pub struct UserService {
    storage: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Find the user with exactly this id
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ApiError> {
        match self.storage.get_user(id).await? {
            Some(user) => Ok(user),
            None => {
                warn!("User {} not found", id);
                Err(ApiError::UserNotFound(id))
            }
        }
    }

    /// Insert `user` unless its username is already taken. Returns the stored
    /// user and whether it was created by this call.
    pub async fn ensure_user(&self, user: NewUser) -> Result<(User, bool), ApiError> {
        if let Some(existing) = self.storage.find_by_username(&user.username).await? {
            info!("User '{}' already exists with id {}", existing.username, existing.id);
            return Ok((existing, false));
        }

        let id = self.storage.store_user(&user).await?;
        info!("Created user '{}' with id {}", user.username, id);
        Ok((
            User {
                id,
                username: user.username,
                email: user.email,
            },
            true,
        ))
    }

    /// Readiness probe for the health endpoint
    pub async fn check_storage(&self) -> Result<(), ApiError> {
        self.storage
            .ping()
            .await
            .map_err(|e| ApiError::StorageUnavailable(e.to_string()))
    }
}
