use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every user, ordered by id
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a user after the required-field and email checks
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let new_user = input.into_new_user()?;
        let user = self.repository.create(new_user).await?;

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    /// Delete a user; ids below 1 are rejected without touching the store
    pub async fn delete_user(&self, id: i32) -> UserResult<User> {
        if id <= 0 {
            return Err(UserError::InvalidId(id));
        }

        let user = self.repository.delete(id).await?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(user)
    }
}
