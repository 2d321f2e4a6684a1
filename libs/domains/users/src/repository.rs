use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
///
/// Implementations do no validation; they store what they are given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id ascending
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Persist a new user; the store assigns the id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Remove a user and return it
    ///
    /// Fails with [`UserError::NotFound`] when no row has this id.
    async fn delete(&self, id: i32) -> UserResult<User>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids start at 1 and are never reused, mirroring a SERIAL column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, input: NewUser) -> UserResult<User> {
        let mut state = self.state.write().await;

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserError::Internal("user id sequence exhausted".to_string()))?;
        state.last_id = id;

        let user = User {
            id,
            name: input.name,
            email: input.email,
        };
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: i32) -> UserResult<User> {
        let mut state = self.state.write().await;
        state.users.remove(&id).ok_or(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(new_user("Ana Torres", "ana@mail.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.email, "ana@mail.com");

        let fetched = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(repo.find_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for (name, email) in [("C", "c@x.io"), ("A", "a@x.io"), ("B", "b@x.io")] {
            repo.create(new_user(name, email)).await.unwrap();
        }

        let ids: Vec<i32> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(new_user("A", "a@x.io")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(new_user("B", "b@x.io")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_user() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(new_user("A", "a@x.io")).await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(repo.find_all().await.unwrap().is_empty());

        let again = repo.delete(created.id).await;
        assert!(matches!(again, Err(UserError::NotFound(id)) if id == created.id));
    }

    #[tokio::test]
    async fn test_duplicate_emails_allowed() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("A", "same@x.io")).await.unwrap();
        repo.create(new_user("B", "same@x.io")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
