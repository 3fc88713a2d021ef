use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// The only error an implementation raises is [`UserError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// First user whose id matches
    async fn get(&self, id: &str) -> UserResult<User>;

    /// Append a user. The id is trusted to be unique.
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replace the user with the same id, keeping its position
    async fn update(&self, user: User) -> UserResult<User>;

    /// Remove the user with the given id
    async fn delete(&self, id: &str) -> UserResult<()>;
}

/// In-memory implementation of UserRepository
///
/// Users live in a `Vec` so listing preserves insertion order. Reads hold the
/// shared lock while cloning data out; writes hold the exclusive lock for the
/// whole scan. Clones share the same collection.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Store seeded with three sample users
    pub fn new() -> Self {
        Self::from_users(sample_users())
    }

    /// Store with no users
    pub fn empty() -> Self {
        Self::from_users(Vec::new())
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User::new("John Doe", "john@example.com"),
        User::new("Jane Smith", "jane@example.com"),
        User::new("Bob Johnson", "bob@example.com"),
    ]
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn get(&self, id: &str) -> UserResult<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;
        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| UserError::NotFound(user.id.clone()))?;
        *slot = user.clone();

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        let mut users = self.users.write().await;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        users.remove(index);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
