use std::sync::Arc;
use tracing::instrument;

use crate::error::{INVALID_USER_DATA, INVALID_USER_ID, UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Input checks run before the repository is touched. Not-found conditions
/// raised by the repository pass through unchanged.
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

    /// List all users in insertion order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> UserResult<User> {
        ensure_id(id)?;
        self.repository.get(id).await
    }

    /// Create a new user with a generated ID
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let user = User::new(input.name, input.email);

        if !user.is_valid() {
            return Err(UserError::Validation(INVALID_USER_DATA.to_string()));
        }

        self.repository.create(user).await
    }

    /// Replace the name and email of an existing user
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        ensure_id(id)?;

        if input.name.is_empty() || input.email.is_empty() {
            return Err(UserError::Validation(INVALID_USER_DATA.to_string()));
        }

        let mut user = self.repository.get(id).await?;
        user.update_name(input.name);
        user.update_email(input.email);

        self.repository.update(user).await
    }

    /// Delete an existing user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        ensure_id(id)?;

        // Existence check and removal take the lock separately; a concurrent
        // delete in between surfaces as the repository's own NotFound.
        self.repository.get(id).await?;
        self.repository.delete(id).await
    }
}

fn ensure_id(id: &str) -> UserResult<()> {
    if id.is_empty() {
        return Err(UserError::Validation(INVALID_USER_ID.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};

    fn sample_user() -> User {
        User::with_id("user-1", "John Doe", "john@example.com")
    }

    fn invalid_id() -> UserError {
        UserError::Validation(INVALID_USER_ID.to_string())
    }

    fn invalid_data() -> UserError {
        UserError::Validation(INVALID_USER_DATA.to_string())
    }

    #[tokio::test]
    async fn test_list_users_delegates_to_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![sample_user()]));

        let service = UserService::new(mock_repo);
        let users = service.list_users().await.unwrap();

        assert_eq!(users, vec![sample_user()]);
    }

    #[tokio::test]
    async fn test_get_user_with_empty_id_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get().never();

        let service = UserService::new(mock_repo);

        assert_eq!(service.get_user("").await, Err(invalid_id()));
    }

    #[tokio::test]
    async fn test_get_user_passes_not_found_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|id| Err(UserError::NotFound(id.to_string())));

        let service = UserService::new(mock_repo);

        assert_eq!(
            service.get_user("missing").await,
            Err(UserError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_create_user_generates_id_and_stores() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .withf(|user| user.name == "Alice" && user.email == "alice@example.com")
            .times(1)
            .returning(Ok);

        let service = UserService::new(mock_repo);
        let created = service
            .create_user(CreateUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();

        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_with_missing_fields_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);

        for (name, email) in [("", "a@example.com"), ("Alice", ""), ("", "")] {
            let result = service
                .create_user(CreateUser {
                    name: name.to_string(),
                    email: email.to_string(),
                })
                .await;
            assert_eq!(result, Err(invalid_data()));
        }
    }

    #[tokio::test]
    async fn test_update_user_rejects_bad_input_before_lookup() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get().never();
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let valid = UpdateUser {
            name: "New".to_string(),
            email: "new@example.com".to_string(),
        };

        assert_eq!(
            service.update_user("", valid.clone()).await,
            Err(invalid_id())
        );
        assert_eq!(
            service
                .update_user(
                    "user-1",
                    UpdateUser {
                        email: String::new(),
                        ..valid
                    }
                )
                .await,
            Err(invalid_data())
        );
    }

    #[tokio::test]
    async fn test_update_user_applies_new_fields() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Ok(sample_user()));
        mock_repo
            .expect_update()
            .withf(|user| {
                user.id == "user-1" && user.name == "Johnny" && user.email == "johnny@example.com"
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(mock_repo);
        let updated = service
            .update_user(
                "user-1",
                UpdateUser {
                    name: "Johnny".to_string(),
                    email: "johnny@example.com".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            User::with_id("user-1", "Johnny", "johnny@example.com")
        );
    }

    #[tokio::test]
    async fn test_update_missing_user_does_not_write() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .returning(|id| Err(UserError::NotFound(id.to_string())));
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let result = service
            .update_user(
                "ghost",
                UpdateUser {
                    name: "N".to_string(),
                    email: "e@example.com".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(UserError::NotFound("ghost".to_string())));
    }

    #[tokio::test]
    async fn test_delete_user_checks_existence_first() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .returning(|id| Err(UserError::NotFound(id.to_string())));
        mock_repo.expect_delete().never();

        let service = UserService::new(mock_repo);

        assert_eq!(
            service.delete_user("ghost").await,
            Err(UserError::NotFound("ghost".to_string()))
        );
        assert_eq!(service.delete_user("").await, Err(invalid_id()));
    }

    #[tokio::test]
    async fn test_update_user_surfaces_store_not_found_after_concurrent_delete() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Ok(sample_user()));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|user| Err(UserError::NotFound(user.id)));

        let service = UserService::new(mock_repo);
        let result = service
            .update_user(
                "user-1",
                UpdateUser {
                    name: "Johnny".to_string(),
                    email: "johnny@example.com".to_string(),
                },
            )
            .await;

        assert_eq!(result, Err(UserError::NotFound("user-1".to_string())));
    }

    #[tokio::test]
    async fn test_delete_user_surfaces_store_not_found_after_concurrent_delete() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Ok(sample_user()));
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|id| Err(UserError::NotFound(id.to_string())));

        let service = UserService::new(mock_repo);

        assert_eq!(
            service.delete_user("user-1").await,
            Err(UserError::NotFound("user-1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delete_user_removes_existing() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Ok(sample_user()));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let service = UserService::new(mock_repo);

        assert!(service.delete_user("user-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_alice_lifecycle_against_in_memory_store() {
        let service = UserService::new(InMemoryUserRepository::new());

        let alice = service
            .create_user(CreateUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(service.list_users().await.unwrap().len(), 4);

        let fetched = service.get_user(&alice.id).await.unwrap();
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.email, "alice@example.com");

        service.delete_user(&alice.id).await.unwrap();

        assert_eq!(
            service.get_user(&alice.id).await,
            Err(UserError::NotFound(alice.id.clone()))
        );
        assert_eq!(service.list_users().await.unwrap().len(), 3);
    }
}
