//! User service implementation.

use crate::dto::{CreateUserRequest, UserResponse};
use crate::mappers::to_user_responses;
use crate::user_service::UserService;
use async_trait::async_trait;
use fitlog_core::{FitlogResult, User};
use fitlog_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service implementation.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn register(&self, request: CreateUserRequest) -> FitlogResult<UserResponse> {
        debug!("Registering user: {}", request.username);

        let user = User::new(request.username);
        let saved_user = self.user_repository.save(&user).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn list_users(&self) -> FitlogResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all().await?;
        Ok(to_user_responses(users))
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitlog_core::{FitlogError, UserId};
    use mockall::mock;
    use std::sync::Mutex;

    /// In-memory user repository for testing.
    struct InMemoryUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn save(&self, user: &User) -> FitlogResult<User> {
            self.users.lock().unwrap().push(user.clone());
            Ok(user.clone())
        }

        async fn find_by_id(&self, id: UserId) -> FitlogResult<Option<User>> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn find_all(&self) -> FitlogResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }
    }

    mock! {
        UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn save(&self, user: &User) -> FitlogResult<User>;
            async fn find_by_id(&self, id: UserId) -> FitlogResult<Option<User>>;
            async fn find_all(&self) -> FitlogResult<Vec<User>>;
        }
    }

    fn service() -> UserServiceImpl<InMemoryUserRepository> {
        UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()))
    }

    #[tokio::test]
    async fn test_register_assigns_fresh_id() {
        let service = service();

        let response = service
            .register(CreateUserRequest::new("fcc_test"))
            .await
            .unwrap();

        assert_eq!(response.username, "fcc_test");
        let users = service.list_users().await.unwrap();
        assert_eq!(users, vec![response]);
    }

    #[tokio::test]
    async fn test_register_allows_duplicate_and_empty_usernames() {
        let service = service();

        let a = service.register(CreateUserRequest::new("dup")).await.unwrap();
        let b = service.register(CreateUserRequest::new("dup")).await.unwrap();
        let c = service.register(CreateUserRequest::default()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(c.username, "");
        assert_eq!(service.list_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_users_keeps_registration_order() {
        let service = service();
        for name in ["zed", "amy", "kim"] {
            service.register(CreateUserRequest::new(name)).await.unwrap();
        }

        let names: Vec<String> = service
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();

        assert_eq!(names, vec!["zed", "amy", "kim"]);
    }

    #[tokio::test]
    async fn test_register_propagates_storage_failure() {
        let mut repo = MockUserRepo::new();
        repo.expect_save()
            .returning(|_| Err(FitlogError::Database("disk full".to_string())));

        let service = UserServiceImpl::new(Arc::new(repo));
        let err = service
            .register(CreateUserRequest::new("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, FitlogError::Database(_)));
    }

    #[tokio::test]
    async fn test_list_users_propagates_storage_failure() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Err(FitlogError::Database("locked".to_string())));

        let service = UserServiceImpl::new(Arc::new(repo));
        assert!(service.list_users().await.is_err());
    }
}
