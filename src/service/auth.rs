//! Registration and login

use std::sync::Arc;

use validator::Validate;

use crate::config::ValidationConfig;
use crate::crypto;
use crate::domain::{LoginInput, RegisterInput, Role, User};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::repository::UserRepository;

pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    jwt_manager: JwtManager,
    validation: ValidationConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: Arc<U>, jwt_manager: JwtManager, validation: ValidationConfig) -> Self {
        Self {
            user_repo,
            jwt_manager,
            validation,
        }
    }

    /// Register a new user.
    ///
    /// The first user ever registered becomes Admin; everyone after that is
    /// a Customer. Duplicate emails are a conflict. Both rules are enforced
    /// by the store itself in `insert_unique`, so two racing registrations
    /// cannot both claim the same email or the bootstrap slot while one of
    /// them is still hashing.
    pub async fn register(&self, input: RegisterInput) -> Result<User> {
        if self.validation.enabled {
            input.validate()?;
        }

        let password_hash = crypto::hash_password(&input.password)?;
        let user = User::new(input.email, password_hash, Role::Customer);
        self.user_repo.insert_unique(user).await
    }

    /// Authenticate a user and issue an access token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller;
    /// both are expected outcomes, not faults.
    pub async fn login(&self, input: LoginInput) -> Result<String> {
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("Invalid email or password".to_string()))?;

        if !crypto::verify_password(&input.password, &user.password_hash) {
            return Err(AppError::Unauthenticated(
                "Invalid email or password".to_string(),
            ));
        }

        self.jwt_manager.issue(&user.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::repository::InMemoryUserRepository;

    fn service() -> AuthService<InMemoryUserRepository> {
        let jwt_manager = JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt-signing-must-be-long".to_string(),
            access_token_ttl_secs: 3600,
        });
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            jwt_manager,
            ValidationConfig::default(),
        )
    }

    fn service_with_repo() -> (Arc<AuthService<InMemoryUserRepository>>, Arc<InMemoryUserRepository>) {
        let jwt_manager = JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt-signing-must-be-long".to_string(),
            access_token_ttl_secs: 3600,
        });
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = Arc::new(AuthService::new(
            repo.clone(),
            jwt_manager,
            ValidationConfig::default(),
        ));
        (service, repo)
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: "secret1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_user_becomes_admin() {
        let service = service();
        let first = service.register(register_input("a@x.com")).await.unwrap();
        assert_eq!(first.role, Role::Admin);

        let second = service.register(register_input("b@x.com")).await.unwrap();
        assert_eq!(second.role, Role::Customer);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let service = service();
        service.register(register_input("a@x.com")).await.unwrap();
        let result = service.register(register_input("a@x.com")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_registration_of_same_email_has_one_winner() {
        let (service, repo) = service_with_repo();

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.register(register_input("a@x.com")).await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.register(register_input("a@x.com")).await }
        });
        let outcomes = [a.await.unwrap(), b.await.unwrap()];

        let wins = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);
        assert!(outcomes
            .iter()
            .any(|r| matches!(r, Err(AppError::Conflict(_)))));

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, Role::Admin);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_bootstrap_mints_exactly_one_admin() {
        let (service, repo) = service_with_repo();

        let a = tokio::spawn({
            let service = service.clone();
            async move { service.register(register_input("a@x.com")).await }
        });
        let b = tokio::spawn({
            let service = service.clone();
            async move { service.register(register_input("b@x.com")).await }
        });
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let admins = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|u| u.role == Role::Admin)
            .count();
        assert_eq!(admins, 1);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_when_validation_on() {
        let service = service();
        let result = service
            .register(RegisterInput {
                email: "not-an-email".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_validation_can_be_disabled() {
        let jwt_manager = JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt-signing-must-be-long".to_string(),
            access_token_ttl_secs: 3600,
        });
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            jwt_manager,
            ValidationConfig { enabled: false },
        );
        let result = service
            .register(RegisterInput {
                email: "not-an-email".to_string(),
                password: "x".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_login_roundtrip() {
        let service = service();
        service.register(register_input("a@x.com")).await.unwrap();

        let token = service
            .login(LoginInput {
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service();
        service.register(register_input("a@x.com")).await.unwrap();

        let result = service
            .login(LoginInput {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service = service();
        let result = service
            .login(LoginInput {
                email: "ghost@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }
}
