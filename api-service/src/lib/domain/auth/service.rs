use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::TokenAuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserDirectory;

/// Authentication service: credential validation, token issuance, signup,
/// and token authentication against the user directory.
///
/// Holds no cross-request mutable state; the signing secret is fixed at
/// construction and the directory manages its own concurrency.
pub struct AuthService {
    user_directory: Arc<dyn UserDirectory>,
    authenticator: Authenticator,
    token_validity: Duration,
}

impl AuthService {
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `user_directory` - User lookup/registration capability
    /// * `jwt_secret` - Signing secret (validated for length at startup)
    /// * `token_validity_hours` - Hours an issued token stays live
    pub fn new(
        user_directory: Arc<dyn UserDirectory>,
        jwt_secret: &[u8],
        token_validity_hours: i64,
    ) -> Self {
        Self {
            user_directory,
            authenticator: Authenticator::new(jwt_secret),
            token_validity: Duration::hours(token_validity_hours),
        }
    }

    /// Register a new user with a hashed password.
    ///
    /// # Errors
    /// * `PasswordHash` - Hashing primitive failed
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Database` - Directory insert failed
    pub async fn sign_up(&self, email: EmailAddress, password: Password) -> Result<User, AuthError> {
        let password_hash = self
            .authenticator
            .hash_password(password.as_str())
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                AuthError::PasswordHash(e)
            })?;

        let user = self
            .user_directory
            .create(NewUser {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserError::EmailAlreadyExists(email) => {
                    tracing::warn!(email = %email, "Signup failed - email already in use");
                    AuthError::EmailAlreadyExists(email)
                }
                other => {
                    tracing::error!(error = %other, "Failed to create user in directory");
                    AuthError::Database(other.to_string())
                }
            })?;

        tracing::debug!(user_id = %user.id, "User signup successful");
        Ok(user)
    }

    /// Look up the user by email and verify the submitted password.
    ///
    /// Unknown email and wrong password are indistinguishable to callers;
    /// both fail with `InvalidCredentials`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No live user with this email, or mismatch
    /// * `PasswordHash` - Stored hash is malformed
    /// * `Database` - Directory lookup failed
    pub async fn validate_credentials(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<User, AuthError> {
        let user = self
            .user_directory
            .find_by_email(email.as_str())
            .await
            .map_err(|e| AuthError::Database(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(email = %email, "Login failed - user not found");
                AuthError::InvalidCredentials
            })?;

        let is_valid = self
            .authenticator
            .verify_password(password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification failed");
                AuthError::PasswordHash(e)
            })?;

        if !is_valid {
            tracing::warn!(email = %email, "Login failed - invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Issue a signed bearer token for an authenticated user.
    ///
    /// Claims carry the user identifier as subject, issuance time, and an
    /// expiry one validity window later.
    ///
    /// # Errors
    /// * `Configuration` - Signing secret is empty
    /// * `TokenGeneration` - Signing primitive failed
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::for_subject(user.id.as_i64(), self.token_validity);

        self.authenticator.generate_token(&claims).map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Failed to generate token");
            match e {
                JwtError::MissingSecret => AuthError::Configuration,
                other => AuthError::TokenGeneration(other),
            }
        })
    }

    /// Validate credentials and issue a token in one step (the login flow).
    pub async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<(User, String), AuthError> {
        let user = self.validate_credentials(email, password).await?;
        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    /// Authenticate a bearer token and resolve its subject.
    ///
    /// The gates run strictly in order, each depending on the previous one:
    /// signature verification, claim shape, expiry, then subject
    /// re-resolution against the directory. The re-resolution rejects tokens
    /// for users deleted after issuance, at the cost of one lookup per
    /// request. The HTTP layer owns the preceding header-extraction gate.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, mis-signed, or non-HMAC token
    /// * `InvalidClaims` - `sub` or `exp` claim missing
    /// * `Expired` - `exp` is not strictly in the future
    /// * `InvalidUserId` - Subject does not resolve to a live user
    /// * `Directory` - Directory lookup failed
    pub async fn authenticate_token(
        &self,
        token: &str,
    ) -> Result<AuthenticatedUser, TokenAuthError> {
        let claims: Claims = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            TokenAuthError::InvalidToken
        })?;

        let Some(subject) = claims.sub else {
            return Err(TokenAuthError::InvalidClaims);
        };
        if claims.exp.is_none() {
            return Err(TokenAuthError::InvalidClaims);
        }

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenAuthError::Expired);
        }

        let user = self
            .user_directory
            .find_by_id(UserId(subject))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Directory lookup failed during token authentication");
                TokenAuthError::Directory(e.to_string())
            })?
            .ok_or_else(|| {
                tracing::warn!(subject, "Token subject does not resolve to a live user");
                TokenAuthError::InvalidUserId
            })?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            email: user.email.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtHandler;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::NewUser;

    const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserDirectory {}

        #[async_trait::async_trait]
        impl UserDirectory for TestUserDirectory {
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
        }
    }

    fn test_user(id: i64, email: &str, password_hash: &str) -> User {
        User {
            id: UserId(id),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service_with(directory: MockTestUserDirectory) -> AuthService {
        AuthService::new(Arc::new(directory), TEST_SECRET, 24)
    }

    #[tokio::test]
    async fn test_validate_credentials_success() {
        let hash = Authenticator::new(TEST_SECRET)
            .hash_password("pass_word!")
            .unwrap();
        let user = test_user(1, "test@example.com", &hash);

        let mut directory = MockTestUserDirectory::new();
        let returned = user.clone();
        directory
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = service_with(directory);

        let email = EmailAddress::new("test@example.com".to_string()).unwrap();
        let result = service.validate_credentials(&email, "pass_word!").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, UserId(1));
    }

    #[tokio::test]
    async fn test_validate_credentials_unknown_email() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(directory);

        let email = EmailAddress::new("missing@example.com".to_string()).unwrap();
        let result = service.validate_credentials(&email, "pass_word!").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_validate_credentials_wrong_password_same_error_kind() {
        let hash = Authenticator::new(TEST_SECRET)
            .hash_password("pass_word!")
            .unwrap();
        let user = test_user(1, "test@example.com", &hash);

        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service_with(directory);

        let email = EmailAddress::new("test@example.com".to_string()).unwrap();
        let result = service.validate_credentials(&email, "wrong_password").await;

        // Identical error kind to the unknown-email case.
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_up_hashes_password() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_create()
            .withf(|new_user| {
                new_user.email.as_str() == "new@example.com"
                    && new_user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: UserId(7),
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = service_with(directory);

        let result = service
            .sign_up(
                EmailAddress::new("new@example.com".to_string()).unwrap(),
                Password::new("pass_word!".to_string()).unwrap(),
            )
            .await;

        let user = result.unwrap();
        assert_eq!(user.id, UserId(7));
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_create().times(1).returning(|new_user| {
            Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ))
        });

        let service = service_with(directory);

        let result = service
            .sign_up(
                EmailAddress::new("taken@example.com".to_string()).unwrap(),
                Password::new("pass_word!".to_string()).unwrap(),
            )
            .await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_issue_token_roundtrip() {
        let user = test_user(1234567890, "test1@example.com", "$argon2id$irrelevant");

        let service = service_with(MockTestUserDirectory::new());
        let token = service.issue_token(&user).expect("Failed to issue token");

        let decoded: Claims = JwtHandler::new(TEST_SECRET).decode(&token).unwrap();
        assert_eq!(decoded.sub, Some(1234567890));
        assert_eq!(decoded.exp.unwrap() - decoded.iat.unwrap(), 86400);
    }

    #[tokio::test]
    async fn test_issue_token_with_empty_secret_is_configuration_error() {
        let user = test_user(1, "test@example.com", "$argon2id$irrelevant");

        let service = AuthService::new(Arc::new(MockTestUserDirectory::new()), b"", 24);
        let result = service.issue_token(&user);

        assert!(matches!(result, Err(AuthError::Configuration)));
    }

    #[tokio::test]
    async fn test_authenticate_token_success() {
        let user = test_user(1234567890, "test1@example.com", "$argon2id$irrelevant");

        let mut directory = MockTestUserDirectory::new();
        let returned = user.clone();
        directory
            .expect_find_by_id()
            .with(eq(UserId(1234567890)))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = service_with(directory);
        let token = service.issue_token(&user).unwrap();

        let identity = service.authenticate_token(&token).await.unwrap();
        assert_eq!(identity.user_id, UserId(1234567890));
        assert_eq!(identity.email, "test1@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_garbage() {
        let service = service_with(MockTestUserDirectory::new());

        let result = service.authenticate_token("invalid-token").await;
        assert_eq!(result, Err(TokenAuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_wrong_secret() {
        let service = service_with(MockTestUserDirectory::new());

        let foreign = JwtHandler::new(b"another-secret-key-of-sufficient-length!!");
        let token = foreign
            .encode(&Claims::for_subject(1, Duration::hours(1)))
            .unwrap();

        let result = service.authenticate_token(&token).await;
        assert_eq!(result, Err(TokenAuthError::InvalidToken));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_missing_sub() {
        let service = service_with(MockTestUserDirectory::new());

        let handler = JwtHandler::new(TEST_SECRET);
        let claims = Claims::new().with_expiration(Utc::now().timestamp() + 3600);
        let token = handler.encode(&claims).unwrap();

        let result = service.authenticate_token(&token).await;
        assert_eq!(result, Err(TokenAuthError::InvalidClaims));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_missing_exp() {
        let service = service_with(MockTestUserDirectory::new());

        let handler = JwtHandler::new(TEST_SECRET);
        let claims = Claims::new().with_subject(1);
        let token = handler.encode(&claims).unwrap();

        let result = service.authenticate_token(&token).await;
        assert_eq!(result, Err(TokenAuthError::InvalidClaims));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_expired() {
        // Subject would resolve fine; expiry must win first.
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_id().times(0);

        let service = service_with(directory);

        let handler = JwtHandler::new(TEST_SECRET);
        let claims = Claims::new()
            .with_subject(1)
            .with_expiration(Utc::now().timestamp() - 60);
        let token = handler.encode(&claims).unwrap();

        let result = service.authenticate_token(&token).await;
        assert_eq!(result, Err(TokenAuthError::Expired));
    }

    #[tokio::test]
    async fn test_authenticate_token_rejects_unknown_subject() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(directory);

        let handler = JwtHandler::new(TEST_SECRET);
        let token = handler
            .encode(&Claims::for_subject(2, Duration::hours(1)))
            .unwrap();

        let result = service.authenticate_token(&token).await;
        assert_eq!(result, Err(TokenAuthError::InvalidUserId));
    }

    #[tokio::test]
    async fn test_authenticate_token_directory_failure_is_not_a_verdict() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = service_with(directory);

        let handler = JwtHandler::new(TEST_SECRET);
        let token = handler
            .encode(&Claims::for_subject(1, Duration::hours(1)))
            .unwrap();

        let result = service.authenticate_token(&token).await;
        assert!(matches!(result, Err(TokenAuthError::Directory(_))));
    }

    #[tokio::test]
    async fn test_login_returns_user_and_token() {
        let hash = Authenticator::new(TEST_SECRET)
            .hash_password("pass_word!")
            .unwrap();
        let user = test_user(42, "login@example.com", &hash);

        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = service_with(directory);

        let email = EmailAddress::new("login@example.com".to_string()).unwrap();
        let (user, token) = service.login(&email, "pass_word!").await.unwrap();

        assert_eq!(user.id, UserId(42));
        let decoded: Claims = JwtHandler::new(TEST_SECRET).decode(&token).unwrap();
        assert_eq!(decoded.sub, Some(42));
    }
}
