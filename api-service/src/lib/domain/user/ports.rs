use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Directory of user accounts.
///
/// The capability the authentication flows consume: lookup by identifier,
/// lookup by email, and registration. Soft-deleted users are absent from
/// every lookup, so a token whose subject has been deleted resolves to
/// nothing.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve a live user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if absent or soft-deleted)
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a live user by email address.
    ///
    /// The email is matched against the directory's normalized form; callers
    /// pass values that went through [`EmailAddress`](crate::user::models::EmailAddress).
    ///
    /// # Returns
    /// Optional user entity (None if absent or soft-deleted)
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Register a new user and assign its identifier.
    ///
    /// # Returns
    /// Created user entity with directory-assigned id and timestamps
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - The email is already registered
    /// * `DatabaseError` - Insert failed
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
}
