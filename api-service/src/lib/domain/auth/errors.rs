use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Login and signup failures.
///
/// Unknown email and wrong password collapse into the single
/// `InvalidCredentials` kind so responses cannot be used to enumerate
/// registered addresses.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("failed to process password")]
    PasswordHash(#[source] PasswordError),

    /// The signing secret is absent; issuing would produce an unverifiable
    /// token. Never bypassed silently.
    #[error("signing secret is not configured")]
    Configuration,

    #[error("failed to generate token")]
    TokenGeneration(#[source] JwtError),

    #[error("database error: {0}")]
    Database(String),
}

/// Rejection reasons of the request token gate, in gate order.
///
/// The display strings are the client-visible messages; they carry no detail
/// about which internal sub-check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenAuthError {
    #[error("authorization header required")]
    MissingHeader,

    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("invalid token")]
    InvalidToken,

    #[error("invalid token claims")]
    InvalidClaims,

    #[error("token expired")]
    Expired,

    #[error("invalid user id")]
    InvalidUserId,

    /// Directory failure while re-resolving the subject; an internal fault,
    /// not an authentication verdict.
    #[error("database error: {0}")]
    Directory(String),
}
