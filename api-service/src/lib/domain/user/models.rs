use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordValidationError;

/// User aggregate entity.
///
/// Owned by the user directory; the authentication flows only ever read it.
/// The password hash must never be serialized into a response.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier, assigned by the directory at creation and
/// immutable thereafter. Also the value carried in a token's `sub` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Get the identifier as a raw integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates format using an RFC 5322 compliant parser and normalizes to
/// lowercase, so every email entering signup, login, or storage agrees on
/// one case-insensitive policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password submitted at signup.
///
/// Ensures the password is 8 to 72 bytes before it reaches the hasher; the
/// upper bound matches the hashing layer's input cap so oversized input is a
/// caller error, not a primitive failure.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_BYTES: usize = 8;
    const MAX_BYTES: usize = auth::MAX_PASSWORD_BYTES;

    /// Create a validated password.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 bytes
    /// * `TooLong` - More than 72 bytes
    pub fn new(password: String) -> Result<Self, PasswordValidationError> {
        let length = password.len();
        if length < Self::MIN_BYTES {
            Err(PasswordValidationError::TooShort {
                min: Self::MIN_BYTES,
                actual: length,
            })
        } else if length > Self::MAX_BYTES {
            Err(PasswordValidationError::TooLong {
                max: Self::MAX_BYTES,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    /// Get the plaintext for hashing.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never expose the plaintext through Debug output or logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(\"[REDACTED]\")")
    }
}

/// Record handed to the directory when registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
}
