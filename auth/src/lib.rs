//! Authentication primitives library
//!
//! Provides the building blocks the API service composes into its login and
//! request-authentication flows:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HS256)
//! - An authenticator facade bundling both behind one secret
//!
//! The service defines its own domain-level error taxonomy and gate ordering;
//! this crate stays free of HTTP and persistence concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject(42, Duration::hours(24));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, Some(42));
//! ```
//!
//! ## Credential Verification
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the submitted password, then issue a token
//! assert!(auth.verify_password("password123", &hash).unwrap());
//! let claims = Claims::for_subject(42, Duration::hours(24));
//! let token = auth.generate_token(&claims).unwrap();
//!
//! // Request authentication: verify and decode the token
//! let decoded: Claims = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.sub, Some(42));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::MAX_PASSWORD_BYTES;
