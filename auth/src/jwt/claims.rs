use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Issued tokens always hold the numeric triple `{sub, iat, exp}`. All fields
/// are optional on the wire so inbound tokens with missing claims still
/// decode and can be rejected by the caller's own claim checks, instead of
/// failing opaquely inside the parser.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (numeric user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated subject with automatic expiration.
    ///
    /// # Arguments
    /// * `subject` - Numeric user identifier
    /// * `validity` - How long the token stays live from now
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_subject(subject: i64, validity: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject),
            iat: Some(now.timestamp()),
            exp: Some((now + validity).timestamp()),
        }
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: i64) -> Self {
        self.sub = Some(sub);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Check if the token is expired at `now`.
    ///
    /// A token is live only while `exp` lies strictly in the future; claims
    /// without `exp` never count as live.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp.map_or(true, |exp| exp <= now)
    }
}
