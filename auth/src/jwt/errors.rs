use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    /// The signing secret was empty at construction time. Encoding refuses
    /// to run rather than produce a token signed with a worthless key.
    #[error("Signing secret is not configured")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Covers every parse, algorithm, and signature failure uniformly so
    /// callers cannot surface which sub-check rejected the token.
    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),
}
