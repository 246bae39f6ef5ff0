use crate::domain::user::models::UserId;

/// Identity attached to a request once the token gate passes.
///
/// Threaded through the request's extensions as a typed value; downstream
/// handlers read it instead of poking at claims or string-keyed context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}
