use async_trait::async_trait;

use crate::domain::simple::errors::SimpleError;
use crate::domain::simple::models::Simple;
use crate::domain::simple::models::SimpleId;
use crate::domain::simple::models::SimpleName;

/// Persistence operations for the simple resource.
///
/// Deletion is soft: deleted rows stay in storage but are absent from every
/// read, matching the user directory's policy.
#[async_trait]
pub trait SimpleRepository: Send + Sync + 'static {
    /// Persist a new record and assign its identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed
    async fn create(&self, name: SimpleName) -> Result<Simple, SimpleError>;

    /// Retrieve all live records, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn list(&self) -> Result<Vec<Simple>, SimpleError>;

    /// Retrieve a live record by identifier.
    ///
    /// # Returns
    /// Optional entity (None if absent or soft-deleted)
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn find_by_id(&self, id: SimpleId) -> Result<Option<Simple>, SimpleError>;

    /// Rename an existing record, refreshing its update timestamp.
    ///
    /// # Returns
    /// Updated entity, or None if absent or soft-deleted
    ///
    /// # Errors
    /// * `DatabaseError` - Update failed
    async fn update(&self, id: SimpleId, name: SimpleName) -> Result<Option<Simple>, SimpleError>;

    /// Soft-delete a record.
    ///
    /// # Returns
    /// True if a live record was deleted, false if none existed
    ///
    /// # Errors
    /// * `DatabaseError` - Update failed
    async fn delete(&self, id: SimpleId) -> Result<bool, SimpleError>;
}
