use std::sync::Arc;

use crate::domain::simple::errors::SimpleError;
use crate::domain::simple::models::Simple;
use crate::domain::simple::models::SimpleId;
use crate::domain::simple::models::SimpleName;
use crate::domain::simple::ports::SimpleRepository;

/// Domain service for the simple resource.
pub struct SimpleService {
    repository: Arc<dyn SimpleRepository>,
}

impl SimpleService {
    /// Create a new simple service with an injected repository.
    pub fn new(repository: Arc<dyn SimpleRepository>) -> Self {
        Self { repository }
    }

    /// Create a new record.
    pub async fn create_simple(&self, name: SimpleName) -> Result<Simple, SimpleError> {
        let simple = self.repository.create(name).await?;
        tracing::debug!(simple_id = %simple.id, "Simple created successfully");
        Ok(simple)
    }

    /// Retrieve all live records.
    pub async fn get_all_simples(&self) -> Result<Vec<Simple>, SimpleError> {
        self.repository.list().await
    }

    /// Retrieve a record by identifier.
    ///
    /// # Errors
    /// * `NotFound` - No live record with this identifier
    pub async fn get_simple(&self, id: SimpleId) -> Result<Simple, SimpleError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SimpleError::NotFound(id.as_i64()))
    }

    /// Rename an existing record.
    ///
    /// # Errors
    /// * `NotFound` - No live record with this identifier
    pub async fn update_simple(
        &self,
        id: SimpleId,
        name: SimpleName,
    ) -> Result<Simple, SimpleError> {
        let updated = self
            .repository
            .update(id, name)
            .await?
            .ok_or(SimpleError::NotFound(id.as_i64()))?;

        tracing::debug!(simple_id = %updated.id, "Simple updated successfully");
        Ok(updated)
    }

    /// Soft-delete a record.
    ///
    /// # Errors
    /// * `NotFound` - No live record with this identifier
    pub async fn delete_simple(&self, id: SimpleId) -> Result<(), SimpleError> {
        if !self.repository.delete(id).await? {
            return Err(SimpleError::NotFound(id.as_i64()));
        }

        tracing::debug!(simple_id = %id, "Simple deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestSimpleRepository {}

        #[async_trait::async_trait]
        impl SimpleRepository for TestSimpleRepository {
            async fn create(&self, name: SimpleName) -> Result<Simple, SimpleError>;
            async fn list(&self) -> Result<Vec<Simple>, SimpleError>;
            async fn find_by_id(&self, id: SimpleId) -> Result<Option<Simple>, SimpleError>;
            async fn update(&self, id: SimpleId, name: SimpleName) -> Result<Option<Simple>, SimpleError>;
            async fn delete(&self, id: SimpleId) -> Result<bool, SimpleError>;
        }
    }

    fn test_simple(id: i64, name: &str) -> Simple {
        Simple {
            id: SimpleId(id),
            name: SimpleName::new(name.to_string()).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_simple_not_found() {
        let mut repository = MockTestSimpleRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = SimpleService::new(Arc::new(repository));

        let result = service.get_simple(SimpleId(99)).await;
        assert!(matches!(result, Err(SimpleError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_simple_not_found() {
        let mut repository = MockTestSimpleRepository::new();
        repository.expect_update().times(1).returning(|_, _| Ok(None));

        let service = SimpleService::new(Arc::new(repository));

        let result = service
            .update_simple(SimpleId(99), SimpleName::new("renamed".to_string()).unwrap())
            .await;
        assert!(matches!(result, Err(SimpleError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_simple_not_found() {
        let mut repository = MockTestSimpleRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(false));

        let service = SimpleService::new(Arc::new(repository));

        let result = service.delete_simple(SimpleId(99)).await;
        assert!(matches!(result, Err(SimpleError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_create_and_get_simple() {
        let mut repository = MockTestSimpleRepository::new();
        repository
            .expect_create()
            .withf(|name| name.as_str() == "widget")
            .times(1)
            .returning(|name| Ok(test_simple(1, name.as_str())));
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(Some(test_simple(1, "widget"))));

        let service = SimpleService::new(Arc::new(repository));

        let created = service
            .create_simple(SimpleName::new("widget".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(created.id, SimpleId(1));

        let fetched = service.get_simple(SimpleId(1)).await.unwrap();
        assert_eq!(fetched.name.as_str(), "widget");
    }
}
