use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::simple::errors::SimpleError;
use crate::domain::simple::models::Simple;
use crate::domain::simple::models::SimpleId;
use crate::domain::simple::models::SimpleName;
use crate::domain::simple::ports::SimpleRepository;

/// Database-backed simple repository with soft deletion.
pub struct PostgresSimpleRepository {
    pool: PgPool,
}

impl PostgresSimpleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SimpleRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SimpleRow {
    fn try_into_simple(self) -> Result<Simple, SimpleError> {
        Ok(Simple {
            id: SimpleId(self.id),
            name: SimpleName::new(self.name)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl SimpleRepository for PostgresSimpleRepository {
    async fn create(&self, name: SimpleName) -> Result<Simple, SimpleError> {
        let row = sqlx::query_as::<_, SimpleRow>(
            r#"
            INSERT INTO simples (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| SimpleError::DatabaseError(e.to_string()))?;

        row.try_into_simple()
    }

    async fn list(&self) -> Result<Vec<Simple>, SimpleError> {
        let rows = sqlx::query_as::<_, SimpleRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM simples
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SimpleError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SimpleRow::try_into_simple).collect()
    }

    async fn find_by_id(&self, id: SimpleId) -> Result<Option<Simple>, SimpleError> {
        let row = sqlx::query_as::<_, SimpleRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM simples
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SimpleError::DatabaseError(e.to_string()))?;

        row.map(SimpleRow::try_into_simple).transpose()
    }

    async fn update(&self, id: SimpleId, name: SimpleName) -> Result<Option<Simple>, SimpleError> {
        let row = sqlx::query_as::<_, SimpleRow>(
            r#"
            UPDATE simples
            SET name = $2, updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SimpleError::DatabaseError(e.to_string()))?;

        row.map(SimpleRow::try_into_simple).transpose()
    }

    async fn delete(&self, id: SimpleId) -> Result<bool, SimpleError> {
        let result = sqlx::query(
            r#"
            UPDATE simples
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| SimpleError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
