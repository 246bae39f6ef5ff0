use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::simple::errors::SimpleError;
use crate::domain::simple::models::Simple;
use crate::domain::simple::models::SimpleId;
use crate::domain::simple::models::SimpleName;
use crate::domain::simple::ports::SimpleRepository;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserDirectory;

/// In-memory user directory.
///
/// Satisfies the same contract as the Postgres implementation, including
/// soft-deletion and the email uniqueness conflict signal, behind a RwLock.
/// Backs the integration tests so they run without a database.
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<i64, StoredUser>>,
    next_id: AtomicI64,
}

struct StoredUser {
    user: User,
    deleted: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed a user with a fixed identifier. Test setup only; the normal
    /// registration path is [`UserDirectory::create`].
    pub fn insert(&self, user: User) {
        let id = user.id.as_i64();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.users.write().unwrap().insert(
            id,
            StoredUser {
                user,
                deleted: false,
            },
        );
    }

    /// Soft-delete a user, making it absent from every lookup.
    pub fn mark_deleted(&self, id: UserId) {
        if let Some(stored) = self.users.write().unwrap().get_mut(&id.as_i64()) {
            stored.deleted = true;
        }
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users
            .get(&id.as_i64())
            .filter(|stored| !stored.deleted)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users
            .values()
            .find(|stored| !stored.deleted && stored.user.email.as_str() == email)
            .map(|stored| stored.user.clone()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().unwrap();

        // Uniqueness covers soft-deleted rows too, same as the database
        // constraint.
        if users
            .values()
            .any(|stored| stored.user.email.as_str() == new_user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };

        users.insert(
            user.id.as_i64(),
            StoredUser {
                user: user.clone(),
                deleted: false,
            },
        );

        Ok(user)
    }
}

/// In-memory simple repository with the same soft-deletion semantics as the
/// Postgres implementation.
pub struct InMemorySimpleRepository {
    simples: RwLock<HashMap<i64, StoredSimple>>,
    next_id: AtomicI64,
}

struct StoredSimple {
    simple: Simple,
    deleted: bool,
}

impl InMemorySimpleRepository {
    pub fn new() -> Self {
        Self {
            simples: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemorySimpleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SimpleRepository for InMemorySimpleRepository {
    async fn create(&self, name: SimpleName) -> Result<Simple, SimpleError> {
        let now = Utc::now();
        let simple = Simple {
            id: SimpleId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name,
            created_at: now,
            updated_at: now,
        };

        self.simples.write().unwrap().insert(
            simple.id.as_i64(),
            StoredSimple {
                simple: simple.clone(),
                deleted: false,
            },
        );

        Ok(simple)
    }

    async fn list(&self) -> Result<Vec<Simple>, SimpleError> {
        let simples = self.simples.read().unwrap();
        let mut live: Vec<Simple> = simples
            .values()
            .filter(|stored| !stored.deleted)
            .map(|stored| stored.simple.clone())
            .collect();

        // Newest first, matching the database ordering.
        live.sort_by(|a, b| (b.created_at, b.id.as_i64()).cmp(&(a.created_at, a.id.as_i64())));
        Ok(live)
    }

    async fn find_by_id(&self, id: SimpleId) -> Result<Option<Simple>, SimpleError> {
        let simples = self.simples.read().unwrap();
        Ok(simples
            .get(&id.as_i64())
            .filter(|stored| !stored.deleted)
            .map(|stored| stored.simple.clone()))
    }

    async fn update(&self, id: SimpleId, name: SimpleName) -> Result<Option<Simple>, SimpleError> {
        let mut simples = self.simples.write().unwrap();
        let Some(stored) = simples.get_mut(&id.as_i64()).filter(|s| !s.deleted) else {
            return Ok(None);
        };

        stored.simple.name = name;
        stored.simple.updated_at = Utc::now();
        Ok(Some(stored.simple.clone()))
    }

    async fn delete(&self, id: SimpleId) -> Result<bool, SimpleError> {
        let mut simples = self.simples.write().unwrap();
        match simples.get_mut(&id.as_i64()).filter(|s| !s.deleted) {
            Some(stored) => {
                stored.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
