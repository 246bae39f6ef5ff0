use std::sync::Arc;

use api_service::domain::auth::service::AuthService;
use api_service::domain::simple::service::SimpleService;
use api_service::domain::user::models::EmailAddress;
use api_service::domain::user::models::User;
use api_service::domain::user::models::UserId;
use api_service::inbound::http::router::create_router;
use api_service::repositories::InMemorySimpleRepository;
use api_service::repositories::InMemoryUserDirectory;
use auth::Claims;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub user_directory: Arc<InMemoryUserDirectory>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let user_directory = Arc::new(InMemoryUserDirectory::new());
        let simple_repository = Arc::new(InMemorySimpleRepository::new());

        let auth_service = Arc::new(AuthService::new(user_directory.clone(), TEST_SECRET, 24));
        let simple_service = Arc::new(SimpleService::new(simple_repository));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(auth_service, simple_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            user_directory,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Seed a user with a fixed identifier directly into the directory.
    pub fn seed_user(&self, id: i64, email: &str, password: &str) -> User {
        let password_hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash seed password");
        let now = Utc::now();
        let user = User {
            id: UserId(id),
            email: EmailAddress::new(email.to_string()).expect("Invalid seed email"),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.user_directory.insert(user.clone());
        user
    }

    /// Issue a one-hour token for a subject using the app's signing secret.
    pub fn token_for(&self, user_id: i64) -> String {
        self.jwt_handler
            .encode(&Claims::for_subject(user_id, Duration::hours(1)))
            .expect("Failed to encode test token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
