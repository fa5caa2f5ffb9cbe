#![allow(dead_code)]

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use bookmark_api::{config::AppConfig, database::Database, AppState};

pub const PASSWORD: &str = "123";

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub db: Database,
}

/// Boot the real router on a free port against `DATABASE_URL`.
///
/// Returns `None` (and the calling test passes trivially) when no database is
/// configured, so `cargo test` stays usable without PostgreSQL.
pub async fn spawn_app() -> Result<Option<TestApp>> {
    let _ = dotenvy::dotenv();
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping database-backed test");
        return Ok(None);
    };

    let mut config = AppConfig::development();
    config.database.url = database_url;
    config.database.max_connections = 5;
    config.security.jwt_secret = "integration-test-secret".to_string();
    config.security.bcrypt_cost = 4;

    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to DATABASE_URL")?;
    db.ensure_schema().await.context("failed to prepare schema")?;

    let state = AppState::new(&config, db.clone())?;
    let app = bookmark_api::app(state, &config.security);

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    Ok(Some(TestApp {
        base_url: format!("http://{}", addr),
        client: Client::new(),
        db,
    }))
}

/// A fresh address per call so parallel tests never collide
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@email.com", prefix, uuid::Uuid::new_v4().simple())
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sign up a new account and return its bearer token
    pub async fn signup(&self, email: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/auth/signup"))
            .json(&json!({ "email": email, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "signup failed: {}", res.status());

        let body: Value = res.json().await?;
        body["access_token"]
            .as_str()
            .map(str::to_string)
            .context("signup response has no access_token")
    }

    pub async fn create_bookmark(&self, token: &str, title: &str) -> Result<Value> {
        let res = self
            .client
            .post(self.url("/bookmark"))
            .bearer_auth(token)
            .json(&json!({ "title": title, "link": "https://github.com/tokio-rs/axum" }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create failed: {}", res.status());
        Ok(res.json().await?)
    }
}
