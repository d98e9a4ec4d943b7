//! Durable key-value store behind an injectable port
//!
//! The app persists a handful of named records (weight history, per-date
//! workout completion). The `Store` trait is the only thing the ledger and
//! completion tracker see, so tests run against `MemoryStore` while the app
//! runs against SQLite.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tauri::Manager;

use crate::catalog::PlanCatalog;

/// Application state managed by Tauri
pub struct AppState {
  pub store: Arc<dyn Store>,
  pub catalog: PlanCatalog,
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Storage path error: {0}")]
  Path(String),
}

impl Serialize for StoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Storage Port
/// ---------------------------------------------------------------------------

/// Get/set-by-key persistence. Values are serialized JSON blobs; the callers
/// own the schema of each record.
#[async_trait]
pub trait Store: Send + Sync {
  async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
  async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// ---------------------------------------------------------------------------
/// SQLite Backend
/// ---------------------------------------------------------------------------

/// SQLite-backed store: a single `store(key, value)` table
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  /// Open (or create) the app database and run migrations
  pub async fn connect(db_url: &str) -> Result<Self, StoreError> {
    let pool = SqlitePoolOptions::new()
      .max_connections(5)
      .connect(db_url)
      .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Self::new(pool))
  }
}

#[async_trait]
impl Store for SqliteStore {
  async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
    let value: Option<String> =
      sqlx::query_scalar("SELECT value FROM store WHERE key = ?1")
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
    Ok(value)
  }

  async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
    sqlx::query(
      r#"
      INSERT INTO store (key, value) VALUES (?1, ?2)
      ON CONFLICT(key) DO UPDATE SET value = excluded.value
      "#,
    )
    .bind(key)
    .bind(value)
    .execute(&self.pool)
    .await?;
    Ok(())
  }
}

/// Get the path to the database file
/// Stored in the platform app-data dir, e.g.
/// ~/Library/Application Support/com.victor.health-log/health-log.db
fn get_db_path<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
) -> Result<PathBuf, StoreError> {
  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| StoreError::Path(format!("Failed to get app data dir: {}", e)))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)
    .map_err(|e| StoreError::Path(e.to_string()))?;

  Ok(data_dir.join("health-log.db"))
}

/// Initialize the SQLite store for the running app
pub async fn initialize_store<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
) -> Result<SqliteStore, StoreError> {
  let db_path = get_db_path(app)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  println!("Initializing store at: {}", db_path.display());

  let store = SqliteStore::connect(&db_url).await?;

  println!("Store initialized successfully");

  Ok(store)
}

/// ---------------------------------------------------------------------------
/// In-Memory Backend
/// ---------------------------------------------------------------------------

/// In-memory store used as the test fake
#[derive(Default)]
pub struct MemoryStore {
  records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
    let records = self.records.lock().expect("store mutex poisoned");
    Ok(records.get(key).cloned())
  }

  async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
    let mut records = self.records.lock().expect("store mutex poisoned");
    records.insert(key.to_string(), value.to_string());
    Ok(())
  }
}
