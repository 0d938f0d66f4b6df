use anyhow::{Context, Result};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("failed to create database {}", url))?
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("failed to connect to {}", url))?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Open (or create) the database file at `path`, creating its directory if needed
    pub async fn init(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                info!("Creating database directory {}", dir.display());
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
        }

        Self::new(&format!("sqlite:{}", path.display())).await
    }

    /// Open a private in-memory database, used by tests
    pub async fn init_in_memory() -> Result<Self> {
        // A unique name keeps concurrently running tests apart
        let db_id = uuid::Uuid::new_v4().simple().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", db_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT,
                phone TEXT,
                admission_date TEXT NOT NULL,
                admission_cancel_date TEXT,
                monthly_fee REAL NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await
        .context("failed to create students table")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS payments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_id INTEGER NOT NULL,
                paid_till TEXT NOT NULL,
                FOREIGN KEY (student_id) REFERENCES students (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await
        .context("failed to create payments table")?;

        // Latest-payment lookups scan a student's payments by paid_till
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_payments_student_paid_till
            ON payments(student_id, paid_till DESC);
            "#,
        )
        .execute(pool)
        .await
        .context("failed to create payments index")?;

        Ok(())
    }
}
