//! Reservation store
//!
//! A minimal record mapper over the `reservations` table. Handlers talk to
//! the [`ReservationStore`] trait so the storage engine can be substituted;
//! the production implementation is backed by an embedded SQLite file.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// A stored reservation record
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub message: Option<String>,
    pub lang: String,
    pub created_at: DateTime<Utc>,
}

/// The mutable field set of a reservation
///
/// Everything except `id` and `created_at`. Used verbatim for both create
/// and full-replace update.
#[derive(Clone, Debug)]
pub struct ReservationFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub message: Option<String>,
    pub lang: String,
}

/// Record-mapper capability set for reservation records
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Insert a new record, assigning a fresh id and `created_at`
    async fn create(&self, fields: ReservationFields) -> Result<i64, AppError>;

    /// Fetch a single record by id
    async fn get(&self, id: i64) -> Result<Option<Reservation>, AppError>;

    /// All records, newest first (ties broken by insertion order)
    async fn list(&self) -> Result<Vec<Reservation>, AppError>;

    /// Full replace of every mutable field; `false` when the id is absent
    async fn update(&self, id: i64, fields: ReservationFields) -> Result<bool, AppError>;

    /// Permanently remove a record; `false` when the id is absent
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

/// Open the SQLite pool described by the configuration
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the reservations table if it does not exist
pub async fn create_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            guests INTEGER NOT NULL,
            message TEXT,
            lang TEXT NOT NULL DEFAULT 'en',
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// SQLite-backed reservation store
pub struct SqliteReservationStore {
    pool: SqlitePool,
}

impl SqliteReservationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for SqliteReservationStore {
    async fn create(&self, fields: ReservationFields) -> Result<i64, AppError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO reservations (name, email, phone, date, time, guests, message, lang, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.date)
        .bind(&fields.time)
        .bind(fields.guests)
        .bind(&fields.message)
        .bind(&fields.lang)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "SELECT id, name, email, phone, date, time, guests, message, lang, created_at
             FROM reservations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    async fn list(&self) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT id, name, email, phone, date, time, guests, message, lang, created_at
             FROM reservations ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    async fn update(&self, id: i64, fields: ReservationFields) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE reservations
             SET name = ?, email = ?, phone = ?, date = ?, time = ?, guests = ?, message = ?, lang = ?
             WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.date)
        .bind(&fields.time)
        .bind(fields.guests)
        .bind(&fields.message)
        .bind(&fields.lang)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
