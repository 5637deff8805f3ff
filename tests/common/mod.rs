//! Helpers for integration tests.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};
use lostfound_matcher::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

// DDL as emitted by the reporting application's ORM.
const CREATE_ITEM: &str = "CREATE TABLE item (
    id INTEGER NOT NULL,
    title VARCHAR(100) NOT NULL,
    description TEXT NOT NULL,
    category VARCHAR(50),
    image VARCHAR(200),
    location VARCHAR(100) NOT NULL,
    date DATETIME,
    contact VARCHAR(100) NOT NULL,
    reporter_name VARCHAR(100) NOT NULL,
    type VARCHAR(10) NOT NULL,
    status VARCHAR(20),
    PRIMARY KEY (id)
)";

/// Temporary database with the `item` table used in integration tests.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

/// Minimal item row for seeding.
pub struct SeedItem<'a> {
    pub id: i32,
    pub title: &'a str,
    pub description: &'a str,
    pub date: Option<&'a str>,
    pub kind: &'a str,
    pub status: Option<&'a str>,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir.");
        let path = dir.path().join("items.db");
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        diesel::sql_query(CREATE_ITEM)
            .execute(&mut conn)
            .expect("Failed to create item table.");
        TestDb { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn insert(&self, item: SeedItem<'_>) {
        let mut conn = self.pool.get().expect("connection");
        diesel::sql_query(
            "INSERT INTO item (id, title, description, location, date, contact, reporter_name, type, status)
             VALUES (?, ?, ?, 'Campus', ?, '555-0000', 'Tester', ?, ?)",
        )
        .bind::<Integer, _>(item.id)
        .bind::<Text, _>(item.title)
        .bind::<Text, _>(item.description)
        .bind::<Nullable<Text>, _>(item.date)
        .bind::<Text, _>(item.kind)
        .bind::<Nullable<Text>, _>(item.status)
        .execute(&mut conn)
        .expect("Failed to insert item.");
    }
}
