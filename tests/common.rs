// tests/common.rs
//! Test utilities — temporary game databases and env wiring

use rusqlite::{params, Connection};
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway `flashpoint.sqlite` with the columns the exporter reads.
///
/// `id` is deliberately not a PRIMARY KEY so duplicate-id rows stay
/// representable (the real table has dirtier data than its schema admits).
pub struct TestGameDb {
    pub conn: Connection,
    dir: TempDir,
    db_path: PathBuf,
}

impl TestGameDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        let db_path = dir.path().join("flashpoint.sqlite");

        let conn = Connection::open(&db_path).expect("create test db");
        conn.execute_batch(
            r#"
            CREATE TABLE game (
                id INTEGER NOT NULL,
                title TEXT,
                playCounter INTEGER
            );
            "#,
        )
        .expect("create game table");

        // Point the exporter at this database for the duration of the test
        env::set_var("PCX_SOURCE_DB", db_path.to_str().unwrap());

        Self { conn, dir, db_path }
    }

    /// Insert one row; `None` leaves playCounter NULL.
    #[allow(dead_code)]
    pub fn insert_game(&self, id: i64, play_counter: Option<i64>) {
        self.conn
            .execute(
                "INSERT INTO game (id, title, playCounter) VALUES (?1, ?2, ?3)",
                params![id, format!("Game {id}"), play_counter],
            )
            .expect("insert game row");
    }

    /// Output location inside the tempdir — nothing leaks into the
    /// working directory.
    #[allow(dead_code)]
    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("games_played.json")
    }

    #[allow(dead_code)]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
