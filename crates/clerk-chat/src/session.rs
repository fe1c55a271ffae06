//! Session logger: SQLite persistence of chat turns.
//!
//! Stores sessions, messages (with JSON metadata on bot turns), and the
//! search log. Wraps a single rusqlite Connection in a Mutex since the
//! connection is not Sync.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;
use uuid::Uuid;

use crate::error::ChatError;
use crate::types::{ChatMessageRecord, ChatSessionRecord, MessageRole, SearchRecord};

/// Thread-safe store for chat sessions, messages, and search queries.
pub struct SessionStore {
    conn: Mutex<Connection>,
}

impl SessionStore {
    /// Open (or create) a session database at the given path.
    pub fn open(path: &Path) -> Result<Self, ChatError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ChatError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(path)
            .map_err(|e| ChatError::Storage(format!("Failed to open database: {}", e)))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;",
        )
        .map_err(|e| ChatError::Storage(format!("Failed to set pragmas: {}", e)))?;

        info!("Session database opened at {}", path.display());

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.with_conn(run_migrations)?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ChatError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ChatError::Storage(format!("Failed to open in-memory db: {}", e)))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| ChatError::Storage(format!("Failed to set pragmas: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.with_conn(run_migrations)?;
        Ok(store)
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, ChatError>
    where
        F: FnOnce(&Connection) -> Result<T, ChatError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ChatError::Storage(format!("Database lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Fetch the active session for a session key, creating one if absent.
    pub fn get_or_create_session(&self, session_key: &str) -> Result<ChatSessionRecord, ChatError> {
        self.with_conn(|conn| {
            let existing = conn
                .query_row(
                    "SELECT id, session_key, created_at, updated_at, is_active
                     FROM chat_sessions
                     WHERE session_key = ?1 AND is_active = 1
                     ORDER BY updated_at DESC
                     LIMIT 1",
                    params![session_key],
                    map_session_row,
                )
                .optional()
                .map_err(|e| ChatError::Storage(format!("Session lookup: {}", e)))?;

            if let Some(session) = existing {
                return Ok(session);
            }

            let now = Utc::now().timestamp();
            let id = Uuid::new_v4();
            conn.execute(
                "INSERT INTO chat_sessions (id, session_key, created_at, updated_at, is_active)
                 VALUES (?1, ?2, ?3, ?3, 1)",
                params![id.to_string(), session_key, now],
            )
            .map_err(|e| ChatError::Storage(format!("Session insert: {}", e)))?;

            Ok(ChatSessionRecord {
                id,
                session_key: session_key.to_string(),
                created_at: now,
                updated_at: now,
                is_active: true,
            })
        })
    }

    /// Fetch a session by id.
    pub fn get_session(&self, id: Uuid) -> Result<Option<ChatSessionRecord>, ChatError> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, session_key, created_at, updated_at, is_active
                 FROM chat_sessions WHERE id = ?1",
                params![id.to_string()],
                map_session_row,
            )
            .optional()
            .map_err(|e| ChatError::Storage(format!("Session lookup: {}", e)))
        })
    }

    /// Append one message to a session and bump its updated_at.
    pub fn append_message(
        &self,
        session_id: Uuid,
        role: MessageRole,
        content: &str,
        metadata: Option<&str>,
    ) -> Result<Uuid, ChatError> {
        self.with_conn(|conn| {
            let now = Utc::now().timestamp();
            let id = Uuid::new_v4();
            conn.execute(
                "INSERT INTO chat_messages (id, session_id, role, content, metadata, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id.to_string(),
                    session_id.to_string(),
                    role.as_str(),
                    content,
                    metadata,
                    now
                ],
            )
            .map_err(|e| ChatError::Storage(format!("Message insert: {}", e)))?;

            conn.execute(
                "UPDATE chat_sessions SET updated_at = ?1 WHERE id = ?2",
                params![now, session_id.to_string()],
            )
            .map_err(|e| ChatError::Storage(format!("Session touch: {}", e)))?;

            Ok(id)
        })
    }

    /// The earliest `limit` messages of a session, in chronological order.
    pub fn recent_messages(
        &self,
        session_id: Uuid,
        limit: usize,
    ) -> Result<Vec<ChatMessageRecord>, ChatError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, session_id, role, content, metadata, created_at
                     FROM chat_messages
                     WHERE session_id = ?1
                     ORDER BY created_at ASC, rowid ASC
                     LIMIT ?2",
                )
                .map_err(|e| ChatError::Storage(format!("Message query prepare: {}", e)))?;

            let rows = stmt
                .query_map(params![session_id.to_string(), limit as i64], |row| {
                    let id: String = row.get(0)?;
                    let session: String = row.get(1)?;
                    let role: String = row.get(2)?;
                    Ok(ChatMessageRecord {
                        id: parse_uuid(&id, 0)?,
                        session_id: parse_uuid(&session, 1)?,
                        role: MessageRole::parse(&role).unwrap_or(MessageRole::System),
                        content: row.get(3)?,
                        metadata: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                })
                .map_err(|e| ChatError::Storage(format!("Message query: {}", e)))?;

            let mut messages = Vec::new();
            for row in rows {
                messages.push(row.map_err(|e| ChatError::Storage(e.to_string()))?);
            }
            Ok(messages)
        })
    }

    /// Record a search turn: the query text and how many products came back.
    pub fn log_search(
        &self,
        session_id: Uuid,
        query: &str,
        results_count: u32,
    ) -> Result<(), ChatError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO search_queries (session_id, query, results_count, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    session_id.to_string(),
                    query,
                    results_count,
                    Utc::now().timestamp()
                ],
            )
            .map_err(|e| ChatError::Storage(format!("Search insert: {}", e)))?;
            Ok(())
        })
    }

    /// All logged searches for a session, oldest first.
    pub fn search_history(&self, session_id: Uuid) -> Result<Vec<SearchRecord>, ChatError> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT session_id, query, results_count, created_at
                     FROM search_queries
                     WHERE session_id = ?1
                     ORDER BY created_at ASC, rowid ASC",
                )
                .map_err(|e| ChatError::Storage(format!("Search query prepare: {}", e)))?;

            let rows = stmt
                .query_map(params![session_id.to_string()], |row| {
                    let session: String = row.get(0)?;
                    Ok(SearchRecord {
                        session_id: parse_uuid(&session, 0)?,
                        query: row.get(1)?,
                        results_count: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })
                .map_err(|e| ChatError::Storage(format!("Search query: {}", e)))?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row.map_err(|e| ChatError::Storage(e.to_string()))?);
            }
            Ok(records)
        })
    }

    /// Deactivate every session under a session key ("reset chat").
    pub fn deactivate(&self, session_key: &str) -> Result<(), ChatError> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE chat_sessions SET is_active = 0 WHERE session_key = ?1",
                params![session_key],
            )
            .map_err(|e| ChatError::Storage(format!("Session deactivate: {}", e)))?;
            Ok(())
        })
    }
}

fn map_session_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChatSessionRecord> {
    let id: String = row.get(0)?;
    Ok(ChatSessionRecord {
        id: parse_uuid(&id, 0)?,
        session_key: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        is_active: row.get::<_, i64>(4)? != 0,
    })
}

fn parse_uuid(s: &str, column: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Run all pending schema migrations.
fn run_migrations(conn: &Connection) -> Result<(), ChatError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| ChatError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| ChatError::Storage(format!("Failed to query migration version: {}", e)))?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: initial_schema");
    }

    Ok(())
}

/// Version 1: sessions, messages, search log.
fn apply_v1(conn: &Connection) -> Result<(), ChatError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS chat_sessions (
            id          TEXT PRIMARY KEY NOT NULL,
            session_key TEXT NOT NULL,
            created_at  INTEGER NOT NULL,
            updated_at  INTEGER NOT NULL,
            is_active   INTEGER NOT NULL DEFAULT 1
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_key
            ON chat_sessions (session_key, is_active);

        CREATE TABLE IF NOT EXISTS chat_messages (
            id          TEXT PRIMARY KEY NOT NULL,
            session_id  TEXT NOT NULL REFERENCES chat_sessions (id),
            role        TEXT NOT NULL
                        CHECK (role IN ('user', 'bot', 'system')),
            content     TEXT NOT NULL,
            metadata    TEXT,
            created_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_session
            ON chat_messages (session_id, created_at ASC);

        CREATE TABLE IF NOT EXISTS search_queries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id    TEXT NOT NULL REFERENCES chat_sessions (id),
            query         TEXT NOT NULL,
            results_count INTEGER NOT NULL DEFAULT 0,
            created_at    INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_searches_session
            ON search_queries (session_id, created_at ASC);

        INSERT INTO schema_migrations (version, name) VALUES (1, 'initial_schema');
        ",
    )
    .map_err(|e| ChatError::Storage(format!("Migration v1 failed: {}", e)))
}
