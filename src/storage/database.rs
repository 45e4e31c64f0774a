//! `SQLite`-backed memo store.
//!
//! The database holds a single `memos` table. By default it lives at
//! `~/.memo/memo.db`; `:memory:` selects a throwaway in-memory database.

use std::fmt;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use crate::core::{label_of, Memo, MemoSummary};
use crate::error::MemoError;

use super::schema;

/// Where the store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A database file on disk.
    File(PathBuf),
    /// A private in-memory database, discarded on close.
    InMemory,
}

impl StoreLocation {
    /// Special path value selecting an in-memory database.
    pub const MEMORY: &'static str = ":memory:";

    /// Interpret a user-supplied path, treating `:memory:` specially.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == Self::MEMORY {
            Self::InMemory
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::InMemory => write!(f, "{}", Self::MEMORY),
        }
    }
}

enum State {
    Unopened,
    Open(Connection),
    Closed,
}

/// Memo store owning the database connection.
pub struct Store {
    location: StoreLocation,
    state: State,
}

impl Store {
    /// Create a store for the given location without opening it.
    #[must_use]
    pub const fn new(location: StoreLocation) -> Self {
        Self {
            location,
            state: State::Unopened,
        }
    }

    /// Create and initialize a store backed by a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn open_at(path: &Path) -> Result<Self, MemoError> {
        let mut store = Self::new(StoreLocation::File(path.to_path_buf()));
        store.initialize()?;
        Ok(store)
    }

    /// Create and initialize an in-memory store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, MemoError> {
        let mut store = Self::new(StoreLocation::InMemory);
        store.initialize()?;
        Ok(store)
    }

    /// Location this store reads from.
    #[must_use]
    pub const fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Open the connection if needed and create the memo table if absent.
    ///
    /// Calling this on an already initialized store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if the database cannot be opened, the
    /// schema statement fails, or the store was already closed.
    pub fn initialize(&mut self) -> Result<(), MemoError> {
        match self.state {
            State::Closed => return Err(MemoError::closed()),
            State::Unopened => {
                let conn = self.connect()?;
                self.state = State::Open(conn);
            }
            State::Open(_) => {}
        }

        if schema::ensure(self.conn()?)? {
            tracing::debug!(location = %self.location, "created memo table");
        }
        Ok(())
    }

    fn connect(&self) -> Result<Connection, MemoError> {
        tracing::debug!(location = %self.location, "opening memo database");
        match &self.location {
            StoreLocation::File(path) => Connection::open(path).map_err(|e| {
                MemoError::Storage(format!("Failed to open database {}: {e}", path.display()))
            }),
            StoreLocation::InMemory => Connection::open_in_memory().map_err(|e| {
                MemoError::Storage(format!("Failed to open in-memory database: {e}"))
            }),
        }
    }

    fn conn(&self) -> Result<&Connection, MemoError> {
        match &self.state {
            State::Open(conn) => Ok(conn),
            State::Unopened => Err(MemoError::Storage("store not initialized".to_string())),
            State::Closed => Err(MemoError::closed()),
        }
    }

    /// Insert a memo and return its new ID.
    ///
    /// Surrounding whitespace is trimmed before storing.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::EmptyContent` if nothing remains after trimming,
    /// or `MemoError::Storage` if the insert fails.
    pub fn add(&self, content: &str) -> Result<i64, MemoError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(MemoError::EmptyContent);
        }

        let conn = self.conn()?;
        conn.execute("INSERT INTO memos (content) VALUES (?1)", [content])
            .map_err(|e| MemoError::Storage(format!("Failed to add memo: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, "memo added");
        Ok(id)
    }

    /// List every memo's ID and label in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if the query fails.
    pub fn list(&self) -> Result<Vec<MemoSummary>, MemoError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id, content FROM memos ORDER BY id ASC")
            .map_err(|e| MemoError::Storage(format!("Failed to list memos: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let content: String = row.get(1)?;
                Ok(MemoSummary {
                    id,
                    label: label_of(&content).to_string(),
                })
            })
            .map_err(|e| MemoError::Storage(format!("Failed to list memos: {e}")))?;

        let entries = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MemoError::Storage(format!("Failed to read memo row: {e}")))?;
        Ok(entries)
    }

    /// Fetch a memo by ID, returning `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Memo>, MemoError> {
        self.conn()?
            .query_row(
                "SELECT id, content FROM memos WHERE id = ?1",
                [id],
                |row| {
                    Ok(Memo {
                        id: row.get(0)?,
                        content: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(|e| MemoError::Storage(format!("Failed to read memo {id}: {e}")))
    }

    /// Delete a memo by ID.
    ///
    /// Returns `false` if no memo had that ID.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if the statement fails.
    pub fn delete(&self, id: i64) -> Result<bool, MemoError> {
        let affected = self
            .conn()?
            .execute("DELETE FROM memos WHERE id = ?1", [id])
            .map_err(|e| MemoError::Storage(format!("Failed to delete memo {id}: {e}")))?;

        tracing::info!(id, affected, "memo delete");
        Ok(affected > 0)
    }

    /// Number of stored memos.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if the query fails.
    pub fn count(&self) -> Result<usize, MemoError> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM memos", [], |row| row.get(0))
            .map_err(|e| MemoError::Storage(format!("Failed to count memos: {e}")))?;

        usize::try_from(count).map_err(|e| MemoError::Storage(format!("Invalid memo count: {e}")))
    }

    /// Release the connection.
    ///
    /// Safe to call repeatedly. Every later operation fails with a storage error.
    ///
    /// # Errors
    ///
    /// Returns `MemoError::Storage` if `SQLite` reports an error while closing.
    pub fn close(&mut self) -> Result<(), MemoError> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Open(conn) => {
                tracing::debug!(location = %self.location, "closing memo database");
                conn.close()
                    .map_err(|(_, e)| MemoError::Storage(format!("Failed to close database: {e}")))
            }
            State::Unopened | State::Closed => Ok(()),
        }
    }
}

/// Run `f` against an initialized store, closing it afterwards on every path.
///
/// If both the body and the close fail, the body's error is returned.
///
/// # Errors
///
/// Returns the first error from initialization, the body, or closing.
pub fn with_store<T, F>(location: StoreLocation, f: F) -> Result<T, MemoError>
where
    F: FnOnce(&mut Store) -> Result<T, MemoError>,
{
    let mut store = Store::new(location);
    let result = store.initialize().and_then(|()| f(&mut store));
    let closed = store.close();

    let value = result?;
    closed?;
    Ok(value)
}
