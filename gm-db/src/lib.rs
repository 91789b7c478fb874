//! In-memory SQLite database layer for the Gapminder country statistics.
//!
//! The dashboard treats SQLite as its dataframe engine: the bundled CSV is
//! loaded once into a single `observations` table and every derived table
//! (per-country maxima, selection-filtered subsets, chart series) is a SQL
//! query against it.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data embedded via `include_str!` at compile time in the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use gm_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_observations(
//!     "country,continent,year,lifeExp,pop,gdpPercap\nNorway,Europe,2007,80.196,4627926,49357.19017\n",
//! )
//! .unwrap();
//!
//! let summary = db.query_country_summaries().unwrap();
//! assert_eq!(summary[0].country, "Norway");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the raw Gapminder observations.
///
/// Cheaply cloneable (via `Rc`) so it can be shared across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_observations`](Self::load_observations) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

// Dioxus signals compare values to decide whether to notify subscribers.
// Two handles are equal when they share the same connection.
impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}
