//! Database module: row models, schema and the storage handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the JSON shapes served
//! - `schema.rs`: SQL DDL for bootstrapping an empty store
//! - `sqlite.rs`: pool construction and one method per statement

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{District, DistrictPayload, DistrictStateName, Scalar, State, StateStats};
pub use schema::SQLITE_INIT;
pub use sqlite::{CovidStorage, SqlitePool, connect};
