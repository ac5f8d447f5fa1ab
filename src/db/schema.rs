//! SQL DDL for the two tables served by the API.
//! Production stores are pre-provisioned; this is applied only on request
//! (`init_schema`) and by tests.

/// SQLite schema with:
/// - `state_id` / `district_id` INTEGER PRIMARY KEY (rowid aliases, assigned on insert)
/// - `district.state_id` REFERENCES `state`, enforced when `PRAGMA foreign_keys` is on
/// - index on `district.state_id` for the per-state aggregation
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS state (
    state_id INTEGER PRIMARY KEY,
    state_name TEXT NOT NULL,
    population INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS district (
    district_id INTEGER PRIMARY KEY,
    district_name TEXT NOT NULL,
    state_id INTEGER NOT NULL REFERENCES state(state_id),
    cases INTEGER NOT NULL,
    cured INTEGER NOT NULL,
    active INTEGER NOT NULL,
    deaths INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_district_state_id ON district(state_id);
"#;
