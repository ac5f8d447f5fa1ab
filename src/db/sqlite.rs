use crate::config::Config;
use crate::db::models::{District, DistrictPayload, DistrictStateName, Scalar, State, StateStats};
use crate::db::schema::SQLITE_INIT;
use crate::error::CovidError;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the pool described by `cfg`. The pool is the only store handle in the
/// process; it is cloned into every request through the router state.
pub async fn connect(cfg: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&cfg.database_url)?
        .create_if_missing(cfg.create_if_missing)
        .foreign_keys(cfg.foreign_keys);
    SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind a request field with the SQLite storage class matching its JSON type.
fn bind_scalar(query: SqliteQuery<'_>, value: Scalar) -> SqliteQuery<'_> {
    match value {
        Scalar::Null => query.bind(None::<String>),
        Scalar::Bool(b) => query.bind(b),
        Scalar::Int(i) => query.bind(i),
        Scalar::Real(f) => query.bind(f),
        Scalar::Text(s) => query.bind(s),
        Scalar::Other(v) => query.bind(v.to_string()),
    }
}

/// Bind the six district columns in table order.
fn bind_district(query: SqliteQuery<'_>, district: DistrictPayload) -> SqliteQuery<'_> {
    [
        district.district_name,
        district.state_id,
        district.cases,
        district.cured,
        district.active,
        district.deaths,
    ]
    .into_iter()
    .fold(query, bind_scalar)
}

/// Identifiers arrive as raw path text and are bound unchanged; SQLite
/// compares them against the INTEGER key with column affinity, so `"2"`
/// matches row 2 and `"abc"` matches nothing.
#[derive(Clone)]
pub struct CovidStorage {
    pool: SqlitePool,
}

impl CovidStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CovidError> {
        // sqlx::query runs a single statement, so split the script
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_states(&self) -> Result<Vec<State>, CovidError> {
        let states = sqlx::query_as::<_, State>(
            "SELECT state_id, state_name, population FROM state",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(states)
    }

    pub async fn get_state(&self, state_id: &str) -> Result<State, CovidError> {
        sqlx::query_as::<_, State>(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
        )
        .bind(state_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CovidError::NotFound("state"))
    }

    /// Insert one district. Returns the id assigned by the store.
    pub async fn create_district(&self, district: DistrictPayload) -> Result<i64, CovidError> {
        let query = sqlx::query(
            r#"
            INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        );
        let done = bind_district(query, district)
            .execute(&self.pool)
            .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn get_district(&self, district_id: &str) -> Result<District, CovidError> {
        sqlx::query_as::<_, District>(
            r#"SELECT district_id, district_name, state_id, cases, cured, active, deaths
               FROM district WHERE district_id = ?"#,
        )
        .bind(district_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CovidError::NotFound("district"))
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_district(&self, district_id: &str) -> Result<u64, CovidError> {
        let done = sqlx::query("DELETE FROM district WHERE district_id = ?")
            .bind(district_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Overwrite every column of the row. Returns the number of rows touched (0 or 1).
    pub async fn update_district(
        &self,
        district_id: &str,
        district: DistrictPayload,
    ) -> Result<u64, CovidError> {
        let query = sqlx::query(
            r#"UPDATE district SET
                district_name = ?,
                state_id = ?,
                cases = ?,
                cured = ?,
                active = ?,
                deaths = ?
              WHERE district_id = ?"#,
        );
        let done = bind_district(query, district)
            .bind(district_id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    /// Per-state totals. A state without districts sums to zero, not NULL.
    pub async fn state_stats(&self, state_id: &str) -> Result<StateStats, CovidError> {
        let stats = sqlx::query_as::<_, StateStats>(
            r#"SELECT
                COALESCE(SUM(cases), 0) AS total_cases,
                COALESCE(SUM(cured), 0) AS total_cured,
                COALESCE(SUM(active), 0) AS total_active,
                COALESCE(SUM(deaths), 0) AS total_deaths
               FROM district WHERE state_id = ?"#,
        )
        .bind(state_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }

    pub async fn district_state_name(
        &self,
        district_id: &str,
    ) -> Result<DistrictStateName, CovidError> {
        sqlx::query_as::<_, DistrictStateName>(
            r#"SELECT state.state_name AS state_name
               FROM district
               JOIN state ON district.state_id = state.state_id
               WHERE district.district_id = ?"#,
        )
        .bind(district_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CovidError::NotFound("district state"))
    }
}
