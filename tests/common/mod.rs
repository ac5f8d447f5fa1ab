#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use covid_stats::Config;
use covid_stats::db::{CovidStorage, SqlitePool, connect};
use covid_stats::router::{AppState, covid_router};
use serde_json::Value;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// A seeded store in a temp file plus the router serving it.
pub struct TestApp {
    pub app: Router,
    pub storage: CovidStorage,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub const KERALA_ID: i64 = 2;
pub const GOA_ID: i64 = 3;

pub async fn spawn_app(tag: &str) -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "covid-stats-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let cfg = Config {
        database_url: format!("sqlite:{}", path.display()),
        create_if_missing: true,
        max_connections: 2,
        ..Config::default()
    };
    let pool = connect(&cfg).await.expect("failed to open store");
    let storage = CovidStorage::new(pool.clone());
    storage.init_schema().await.expect("failed to create schema");
    seed(&pool).await;

    TestApp {
        app: covid_router(AppState::new(pool)),
        storage,
        path,
    }
}

async fn seed(pool: &SqlitePool) {
    let statements = [
        "INSERT INTO state (state_id, state_name, population) VALUES (1, 'Andhra Pradesh', 49577103)",
        "INSERT INTO state (state_id, state_name, population) VALUES (2, 'Kerala', 33406061)",
        "INSERT INTO state (state_id, state_name, population) VALUES (3, 'Goa', 1458545)",
        "INSERT INTO district (district_id, district_name, state_id, cases, cured, active, deaths) VALUES (1, 'Ernakulam', 2, 10, 5, 3, 2)",
        "INSERT INTO district (district_id, district_name, state_id, cases, cured, active, deaths) VALUES (2, 'Kozhikode', 2, 20, 5, 10, 5)",
        "INSERT INTO district (district_id, district_name, state_id, cases, cured, active, deaths) VALUES (3, 'Guntur', 1, 100, 60, 30, 10)",
    ];
    for stmt in statements {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .expect("failed to seed store");
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let resp = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let text = String::from_utf8(bytes.to_vec()).expect("response body was not utf-8");
        (status, text)
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, text) = self.send("GET", uri, None).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).expect("response body was not json")
        };
        (status, value)
    }

    pub async fn drop_table(&self, table: &str) {
        sqlx::query(&format!("DROP TABLE {table}"))
            .execute(self.storage.pool())
            .await
            .expect("failed to drop table");
    }
}
