use axum::{
    Router,
    routing::{MethodRouter, get, post},
};

use crate::db::{CovidStorage, SqlitePool};
use crate::handlers::{districts, states};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub storage: CovidStorage,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            storage: CovidStorage::new(pool),
        }
    }
}

/// Build the API router.
pub fn covid_router(state: AppState) -> Router {
    let routes: Vec<(&str, MethodRouter<AppState>)> = vec![
        ("/states/", get(states::list_states)),
        ("/states/{state_id}/", get(states::get_state)),
        ("/states/{state_id}/stats/", get(states::state_stats)),
        ("/districts/", post(districts::create_district)),
        (
            "/districts/{district_id}/",
            get(districts::get_district)
                .put(districts::update_district)
                .delete(districts::delete_district),
        ),
        (
            "/districts/{district_id}/details/",
            get(districts::district_details),
        ),
    ];

    // Clients call these both with and without the trailing slash.
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router
                .route(path.trim_end_matches('/'), method_router.clone())
                .route(path, method_router)
        })
        .with_state(state)
}
