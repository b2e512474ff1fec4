use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/contributions", get(handlers::get_contributions))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/day/:date", get(handlers::get_day))
        .with_state(state)
}
