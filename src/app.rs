use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/orders", get(handlers::list_orders).post(handlers::record_order))
        .route("/api/orders/bulk", post(handlers::record_orders_bulk))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
