use crate::errors::AppError;
use crate::models::{Order, OrderCountResponse, OrderStatistics, OrdersResponse};
use crate::state::AppState;
use crate::stats::build_statistics;
use crate::storage::persist_orders;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let orders = state.orders.lock().await;
    Html(render_index(orders.len()))
}

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>, AppError> {
    let orders = state.orders.lock().await;
    Ok(Json(OrdersResponse {
        orders: orders.clone(),
    }))
}

pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<OrderStatistics>, AppError> {
    let orders = state.orders.lock().await;
    Ok(Json(build_statistics(&orders)))
}

pub async fn record_order(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<Json<OrderCountResponse>, AppError> {
    let total = append_orders(&state, vec![order]).await?;
    Ok(Json(OrderCountResponse {
        total_orders: total,
    }))
}

pub async fn record_orders_bulk(
    State(state): State<AppState>,
    Json(batch): Json<Vec<Order>>,
) -> Result<Json<OrderCountResponse>, AppError> {
    if batch.is_empty() {
        return Err(AppError::bad_request("at least one order is required"));
    }

    let total = append_orders(&state, batch).await?;
    Ok(Json(OrderCountResponse {
        total_orders: total,
    }))
}

async fn append_orders(state: &AppState, batch: Vec<Order>) -> Result<u64, AppError> {
    let added = batch.len();
    let mut orders = state.orders.lock().await;
    orders.extend(batch);

    persist_orders(&state.data_path, &orders).await?;
    info!("recorded {added} order(s), {} total", orders.len());

    Ok(orders.len() as u64)
}
