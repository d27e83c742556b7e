use crate::models::Order;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle to the in-memory order list and its backing file.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub orders: Arc<Mutex<Vec<Order>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, orders: Vec<Order>) -> Self {
        Self {
            data_path,
            orders: Arc::new(Mutex::new(orders)),
        }
    }
}
