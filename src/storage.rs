use crate::errors::AppError;
use crate::models::{AppData, Order};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("ORDERS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/orders.json"))
}

/// Loads the order file, falling back to an empty list when the file is
/// missing or corrupt. A corrupt file is logged but never fatal.
pub async fn load_orders(path: &Path) -> Vec<Order> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<AppData>(&bytes) {
            Ok(data) => data.orders,
            Err(err) => {
                error!("failed to parse order file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read order file: {err}");
            Vec::new()
        }
    }
}

pub async fn persist_orders(path: &Path, orders: &[Order]) -> Result<(), AppError> {
    let data = AppData {
        orders: orders.to_vec(),
    };
    let payload = serde_json::to_vec_pretty(&data)?;
    fs::write(path, payload).await?;
    Ok(())
}
