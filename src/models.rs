use serde::{Deserialize, Serialize};

/// One order as delivered by the order API. Every field is optional on the
/// wire; defaulting and normalization happen in `stats`, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub status: Option<String>,
    pub value: Option<String>,
    pub order_date: Option<String>,
    pub customer: Option<String>,
    pub payment: Option<String>,
    pub skus_count: Option<u64>,
}

/// Shape of the persisted data file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodShare {
    pub method: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub status: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub customer: String,
    pub status: String,
    pub order_date: String,
}

/// Derived statistics summary. Recomputed fresh from the full order list on
/// every request; never mutated in place.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub pending_orders: u64,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
    pub average_order_value: f64,
    pub total_customers: u64,
    pub total_products: u64,
    pub orders_today: u64,
    pub orders_this_week: u64,
    pub orders_this_month: u64,
    pub top_payment_methods: Vec<PaymentMethodShare>,
    pub order_status_distribution: Vec<StatusShare>,
    pub recent_activity: Vec<RecentActivity>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCountResponse {
    pub total_orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_deserializes_from_camel_case() {
        let order: Order = serde_json::from_str(
            r#"{"status":"Pending","orderDate":"2026-08-01","skusCount":3}"#,
        )
        .expect("valid order json");
        assert_eq!(order.status.as_deref(), Some("Pending"));
        assert_eq!(order.order_date.as_deref(), Some("2026-08-01"));
        assert_eq!(order.skus_count, Some(3));
        assert!(order.value.is_none());
        assert!(order.customer.is_none());
        assert!(order.payment.is_none());
    }

    #[test]
    fn order_tolerates_empty_object() {
        let order: Order = serde_json::from_str("{}").expect("empty order json");
        assert!(order.status.is_none());
        assert!(order.skus_count.is_none());
    }
}
