use crate::models::{
    Order, OrderStatistics, PaymentMethodShare, RecentActivity, StatusShare,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::collections::HashSet;

/// Raw status labels folded into the `completedOrders` bucket.
const COMPLETED_STATUSES: [&str; 2] = ["completed", "delivered"];
/// Raw status labels folded into the `cancelledOrders` bucket.
const CANCELLED_STATUSES: [&str; 2] = ["cancelled", "rejected"];

const TOP_PAYMENT_METHODS: usize = 3;
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn build_statistics(orders: &[Order]) -> OrderStatistics {
    build_statistics_at(Utc::now().naive_utc(), orders)
}

/// Aggregates one order list into a statistics summary. Pure: same `now` and
/// same orders produce identical output, and nothing is read from the
/// ambient clock.
pub fn build_statistics_at(now: NaiveDateTime, orders: &[Order]) -> OrderStatistics {
    let mut total_revenue = 0.0;
    let mut total_products = 0u64;
    let mut orders_today = 0u64;
    let mut orders_this_week = 0u64;
    let mut orders_this_month = 0u64;
    let mut status_counts: Vec<(String, u64)> = Vec::new();
    let mut payment_counts: Vec<(String, u64)> = Vec::new();
    let mut customers: HashSet<&str> = HashSet::new();

    for order in orders {
        total_revenue += parse_amount(order.value.as_deref());
        total_products = total_products.saturating_add(order.skus_count.unwrap_or(0));

        bump(&mut status_counts, normalize_status(order.status.as_deref()));
        bump(&mut payment_counts, normalize_payment(order.payment.as_deref()));

        if let Some(customer) = order.customer.as_deref().map(str::trim) {
            if !customer.is_empty() {
                customers.insert(customer);
            }
        }

        let windows = classify_order_date(order.order_date.as_deref(), now);
        if windows.today {
            orders_today += 1;
        }
        if windows.this_week {
            orders_this_week += 1;
        }
        if windows.this_month {
            orders_this_month += 1;
        }
    }

    let total_orders = orders.len() as u64;
    let average_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue / total_orders as f64
    };

    let top_payment_methods = build_distribution(
        &payment_counts,
        total_orders,
        Some(TOP_PAYMENT_METHODS),
    )
    .into_iter()
    .map(|entry| PaymentMethodShare {
        method: capitalize(&entry.key),
        count: entry.count,
        percentage: entry.percentage,
    })
    .collect();

    let order_status_distribution = build_distribution(&status_counts, total_orders, None)
        .into_iter()
        .map(|entry| StatusShare {
            status: entry.key,
            count: entry.count,
            percentage: entry.percentage,
        })
        .collect();

    OrderStatistics {
        total_orders,
        total_revenue,
        pending_orders: count_for(&status_counts, "pending"),
        completed_orders: bucket_total(&status_counts, &COMPLETED_STATUSES),
        cancelled_orders: bucket_total(&status_counts, &CANCELLED_STATUSES),
        average_order_value,
        total_customers: customers.len() as u64,
        total_products,
        orders_today,
        orders_this_week,
        orders_this_month,
        top_payment_methods,
        order_status_distribution,
        recent_activity: build_recent_activity(orders),
    }
}

/// Extracts a numeric amount from a currency-formatted string such as
/// `"₹1,23,456.50"`. Unparseable or negative remainders come back as `0.0`;
/// never panics.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindows {
    pub today: bool,
    pub this_week: bool,
    pub this_month: bool,
}

/// Buckets an order date into the reporting windows relative to `now`:
/// since midnight of `now`'s day, rolling 7 days, rolling 30 days. Missing
/// or unparseable dates land in no window.
pub fn classify_order_date(raw: Option<&str>, now: NaiveDateTime) -> TimeWindows {
    let Some(ts) = parse_order_date(raw) else {
        return TimeWindows::default();
    };
    TimeWindows {
        today: ts >= now.date().and_time(NaiveTime::MIN),
        this_week: ts >= now - Duration::days(7),
        this_month: ts >= now - Duration::days(30),
    }
}

/// Accepts RFC 3339, offset-less datetimes (assumed UTC), and bare dates
/// (taken at midnight).
pub fn parse_order_date(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    None
}

pub fn normalize_status(raw: Option<&str>) -> String {
    normalize_label(raw, "pending")
}

pub fn normalize_payment(raw: Option<&str>) -> String {
    normalize_label(raw, "unknown")
}

fn normalize_label(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => default.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry {
    pub key: String,
    pub count: u64,
    pub percentage: f64,
}

/// Turns first-seen-ordered `(key, count)` pairs into a percentage-annotated
/// distribution sorted by count descending. The sort is stable, so ties keep
/// their first-seen order. Percentages are `0` when `total` is `0` and are
/// rounded to one decimal otherwise.
pub fn build_distribution(
    counts: &[(String, u64)],
    total: u64,
    limit: Option<usize>,
) -> Vec<DistributionEntry> {
    let mut entries: Vec<DistributionEntry> = counts
        .iter()
        .map(|(key, count)| DistributionEntry {
            key: key.clone(),
            count: *count,
            percentage: percentage_of(*count, total),
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn bump(counts: &mut Vec<(String, u64)>, key: String) {
    match counts.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key, 1)),
    }
}

fn count_for(counts: &[(String, u64)], key: &str) -> u64 {
    counts
        .iter()
        .find(|(existing, _)| existing == key)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

fn bucket_total(counts: &[(String, u64)], statuses: &[&str]) -> u64 {
    statuses
        .iter()
        .copied()
        .map(|status| count_for(counts, status))
        .sum()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn build_recent_activity(orders: &[Order]) -> Vec<RecentActivity> {
    let mut dated: Vec<(&Order, NaiveDateTime)> = orders
        .iter()
        .filter_map(|order| {
            parse_order_date(order.order_date.as_deref()).map(|ts| (order, ts))
        })
        .collect();
    dated.sort_by(|a, b| b.1.cmp(&a.1));
    dated
        .into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|(order, _)| RecentActivity {
            customer: order
                .customer
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| "guest".to_string()),
            status: normalize_status(order.status.as_deref()),
            order_date: order.order_date.clone().unwrap_or_default(),
        })
        .collect()
}
