use chrono::{DateTime, Utc};
use std::error::Error;

pub type BoxError = Box<dyn Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, BoxError>;

/// Store operations the sales-rate computation depends on.
/// This is a port (interface): adapters implement it, the core only ever sees the trait.
pub trait ShopModel {
    /// Number of customers created strictly after `since`
    fn count_customers(&self, since: DateTime<Utc>) -> Result<i64>;

    /// Number of sales recorded strictly after `since`
    fn count_sales(&self, since: DateTime<Utc>) -> Result<f64>;
}
