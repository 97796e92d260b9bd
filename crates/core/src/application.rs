use crate::domain::{SalesRate, TimeWindow, WINDOW_HOURS};
use crate::error::ShopError;
use crate::ports::ShopModel;
use crate::utils::format_timestamp_to_local;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Computes the sales rate over the 24 hours leading up to now
pub fn calculate_sales_rate(shop_model: &dyn ShopModel) -> Result<SalesRate, ShopError> {
    calculate_sales_rate_at(shop_model, Utc::now())
}

/// Computes the sales rate over the 24 hours leading up to `now`.
///
/// Sales are counted first; if that fails customers are never queried.
/// A window with no customers still yields a rate (infinite or NaN).
pub fn calculate_sales_rate_at(
    shop_model: &dyn ShopModel,
    now: DateTime<Utc>,
) -> Result<SalesRate, ShopError> {
    let window = TimeWindow::last_day(now).ok_or(ShopError::WindowOutOfRange {
        now,
        hours: WINDOW_HOURS,
    })?;
    let since = window.since;
    debug!(since = %format_timestamp_to_local(since), "computing sales rate");

    let sales = shop_model
        .count_sales(since)
        .map_err(|source| ShopError::CountSales { since, source })?;

    let customers = shop_model
        .count_customers(since)
        .map_err(|source| ShopError::CountCustomers { since, source })?;

    let rate = SalesRate {
        sales,
        customers,
        window,
    };
    if !rate.is_defined() {
        warn!(sales, customers, "no customers in window, sales rate is undefined");
    }
    debug!(sales, customers, rate = rate.value(), "sales rate computed");
    Ok(rate)
}

/// Application service producing the formatted sales rate from an injected store
pub struct SalesRateServiceImpl {
    shop_model: Box<dyn ShopModel>,
}

impl SalesRateServiceImpl {
    /// Creates a new SalesRateServiceImpl over the given store
    pub fn new(shop_model: Box<dyn ShopModel>) -> Self {
        Self { shop_model }
    }

    /// Computes the rate for the window ending now and renders it with two decimals
    pub fn execute(&self) -> Result<String, ShopError> {
        self.execute_at(Utc::now())
    }

    /// Same as `execute` with an explicit evaluation instant
    pub fn execute_at(&self, now: DateTime<Utc>) -> Result<String, ShopError> {
        let rate = calculate_sales_rate_at(self.shop_model.as_ref(), now)?;
        Ok(rate.to_string())
    }
}
