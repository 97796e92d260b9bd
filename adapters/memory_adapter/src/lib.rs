use chrono::{DateTime, Utc};
use shop_core::ports::{Result, ShopModel};
use shop_core::TimeWindow;
use std::cell::RefCell;

/// In-memory implementation of the ShopModel trait
///
/// Keeps recorded instants in plain vectors and logs every call made
/// through the port, which makes it usable as a test double.
#[derive(Debug, Default)]
pub struct InMemoryShopModel {
    customers: Vec<DateTime<Utc>>,
    sales: Vec<DateTime<Utc>>,
    fail_customers: Option<String>,
    fail_sales: Option<String>,
    calls: RefCell<Vec<Call>>,
}

/// A port operation observed by the in-memory store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    CountCustomers(DateTime<Utc>),
    CountSales(DateTime<Utc>),
}

impl InMemoryShopModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_customer(mut self, at: DateTime<Utc>) -> Self {
        self.customers.push(at);
        self
    }

    pub fn record_sale(mut self, at: DateTime<Utc>) -> Self {
        self.sales.push(at);
        self
    }

    /// Makes every `count_customers` call fail with `message`
    pub fn failing_customers(mut self, message: impl Into<String>) -> Self {
        self.fail_customers = Some(message.into());
        self
    }

    /// Makes every `count_sales` call fail with `message`
    pub fn failing_sales(mut self, message: impl Into<String>) -> Self {
        self.fail_sales = Some(message.into());
        self
    }

    /// Calls made through the port so far, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn count_after(instants: &[DateTime<Utc>], since: DateTime<Utc>) -> usize {
        let window = TimeWindow { since };
        instants.iter().filter(|at| window.contains(**at)).count()
    }
}

impl ShopModel for InMemoryShopModel {
    fn count_customers(&self, since: DateTime<Utc>) -> Result<i64> {
        self.calls.borrow_mut().push(Call::CountCustomers(since));
        if let Some(message) = &self.fail_customers {
            return Err(message.clone().into());
        }
        Ok(Self::count_after(&self.customers, since) as i64)
    }

    fn count_sales(&self, since: DateTime<Utc>) -> Result<f64> {
        self.calls.borrow_mut().push(Call::CountSales(since));
        if let Some(message) = &self.fail_sales {
            return Err(message.clone().into());
        }
        Ok(Self::count_after(&self.sales, since) as f64)
    }
}
