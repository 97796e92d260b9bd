pub mod application;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

pub use application::{calculate_sales_rate, calculate_sales_rate_at, SalesRateServiceImpl};
pub use domain::{SalesRate, TimeWindow};
pub use error::ShopError;
pub use ports::ShopModel;
