use crate::ports::BoxError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures surfaced by the sales-rate computation
#[derive(Error, Debug)]
pub enum ShopError {
    /// The evaluation instant is too early for a full window to fit before it
    #[error("no {hours} hour window fits before {now}")]
    WindowOutOfRange { now: DateTime<Utc>, hours: i64 },

    /// The store could not count sales for the window
    #[error("failed to count sales since {since}")]
    CountSales {
        since: DateTime<Utc>,
        #[source]
        source: BoxError,
    },

    /// The store could not count customers for the window
    #[error("failed to count customers since {since}")]
    CountCustomers {
        since: DateTime<Utc>,
        #[source]
        source: BoxError,
    },
}
