use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::quantity::power::Kilowatts;

/// Timestamped instantaneous power measurement of a smart meter.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub value: Kilowatts,
}

impl Reading {
    /// Largest accepted reading, one gigawatt.
    pub const MAX_VALUE: Kilowatts = Kilowatts(Decimal::from_parts(1_000_000, 0, 0, false, 0));

    pub const fn new(timestamp: DateTime<Utc>, value: Kilowatts) -> Self {
        Self { timestamp, value }
    }
}
