use chrono::TimeDelta;
use rust_decimal::Decimal;

quantity!(Hours, suffix: "h", precision: 2);

impl Hours {
    const SECONDS_PER_HOUR: i64 = 3600;
}

impl From<TimeDelta> for Hours {
    /// Convert the whole seconds of the time delta, dropping the sub-second part.
    fn from(time_delta: TimeDelta) -> Self {
        Self(Decimal::from(time_delta.num_seconds()) / Decimal::from(Self::SECONDS_PER_HOUR))
    }
}
