use std::fmt::{self, Debug, Display, Formatter};

use rust_decimal::RoundingStrategy;

quantity!(
    @define
    /// Currency-agnostic cost.
    Cost
);

impl Cost {
    /// Number of decimal places an interval cost is rounded to and displayed with.
    pub const SCALE: u32 = 4;

    /// Round half-up to [`Self::SCALE`] decimal places.
    ///
    /// Ties go away from zero, which is the business «half-up» for non-negative costs.
    pub fn round(self) -> Self {
        Self(self.0.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Display for Cost {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.*}", Self::SCALE as usize, self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, formatter)
    }
}
