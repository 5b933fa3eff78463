use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(
    /// Instantaneous power as reported by a smart meter.
    Kilowatts, suffix: "kW", precision: 3
);

implement_mul!(Kilowatts, Hours, KilowattHours);
