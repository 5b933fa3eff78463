use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(KilowattHours, suffix: "kWh", precision: 3);

implement_mul!(KilowattHours, KilowattHourRate, Cost);
