use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::{
    core::{reading::Reading, source::ReadingSource},
    prelude::*,
};

/// Readings per smart meter.
#[derive(Default)]
pub struct Readings(RwLock<HashMap<String, Vec<Reading>>>);

impl Readings {
    /// Append the readings to the meter, registering the meter if it is new.
    #[instrument(skip(self, readings))]
    pub fn store<I>(&self, smart_meter_id: &str, readings: I)
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut meters = self.0.write().unwrap_or_else(PoisonError::into_inner);
        let meter_readings = meters.entry(smart_meter_id.to_string()).or_default();
        let n_before = meter_readings.len();
        meter_readings.extend(readings);
        debug!(n_stored = meter_readings.len() - n_before, n_total = meter_readings.len(), "stored");
    }
}

impl ReadingSource for Readings {
    fn get_readings(&self, smart_meter_id: &str) -> Option<Vec<Reading>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).get(smart_meter_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::dec;

    use super::*;
    use crate::quantity::power::Kilowatts;

    fn reading(hour: u32) -> Reading {
        Reading::new(Utc.with_ymd_and_hms(2024, 7, 15, hour, 0, 0).unwrap(), Kilowatts(dec!(0.5)))
    }

    #[test]
    fn test_unknown_meter() {
        assert!(Readings::default().get_readings("smart-meter-0").is_none());
    }

    #[test]
    fn test_known_meter_without_readings() {
        let readings = Readings::default();
        readings.store("smart-meter-0", Vec::new());
        assert_eq!(readings.get_readings("smart-meter-0"), Some(Vec::new()));
    }

    #[test]
    fn test_store_appends() {
        let readings = Readings::default();
        readings.store("smart-meter-0", [reading(1)]);
        readings.store("smart-meter-0", [reading(3), reading(2)]);
        readings.store("smart-meter-1", [reading(4)]);
        assert_eq!(
            readings.get_readings("smart-meter-0"),
            Some(vec![reading(1), reading(3), reading(2)]),
        );
        assert_eq!(readings.get_readings("smart-meter-1"), Some(vec![reading(4)]));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let readings = Readings::default();
        readings.store("smart-meter-0", [reading(1)]);
        let snapshot = readings.get_readings("smart-meter-0").unwrap();
        readings.store("smart-meter-0", [reading(2)]);
        assert_eq!(snapshot, [reading(1)]);
    }
}
