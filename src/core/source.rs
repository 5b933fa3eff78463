use crate::core::reading::Reading;

/// Read-only access to the readings of smart meters.
pub trait ReadingSource {
    /// Point-in-time copy of the meter readings, or [`None`] when the meter is unknown.
    fn get_readings(&self, smart_meter_id: &str) -> Option<Vec<Reading>>;
}
