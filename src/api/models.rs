use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{PickFirst, TimestampSecondsWithFrac, serde_as};

use crate::{
    core::{engine::CostPerPlan, reading::Reading},
    quantity::{cost::Cost, power::Kilowatts},
};

/// Batch of readings of one smart meter, as submitted by a client.
#[must_use]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadings {
    pub smart_meter_id: Option<String>,
    pub electricity_readings: Option<Vec<ElectricityReading>>,
}

/// Validated [`MeterReadings`].
#[must_use]
pub struct ValidMeterReadings {
    pub smart_meter_id: String,
    pub readings: Vec<Reading>,
}

/// Note: the time is accepted either as an RFC 3339 string or as fractional Unix seconds.
#[serde_as]
#[derive(Serialize, Deserialize)]
pub struct ElectricityReading {
    #[serde_as(as = "Option<PickFirst<(_, TimestampSecondsWithFrac<f64>)>>")]
    pub time: Option<DateTime<Utc>>,

    pub reading: Option<Kilowatts>,
}

impl From<Reading> for ElectricityReading {
    fn from(reading: Reading) -> Self {
        Self { time: Some(reading.timestamp), reading: Some(reading.value) }
    }
}

impl MeterReadings {
    /// Validate the readings, collecting every problem found.
    pub fn validate(self) -> Result<ValidMeterReadings, Vec<String>> {
        let mut errors = Vec::new();

        let smart_meter_id = self.smart_meter_id.filter(|id| !id.is_empty());
        if smart_meter_id.is_none() {
            errors.push("Smart meter ID is missing or empty".to_string());
        }

        let electricity_readings =
            self.electricity_readings.filter(|readings| !readings.is_empty()).unwrap_or_default();
        if electricity_readings.is_empty() {
            errors.push("Electricity readings list is missing or empty".to_string());
        }

        let mut readings = Vec::with_capacity(electricity_readings.len());
        for (index, electricity_reading) in electricity_readings.into_iter().enumerate() {
            if electricity_reading.time.is_none() {
                errors.push(format!("Electricity reading at index {index} has no time"));
            }
            match electricity_reading.reading {
                None => errors.push(format!("Electricity reading at index {index} has no reading")),
                Some(value) if value.is_negative() => {
                    errors.push(format!("Electricity reading at index {index} is negative"));
                }
                Some(value) if value > Reading::MAX_VALUE => {
                    errors.push(format!(
                        "Electricity reading at index {index} exceeds {}",
                        Reading::MAX_VALUE,
                    ));
                }
                Some(_) => {}
            }
            if let Some(timestamp) = electricity_reading.time
                && let Some(value) = electricity_reading.reading
            {
                readings.push(Reading::new(timestamp, value));
            }
        }

        match smart_meter_id {
            Some(smart_meter_id) if errors.is_empty() => {
                Ok(ValidMeterReadings { smart_meter_id, readings })
            }
            _ => Err(errors),
        }
    }
}

#[must_use]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePlanComparisons {
    /// Current price plan of the smart meter, if known.
    pub price_plan_id: Option<String>,

    pub price_plan_comparisons: CostPerPlan,
}

/// Single-entry mapping of a plan name to its cost.
pub type Recommendation = BTreeMap<String, Cost>;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_validate_ok() {
        let meter_readings: MeterReadings = serde_json::from_str(
            r#"{
                "smartMeterId": "smart-meter-0",
                "electricityReadings": [
                    {"time": "2024-07-15T10:00:00Z", "reading": 0.5},
                    {"time": 1721041200, "reading": 1.25}
                ]
            }"#,
        )
        .unwrap();
        let valid = meter_readings.validate().unwrap();
        assert_eq!(valid.smart_meter_id, "smart-meter-0");
        assert_eq!(
            valid.readings,
            [
                Reading::new(
                    Utc.with_ymd_and_hms(2024, 7, 15, 10, 0, 0).unwrap(),
                    Kilowatts(dec!(0.5)),
                ),
                Reading::new(
                    Utc.with_ymd_and_hms(2024, 7, 15, 11, 0, 0).unwrap(),
                    Kilowatts(dec!(1.25)),
                ),
            ],
        );
    }

    #[test]
    fn test_validate_empty() {
        let meter_readings: MeterReadings =
            serde_json::from_str(r#"{"smartMeterId": "", "electricityReadings": []}"#).unwrap();
        assert_eq!(
            meter_readings.validate().err().unwrap(),
            ["Smart meter ID is missing or empty", "Electricity readings list is missing or empty"],
        );
    }

    #[test]
    fn test_validate_missing_fields() {
        let meter_readings: MeterReadings = serde_json::from_str(
            r#"{
                "smartMeterId": "smart-meter-0",
                "electricityReadings": [
                    {"reading": 0.5},
                    {"time": "2024-07-15T10:00:00Z", "reading": null},
                    {"time": "2024-07-15T11:00:00Z", "reading": -1}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            meter_readings.validate().err().unwrap(),
            [
                "Electricity reading at index 0 has no time",
                "Electricity reading at index 1 has no reading",
                "Electricity reading at index 2 is negative",
            ],
        );
    }

    #[test]
    fn test_validate_too_large() {
        let meter_readings: MeterReadings = serde_json::from_str(
            r#"{
                "smartMeterId": "smart-meter-0",
                "electricityReadings": [
                    {"time": "2024-07-15T10:00:00Z", "reading": 1000000},
                    {"time": "2024-07-15T11:00:00Z", "reading": 5e28}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            meter_readings.validate().err().unwrap(),
            ["Electricity reading at index 1 exceeds 1000000.000 kW"],
        );
    }

    #[test]
    fn test_validate_missing_everything() {
        let meter_readings: MeterReadings = serde_json::from_str("{}").unwrap();
        assert_eq!(meter_readings.validate().err().unwrap().len(), 2);
    }
}
