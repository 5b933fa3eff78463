use bon::Builder;
use chrono::{DateTime, Datelike, Utc, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::quantity::rate::KilowattHourRate;

#[must_use]
#[derive(Clone, Debug, Builder, Deserialize)]
pub struct PricePlan {
    #[builder(into)]
    pub name: String,

    #[builder(into)]
    pub supplier: Option<String>,

    /// Base price of one kilowatt-hour.
    pub unit_rate: KilowattHourRate,

    /// Note: the first multiplier matching a day wins.
    #[builder(default)]
    #[serde(default)]
    pub peak_time_multipliers: Vec<PeakTimeMultiplier>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct PeakTimeMultiplier {
    pub day_of_week: Weekday,
    pub multiplier: Decimal,
}

impl PeakTimeMultiplier {
    pub const MAX: Decimal = Decimal::ONE_THOUSAND;

    pub const fn new(day_of_week: Weekday, multiplier: Decimal) -> Self {
        Self { day_of_week, multiplier }
    }
}

impl PricePlan {
    /// Largest accepted base price of one kilowatt-hour.
    pub const MAX_UNIT_RATE: KilowattHourRate =
        KilowattHourRate(Decimal::from_parts(1_000_000, 0, 0, false, 0));

    /// Unit price at the timestamp: the base rate scaled by the multiplier of the UTC day.
    pub fn price_at(&self, timestamp: DateTime<Utc>) -> KilowattHourRate {
        let day_of_week = timestamp.weekday();
        self.peak_time_multipliers
            .iter()
            .find(|multiplier| multiplier.day_of_week == day_of_week)
            .map_or(self.unit_rate, |multiplier| self.unit_rate * multiplier.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::dec;

    use super::*;

    fn plan_with(peak_time_multipliers: Vec<PeakTimeMultiplier>) -> PricePlan {
        PricePlan::builder()
            .name("price-plan-0")
            .unit_rate(KilowattHourRate(Decimal::ONE))
            .peak_time_multipliers(peak_time_multipliers)
            .build()
    }

    #[test]
    fn test_supplier() {
        let plan = PricePlan::builder()
            .name("price-plan-0")
            .supplier("Energy Supplier Name")
            .unit_rate(KilowattHourRate(Decimal::ONE))
            .build();
        assert_eq!(plan.supplier.as_deref(), Some("Energy Supplier Name"));
        assert!(plan.peak_time_multipliers.is_empty());
    }

    #[test]
    fn test_base_price_on_ordinary_day() {
        // Thursday:
        let timestamp = Utc.with_ymd_and_hms(2017, 8, 31, 12, 0, 0).unwrap();
        let plan = plan_with(vec![PeakTimeMultiplier::new(Weekday::Wed, Decimal::TEN)]);
        assert_eq!(plan.price_at(timestamp), KilowattHourRate(Decimal::ONE));
    }

    #[test]
    fn test_peak_price_on_exceptional_day() {
        // Wednesday:
        let timestamp = Utc.with_ymd_and_hms(2017, 8, 30, 23, 0, 0).unwrap();
        let plan = plan_with(vec![PeakTimeMultiplier::new(Weekday::Wed, Decimal::TEN)]);
        assert_eq!(plan.price_at(timestamp), KilowattHourRate(Decimal::TEN));
    }

    #[test]
    fn test_multiple_exceptional_days() {
        let timestamp = Utc.with_ymd_and_hms(2017, 8, 30, 23, 0, 0).unwrap();
        let plan = plan_with(vec![
            PeakTimeMultiplier::new(Weekday::Wed, Decimal::TEN),
            PeakTimeMultiplier::new(Weekday::Tue, dec!(5)),
        ]);
        assert_eq!(plan.price_at(timestamp), KilowattHourRate(Decimal::TEN));
        assert_eq!(plan.price_at(timestamp - chrono::TimeDelta::days(1)), KilowattHourRate(dec!(5)));
    }

    #[test]
    fn test_first_duplicate_multiplier_wins() {
        let timestamp = Utc.with_ymd_and_hms(2017, 8, 30, 23, 0, 0).unwrap();
        let plan = plan_with(vec![
            PeakTimeMultiplier::new(Weekday::Wed, dec!(2)),
            PeakTimeMultiplier::new(Weekday::Wed, dec!(3)),
        ]);
        assert_eq!(plan.price_at(timestamp), KilowattHourRate(dec!(2)));
    }

    #[test]
    fn test_day_of_week_is_taken_in_utc() {
        // Monday 23:30 in UTC is already Tuesday in CEST, but UTC decides:
        let timestamp = Utc.with_ymd_and_hms(2024, 7, 15, 23, 30, 0).unwrap();
        let plan = plan_with(vec![PeakTimeMultiplier::new(Weekday::Mon, dec!(1.5))]);
        assert_eq!(plan.price_at(timestamp), KilowattHourRate(dec!(1.5)));
    }

    #[test]
    fn test_deserialize() {
        let plan: PricePlan = toml::from_str(
            r#"
            name = "price-plan-2"
            supplier = "Power for Everyone"
            unit_rate = 0.3

            [[peak_time_multipliers]]
            day_of_week = "Monday"
            multiplier = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(plan.name, "price-plan-2");
        assert_eq!(plan.unit_rate, KilowattHourRate(dec!(0.3)));
        assert_eq!(plan.peak_time_multipliers.len(), 1);
        assert_eq!(plan.peak_time_multipliers[0].day_of_week, Weekday::Mon);
        assert_eq!(plan.peak_time_multipliers[0].multiplier, dec!(1.5));
    }
}
