quantity!(
    /// Unit price per kilowatt-hour, in the plan's currency.
    KilowattHourRate, suffix: "/kWh", precision: 4
);
