use std::collections::BTreeMap;

/// Current price plan of each smart meter.
#[must_use]
#[derive(Clone, Debug, Default, derive_more::From)]
pub struct Accounts(BTreeMap<String, String>);

impl Accounts {
    #[must_use]
    pub fn plan_id_for(&self, smart_meter_id: &str) -> Option<&str> {
        self.0.get(smart_meter_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(smart_meter_id, plan_id)| (smart_meter_id.as_str(), plan_id.as_str()))
    }
}
