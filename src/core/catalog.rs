use std::collections::HashSet;

use crate::{core::price_plan::PricePlan, prelude::*};

/// Fixed, ordered set of the available price plans.
#[must_use]
#[derive(Clone, Debug, Default, derive_more::IntoIterator)]
pub struct Catalog(#[into_iterator(owned, ref)] Vec<PricePlan>);

impl Catalog {
    /// Build the catalog, ensuring that the plan names are unique.
    pub fn try_new(price_plans: Vec<PricePlan>) -> Result<Self> {
        let mut names = HashSet::with_capacity(price_plans.len());
        for price_plan in &price_plans {
            ensure!(
                names.insert(price_plan.name.as_str()),
                "duplicate price plan `{}`",
                price_plan.name,
            );
        }
        Ok(Self(price_plans))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePlan> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PricePlan> {
        self.0.iter().find(|price_plan| price_plan.name == name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
