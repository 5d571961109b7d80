//! Statistics sink contract.

use crate::meal::{MealId, Outcome};

/// Persists battle outcomes against a meal's lifetime counters.
///
/// Each call must be atomic: the battle counter and, for [`Outcome::Win`], the
/// win counter are incremented together or not at all. The arena issues two
/// independent calls per battle and does not roll back the first when the
/// second fails.
pub trait StatisticsSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn record_outcome(&self, meal: MealId, outcome: Outcome) -> Result<(), Self::Error>;
}

impl<T: StatisticsSink + ?Sized> StatisticsSink for &T {
    type Error = T::Error;

    fn record_outcome(&self, meal: MealId, outcome: Outcome) -> Result<(), Self::Error> {
        (**self).record_outcome(meal, outcome)
    }
}
