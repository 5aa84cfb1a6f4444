//! Mutation selection weights.

use super::types::Mutation;
use crate::error::{CityError, Result};
use rand::Rng;

/// Relative selection weights of the mutation operators.
///
/// Weights need not sum to one; a mutation is picked with probability
/// `weight / sum`. A zero weight disables an operator.
///
/// # Examples
///
/// ```
/// use city_anneal::mutation::MutationWeights;
///
/// let weights = MutationWeights::default()
///     .with_add_rail_station(0.0)
///     .with_extend_road(0.3);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationWeights {
    pub extend_road: f64,
    pub add_rail_station: f64,
    pub improve_worst_residence: f64,
    pub remove_and_compensate: f64,
    pub prune_useless_service: f64,
    pub add_random: f64,
    pub remove_random: f64,
    pub move_random: f64,
}

impl Default for MutationWeights {
    fn default() -> Self {
        Self {
            extend_road: 0.20,
            add_rail_station: 0.05,
            improve_worst_residence: 0.20,
            remove_and_compensate: 0.20,
            prune_useless_service: 0.05,
            add_random: 0.10,
            remove_random: 0.10,
            move_random: 0.10,
        }
    }
}

impl MutationWeights {
    pub fn with_extend_road(mut self, w: f64) -> Self {
        self.extend_road = w;
        self
    }

    pub fn with_add_rail_station(mut self, w: f64) -> Self {
        self.add_rail_station = w;
        self
    }

    pub fn with_improve_worst_residence(mut self, w: f64) -> Self {
        self.improve_worst_residence = w;
        self
    }

    pub fn with_remove_and_compensate(mut self, w: f64) -> Self {
        self.remove_and_compensate = w;
        self
    }

    pub fn with_prune_useless_service(mut self, w: f64) -> Self {
        self.prune_useless_service = w;
        self
    }

    pub fn with_add_random(mut self, w: f64) -> Self {
        self.add_random = w;
        self
    }

    pub fn with_remove_random(mut self, w: f64) -> Self {
        self.remove_random = w;
        self
    }

    pub fn with_move_random(mut self, w: f64) -> Self {
        self.move_random = w;
        self
    }

    /// Weights with a single operator enabled.
    pub fn only(mutation: Mutation) -> Self {
        let mut weights = Self {
            extend_road: 0.0,
            add_rail_station: 0.0,
            improve_worst_residence: 0.0,
            remove_and_compensate: 0.0,
            prune_useless_service: 0.0,
            add_random: 0.0,
            remove_random: 0.0,
            move_random: 0.0,
        };
        *weights.weight_mut(mutation) = 1.0;
        weights
    }

    pub fn weight(&self, mutation: Mutation) -> f64 {
        match mutation {
            Mutation::ExtendRoad => self.extend_road,
            Mutation::AddRailStation => self.add_rail_station,
            Mutation::ImproveWorstResidence => self.improve_worst_residence,
            Mutation::RemoveAndCompensate => self.remove_and_compensate,
            Mutation::PruneUselessService => self.prune_useless_service,
            Mutation::AddRandom => self.add_random,
            Mutation::RemoveRandom => self.remove_random,
            Mutation::MoveRandom => self.move_random,
        }
    }

    fn weight_mut(&mut self, mutation: Mutation) -> &mut f64 {
        match mutation {
            Mutation::ExtendRoad => &mut self.extend_road,
            Mutation::AddRailStation => &mut self.add_rail_station,
            Mutation::ImproveWorstResidence => &mut self.improve_worst_residence,
            Mutation::RemoveAndCompensate => &mut self.remove_and_compensate,
            Mutation::PruneUselessService => &mut self.prune_useless_service,
            Mutation::AddRandom => &mut self.add_random,
            Mutation::RemoveRandom => &mut self.remove_random,
            Mutation::MoveRandom => &mut self.move_random,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        Mutation::ALL.iter().map(|&m| self.weight(m)).sum()
    }

    /// Validates the weights.
    pub fn validate(&self) -> Result<()> {
        for m in Mutation::ALL {
            let w = self.weight(m);
            if !w.is_finite() || w < 0.0 {
                return Err(CityError::InvalidConfig(format!(
                    "{m} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        let total = self.total();
        if total <= 0.0 {
            return Err(CityError::InvalidConfig(
                "at least one mutation weight must be positive".into(),
            ));
        }
        if !total.is_finite() {
            return Err(CityError::InvalidConfig(format!(
                "mutation weights must have a finite sum, got {total}"
            )));
        }
        Ok(())
    }

    /// Roulette-wheel selection. Operators with zero weight are never
    /// picked. Falls back to [`Mutation::ExtendRoad`] when every weight is
    /// zero.
    pub fn select<R: Rng>(&self, rng: &mut R) -> Mutation {
        let total = self.total();
        if total <= 0.0 {
            return Mutation::ExtendRoad;
        }

        let mut roll = rng.random_range(0.0..total);
        let mut last = Mutation::ExtendRoad;
        for m in Mutation::ALL {
            let w = self.weight(m);
            if w <= 0.0 {
                continue;
            }
            if roll < w {
                return m;
            }
            roll -= w;
            last = m;
        }
        last
    }
}
