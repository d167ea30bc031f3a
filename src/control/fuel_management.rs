use log::{debug, info};
use nalgebra::Matrix3;

use super::launch_stages::{BoosterStage, ThrustContribution};

/// Ordered booster stages burned one after another.
///
/// The cursor only ever moves forward, one stage per staging event, and
/// stops at `len()` once every stage has burned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuelScheduler {
    stages: Vec<BoosterStage>,
    cursor: usize,
}

impl FuelScheduler {
    pub fn new(stages: Vec<BoosterStage>) -> Self {
        FuelScheduler { stages, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> &[BoosterStage] {
        &self.stages
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.stages.len()
    }

    pub fn remaining_stages(&self) -> usize {
        self.stages.len() - self.cursor
    }

    /// The stage currently burning, `None` once exhausted.
    pub fn active_stage(&self) -> Option<&BoosterStage> {
        self.stages.get(self.cursor)
    }

    pub fn active_contribution(&self, rotation: &Matrix3<f64>) -> ThrustContribution {
        self.active_stage()
            .map_or_else(ThrustContribution::zero, |stage| stage.contribution(rotation))
    }

    /// Moves to the next stage when `step_count` lands on a staging boundary.
    /// Returns whether the cursor advanced.
    pub fn maybe_advance(&mut self, step_count: u64, steps_per_stage: u64) -> bool {
        if self.is_exhausted() || steps_per_stage == 0 || step_count % steps_per_stage != 0 {
            return false;
        }

        self.cursor += 1;
        debug!(
            "Fuel stage {} burned out at step {}, {} stages remaining",
            self.cursor,
            step_count,
            self.remaining_stages()
        );
        if self.is_exhausted() {
            info!("Fuel exhausted at step {}", step_count);
        }
        true
    }
}

impl FromIterator<BoosterStage> for FuelScheduler {
    fn from_iter<I: IntoIterator<Item = BoosterStage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
