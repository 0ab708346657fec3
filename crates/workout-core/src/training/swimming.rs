use serde::Serialize;

use super::{ensure_positive, Workout, M_IN_KM};
use crate::error::ValidationError;

/// Length of one stroke in metres.
pub const LEN_STROKE: f64 = 1.38;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming: distance from strokes, speed from pool laps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    workout: Workout,
    /// Pool length in metres
    pool_length_m: f64,
    /// Number of pool lengths swum
    pool_count: u64,
}

impl Swimming {
    /// # Errors
    ///
    /// Returns an error if the pool length is not a positive finite number.
    pub fn new(
        workout: Workout,
        pool_length_m: f64,
        pool_count: u64,
    ) -> Result<Self, ValidationError> {
        ensure_positive("length_pool", pool_length_m)?;
        Ok(Self {
            workout,
            pool_length_m,
            pool_count,
        })
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u64 {
        self.pool_count
    }

    pub fn distance(&self) -> f64 {
        self.workout.distance_with_step(LEN_STROKE)
    }

    /// Speed over the laps, not over the stroke distance.
    pub fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.workout.duration_h
    }

    /// `(speed + 1.1) * 2 * weight`
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.workout.weight_kg
    }
}
