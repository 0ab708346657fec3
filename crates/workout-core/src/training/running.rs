use serde::Serialize;

use super::{Workout, M_IN_KM};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running: default step length, calories grow linearly with speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    workout: Workout,
}

impl Running {
    pub fn new(workout: Workout) -> Self {
        Self { workout }
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn distance(&self) -> f64 {
        self.workout.distance()
    }

    pub fn mean_speed(&self) -> f64 {
        self.workout.mean_speed()
    }

    /// `(18 * speed - 20) * weight / 1000 * minutes`
    pub fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.workout.weight_kg
            / M_IN_KM
            * self.workout.duration_min()
    }
}
