use serde::Serialize;

use super::{ensure_positive, Workout};
use crate::error::ValidationError;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking: default step length, calories depend on height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    workout: Workout,
    /// Athlete height in centimetres
    height_cm: f64,
}

impl SportsWalking {
    /// # Errors
    ///
    /// Returns an error if the height is not a positive finite number.
    pub fn new(workout: Workout, height_cm: f64) -> Result<Self, ValidationError> {
        ensure_positive("height", height_cm)?;
        Ok(Self { workout, height_cm })
    }

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn distance(&self) -> f64 {
        self.workout.distance()
    }

    pub fn mean_speed(&self) -> f64 {
        self.workout.mean_speed()
    }

    /// `(0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * minutes`
    ///
    /// The speed/height term is floored, not rounded.
    pub fn spent_calories(&self) -> f64 {
        let weight = self.workout.weight_kg;
        let speed_term = (self.mean_speed().powi(2) / self.height_cm).floor();
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.workout.duration_min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(action: u64, duration_h: f64, weight_kg: f64, height_cm: f64) -> SportsWalking {
        SportsWalking::new(Workout::new(action, duration_h, weight_kg).unwrap(), height_cm).unwrap()
    }

    #[test]
    fn reference_walk() {
        let w = walking(9000, 1.0, 75.0, 180.0);
        assert!((w.distance() - 5.85).abs() < 1e-9);
        assert!((w.mean_speed() - 5.85).abs() < 1e-9);
        // 5.85^2 / 180 = 0.19 floors to 0
        assert!((w.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn speed_term_is_floored() {
        // 20000 steps in 0.5 h -> 26 km/h, 676 / 150 = 4.506 -> 4
        let w = walking(20000, 0.5, 60.0, 150.0);
        let expected = (0.035 * 60.0 + 4.0 * 0.029 * 60.0) * 30.0;
        assert!((w.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_height() {
        let workout = Workout::new(9000, 1.0, 75.0).unwrap();
        assert!(SportsWalking::new(workout, 0.0).is_err());
    }
}
