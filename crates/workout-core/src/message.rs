//! Summary message for a finished training.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrics of one training, computed once and rendered with a fixed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training label (e.g. "Running")
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometres
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Calories spent in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line. Every number gets exactly three decimals.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
