//! Activity records and metric formulas.
//!
//! Every training shares the same raw inputs ([`Workout`]): the number of
//! actions recorded by the sensor (steps or strokes), the duration in hours
//! and the athlete's weight. Concrete activities add their own fields and
//! override the formulas they need; [`Training`] dispatches over them.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MetricsError, PackageError, ValidationError};
use crate::message::InfoMessage;

/// Length of one step in metres.
pub const LEN_STEP: f64 = 0.65;
/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Raw sensor inputs common to every training.
///
/// Only constructible through [`Workout::new`], so duration and weight are
/// always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Workout {
    /// Steps or strokes recorded by the sensor
    action: u64,
    /// Duration in hours, strictly positive
    duration_h: f64,
    /// Athlete weight in kilograms
    weight_kg: f64,
}

impl Workout {
    /// Create a workout record.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or weight is not a positive finite number.
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Result<Self, ValidationError> {
        ensure_positive("duration", duration_h)?;
        ensure_positive("weight", weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Distance in kilometres for a given step length in metres.
    pub fn distance_with_step(&self, len_step: f64) -> f64 {
        self.action as f64 * len_step / M_IN_KM
    }

    /// Distance in kilometres using the default step length.
    pub fn distance(&self) -> f64 {
        self.distance_with_step(LEN_STEP)
    }

    /// Mean speed in km/h for a distance covered during this workout.
    pub fn speed_for(&self, distance_km: f64) -> f64 {
        distance_km / self.duration_h
    }

    /// Mean speed in km/h using the default step length.
    pub fn mean_speed(&self) -> f64 {
        self.speed_for(self.distance())
    }

    /// Duration in whole minutes, rounded half to even.
    pub fn duration_min(&self) -> f64 {
        (self.duration_h * MIN_IN_HOUR).round_ties_even()
    }
}

pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::invalid(
            field,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Activity codes understood by the package dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl TrainingKind {
    pub const ALL: [TrainingKind; 3] = [
        TrainingKind::Swimming,
        TrainingKind::Running,
        TrainingKind::SportsWalking,
    ];

    /// Short code used in sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            TrainingKind::Running => "RUN",
            TrainingKind::SportsWalking => "WLK",
            TrainingKind::Swimming => "SWM",
        }
    }

    /// Label printed in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            TrainingKind::Running => "Running",
            TrainingKind::SportsWalking => "SportsWalking",
            TrainingKind::Swimming => "Swimming",
        }
    }

    /// Names of the positional values a package of this kind carries.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            TrainingKind::Running => &["action", "duration", "weight"],
            TrainingKind::SportsWalking => &["action", "duration", "weight", "height"],
            TrainingKind::Swimming => {
                &["action", "duration", "weight", "length_pool", "count_pool"]
            }
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(self) -> usize {
        self.fields().len()
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TrainingKind {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrainingKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| PackageError::UnknownCode(s.to_string()))
    }
}

/// A training session with its activity-specific inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Training {
    /// Base record with no activity attached. Distance and speed use the
    /// default step length; calories are undefined.
    Generic(Workout),
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    /// Common inputs of this training.
    pub fn workout(&self) -> &Workout {
        match self {
            Training::Generic(w) => w,
            Training::Running(r) => r.workout(),
            Training::SportsWalking(w) => w.workout(),
            Training::Swimming(s) => s.workout(),
        }
    }

    /// Activity kind, `None` for the generic base record.
    pub fn kind(&self) -> Option<TrainingKind> {
        match self {
            Training::Generic(_) => None,
            Training::Running(_) => Some(TrainingKind::Running),
            Training::SportsWalking(_) => Some(TrainingKind::SportsWalking),
            Training::Swimming(_) => Some(TrainingKind::Swimming),
        }
    }

    /// Label printed in the summary line.
    pub fn label(&self) -> &'static str {
        self.kind().map_or("Training", TrainingKind::label)
    }

    /// Distance covered in kilometres.
    pub fn distance(&self) -> f64 {
        match self {
            Training::Generic(w) => w.distance(),
            Training::Running(r) => r.distance(),
            Training::SportsWalking(w) => w.distance(),
            Training::Swimming(s) => s.distance(),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Generic(w) => w.mean_speed(),
            Training::Running(r) => r.mean_speed(),
            Training::SportsWalking(w) => w.mean_speed(),
            Training::Swimming(s) => s.mean_speed(),
        }
    }

    /// Calories spent in kcal.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::CaloriesNotImplemented`] for the generic base record.
    pub fn spent_calories(&self) -> Result<f64, MetricsError> {
        match self {
            Training::Generic(_) => Err(MetricsError::CaloriesNotImplemented {
                training: self.label(),
            }),
            Training::Running(r) => Ok(r.spent_calories()),
            Training::SportsWalking(w) => Ok(w.spent_calories()),
            Training::Swimming(s) => Ok(s.spent_calories()),
        }
    }

    /// Compute every metric once and pack them into a message.
    ///
    /// # Errors
    ///
    /// Returns an error if calories cannot be computed for this training.
    pub fn show_training_info(&self) -> Result<InfoMessage, MetricsError> {
        Ok(InfoMessage {
            training_type: self.label().to_string(),
            duration: self.workout().duration_h(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories()?,
        })
    }
}

impl From<Workout> for Training {
    fn from(workout: Workout) -> Self {
        Training::Generic(workout)
    }
}

impl From<Running> for Training {
    fn from(running: Running) -> Self {
        Training::Running(running)
    }
}

impl From<SportsWalking> for Training {
    fn from(walking: SportsWalking) -> Self {
        Training::SportsWalking(walking)
    }
}

impl From<Swimming> for Training {
    fn from(swimming: Swimming) -> Self {
        Training::Swimming(swimming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn workout_rejects_non_positive_duration() {
        assert!(Workout::new(100, 0.0, 70.0).is_err());
        assert!(Workout::new(100, -1.0, 70.0).is_err());
        assert!(Workout::new(100, f64::NAN, 70.0).is_err());
    }

    #[test]
    fn workout_rejects_non_positive_weight() {
        let err = Workout::new(100, 1.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn duration_min_rounds_half_to_even() {
        // 7.5 min and 22.5 min are exact in binary
        assert_eq!(Workout::new(1, 0.125, 70.0).unwrap().duration_min(), 8.0);
        assert_eq!(Workout::new(1, 0.375, 70.0).unwrap().duration_min(), 22.0);
        assert_eq!(Workout::new(1, 1.0, 70.0).unwrap().duration_min(), 60.0);
        assert_eq!(Workout::new(1, 0.5, 70.0).unwrap().duration_min(), 30.0);
    }

    #[test]
    fn generic_training_distance_and_speed() {
        let training = Training::from(Workout::new(1000, 0.5, 70.0).unwrap());
        assert!(approx(training.distance(), 0.65));
        assert!(approx(training.mean_speed(), 1.3));
        assert_eq!(training.label(), "Training");
        assert_eq!(training.kind(), None);
    }

    #[test]
    fn generic_training_calories_not_implemented() {
        let training = Training::from(Workout::new(1000, 0.5, 70.0).unwrap());
        assert_eq!(
            training.spent_calories(),
            Err(MetricsError::CaloriesNotImplemented { training: "Training" })
        );
        assert!(training.show_training_info().is_err());
    }

    #[test]
    fn kind_codes_parse() {
        assert_eq!("RUN".parse::<TrainingKind>().unwrap(), TrainingKind::Running);
        assert_eq!("WLK".parse::<TrainingKind>().unwrap(), TrainingKind::SportsWalking);
        assert_eq!("SWM".parse::<TrainingKind>().unwrap(), TrainingKind::Swimming);
        assert!("run".parse::<TrainingKind>().is_err());
        assert_eq!(
            "XYZ".parse::<TrainingKind>(),
            Err(PackageError::UnknownCode("XYZ".into()))
        );
    }

    #[test]
    fn kind_arity() {
        assert_eq!(TrainingKind::Running.arity(), 3);
        assert_eq!(TrainingKind::SportsWalking.arity(), 4);
        assert_eq!(TrainingKind::Swimming.arity(), 5);
    }

    #[test]
    fn training_serializes_with_type_tag() {
        let training = Training::from(Running::new(Workout::new(15000, 1.0, 75.0).unwrap()));
        let json = serde_json::to_value(training).unwrap();
        assert_eq!(json["type"], "running");
        assert_eq!(json["workout"]["action"], 15000);
    }
}
