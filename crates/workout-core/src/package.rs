//! Sensor packages and the dispatcher that turns them into trainings.
//!
//! A package is an activity code plus an ordered list of numbers, in the
//! order the sensor reports them:
//!
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height
//! - `SWM`: action, duration, weight, length_pool, count_pool

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, PackageError};
use crate::message::InfoMessage;
use crate::training::{Running, SportsWalking, Swimming, Training, TrainingKind, Workout};

/// Raw package as received from a sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Build the training described by this package.
    ///
    /// # Errors
    ///
    /// See [`read_package`].
    pub fn read(&self) -> Result<Training, PackageError> {
        read_package(&self.code, &self.data)
    }
}

/// Batch document holding several packages.
///
/// JSON: `{"packages": [{"code": "RUN", "data": [15000, 1, 75]}]}`
/// TOML: `[[packages]]` tables with the same keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageFile {
    #[serde(default)]
    pub packages: Vec<SensorPackage>,
}

impl PackageFile {
    /// # Errors
    ///
    /// Returns an error if the document is not a valid JSON batch.
    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(s)?)
    }

    /// # Errors
    ///
    /// Returns an error if the document is not a valid TOML batch.
    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(s)?)
    }
}

/// Get a training from sensor data.
///
/// # Errors
///
/// Returns an error if the code is unknown, the number of values does not
/// match the activity, a count is not a non-negative integer, or a
/// measurement breaks a domain invariant (non-positive duration, weight,
/// height or pool length).
pub fn read_package(code: &str, data: &[f64]) -> Result<Training, PackageError> {
    let kind: TrainingKind = code.parse().inspect_err(|_| {
        tracing::warn!(code, "rejected package with unknown workout type");
    })?;

    if data.len() != kind.arity() {
        tracing::warn!(code, expected = kind.arity(), got = data.len(), "rejected package");
        return Err(PackageError::Arity {
            code: code.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let fields = kind.fields();
    let count = |i: usize| as_count(kind, fields[i], data[i]);
    let number = |i: usize| as_number(kind, fields[i], data[i]);

    let workout = Workout::new(count(0)?, number(1)?, number(2)?)?;
    let training = match kind {
        TrainingKind::Running => Training::from(Running::new(workout)),
        TrainingKind::SportsWalking => Training::from(SportsWalking::new(workout, number(3)?)?),
        TrainingKind::Swimming => {
            Training::from(Swimming::new(workout, number(3)?, count(4)?)?)
        }
    };
    tracing::debug!(code, ?training, "package read");
    Ok(training)
}

fn as_number(kind: TrainingKind, field: &'static str, value: f64) -> Result<f64, PackageError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PackageError::InvalidValue {
            code: kind.code().to_string(),
            field,
            value,
        })
    }
}

fn as_count(kind: TrainingKind, field: &'static str, value: f64) -> Result<u64, PackageError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(PackageError::InvalidValue {
            code: kind.code().to_string(),
            field,
            value,
        })
    }
}

/// Read every package in order and compute its summary.
///
/// Stops at the first package that cannot be read or measured.
///
/// # Errors
///
/// Returns the error of the first failing package.
pub fn process_packages(packages: &[SensorPackage]) -> Result<Vec<InfoMessage>, CoreError> {
    packages
        .iter()
        .map(|package| -> Result<InfoMessage, CoreError> {
            let training = package.read()?;
            Ok(training.show_training_info()?)
        })
        .collect()
}

/// Sample packages matching a typical sensor session.
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn dispatches_by_code() {
        assert_eq!(read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap().label(), "Running");
        assert_eq!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap().label(),
            "SportsWalking"
        );
        assert_eq!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap().label(),
            "Swimming"
        );
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert_eq!(
            read_package("XYZ", &[1.0, 1.0, 1.0]),
            Err(PackageError::UnknownCode("XYZ".into()))
        );
    }

    #[test]
    fn wrong_arity_is_an_error() {
        assert_eq!(
            read_package("RUN", &[15000.0, 1.0]),
            Err(PackageError::Arity {
                code: "RUN".into(),
                expected: 3,
                got: 2
            })
        );
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0]),
            Err(PackageError::Arity { expected: 4, got: 3, .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]),
            Err(PackageError::Arity { expected: 5, got: 6, .. })
        ));
    }

    #[test]
    fn fractional_count_is_an_error() {
        assert!(matches!(
            read_package("RUN", &[15000.5, 1.0, 75.0]),
            Err(PackageError::InvalidValue { field: "action", .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
            Err(PackageError::InvalidValue { field: "count_pool", .. })
        ));
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(PackageError::InvalidValue { field: "action", .. })
        ));
    }

    #[test]
    fn non_finite_value_is_an_error() {
        assert!(matches!(
            read_package("RUN", &[1.0, f64::NAN, 75.0]),
            Err(PackageError::InvalidValue { field: "duration", .. })
        ));
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, f64::INFINITY]),
            Err(PackageError::InvalidValue { field: "height", .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, f64::NEG_INFINITY, 25.0, 40.0]),
            Err(PackageError::InvalidValue { field: "weight", .. })
        ));
    }

    #[test]
    fn count_beyond_u64_is_an_error() {
        assert!(matches!(
            read_package("RUN", &[2f64.powi(64), 1.0, 75.0]),
            Err(PackageError::InvalidValue { field: "action", .. })
        ));
        assert!(read_package("RUN", &[2f64.powi(53), 1.0, 75.0]).is_ok());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            PackageError::Validation(ValidationError::InvalidValue { ref field, .. }) if field == "duration"
        ));
    }

    #[test]
    fn process_packages_keeps_order() {
        let messages = process_packages(&demo_packages()).unwrap();
        let labels: Vec<_> = messages.iter().map(|m| m.training_type.as_str()).collect();
        assert_eq!(labels, ["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn process_packages_stops_on_first_error() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0]),
        ];
        let err = process_packages(&packages).unwrap_err();
        assert!(matches!(err, CoreError::Package(PackageError::UnknownCode(_))));
    }

    #[test]
    fn package_file_from_json() {
        let file = PackageFile::from_json_str(
            r#"{"packages": [{"code": "RUN", "data": [15000, 1, 75]}]}"#,
        )
        .unwrap();
        assert_eq!(file.packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]);
    }
}
