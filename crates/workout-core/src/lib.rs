//! # Workout Core Library
//!
//! Computes workout statistics from raw sensor readings and renders a
//! one-line summary per training. The `workout-cli` binary is a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Training**: activity records and their distance, speed and calorie
//!   formulas, dispatched over an enum
//! - **Package**: maps a short activity code and positional sensor values to
//!   a training, with arity and type checks
//! - **Message**: fixed-template summary of computed metrics
//! - **Config**: TOML-based user configuration
//!
//! ## Key Components
//!
//! - [`Training`]: activity variants and their metrics
//! - [`read_package`]: code-to-training dispatcher
//! - [`InfoMessage`]: summary rendering
//! - [`Config`]: configuration management

pub mod config;
pub mod error;
pub mod message;
pub mod package;
pub mod training;

pub use config::{Config, LoggingConfig, OutputConfig, OutputFormat};
pub use error::{ConfigError, CoreError, MetricsError, PackageError, ValidationError};
pub use message::InfoMessage;
pub use package::{demo_packages, process_packages, read_package, PackageFile, SensorPackage};
pub use training::{Running, SportsWalking, Swimming, Training, TrainingKind, Workout};
