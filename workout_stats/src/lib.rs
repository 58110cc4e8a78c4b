//! # Workout statistics
//!
//! Distance, mean speed and burnt calories for three training kinds,
//! computed from raw tracker readings (step or stroke count, session
//! duration, body weight and a couple of kind-specific parameters).
//!
//! Distance uses a per-kind action length:
//!
//! ```notrust
//! distance = action x len / 1000    // len = 0.65 m step, 1.38 m stroke
//! speed    = distance / duration
//! ```
//!
//! Swimming derives speed from the pool instead:
//!
//! ```notrust
//! speed = pool_length x laps / 1000 / duration
//! ```
//!
//! The calorie formulas are calibration formulas, the multipliers in
//! them have no stated physical meaning:
//!
//! ```notrust
//! running  = (18 x speed - 20) x weight / 1000 x duration x 60
//! walking  = (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x duration x 60
//! swimming = (speed + 1.1) x 2 x weight
//! ```
//!
//! Sessions arrive as packages, a short kind code plus a positional
//! parameter list. [`read_package`] turns a package into a [`Workout`],
//! [`Workout::summary`] computes the metrics and [`Summary`] renders
//! the report line.

mod summary;
mod workout;

pub use self::summary::Summary;
pub use self::workout::Workout;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackageError {
    #[error("unknown workout type {0:?}, expected one of RUN, WLK, SWM")]
    UnknownActivity(String),
    #[error("{workout_type} package expects {expected} parameters, got {got}")]
    InvalidArguments {
        workout_type: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Build a [`Workout`] from a tracker package.
///
/// Parameters are positional: action count, duration in hours and
/// weight in kilograms for every kind, then height in centimeters for
/// `WLK`, pool length in meters and lap count for `SWM`. Values are
/// not range-checked, a zero duration surfaces later as a non-finite
/// speed.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    match workout_type {
        "RUN" => match *data {
            [action, duration_h, weight_kg] => Ok(Workout::Running {
                action: action as u64,
                duration_h,
                weight_kg,
            }),
            _ => Err(PackageError::InvalidArguments {
                workout_type: "RUN",
                expected: 3,
                got: data.len(),
            }),
        },
        "WLK" => match *data {
            [action, duration_h, weight_kg, height_cm] => Ok(Workout::SportsWalking {
                action: action as u64,
                duration_h,
                weight_kg,
                height_cm,
            }),
            _ => Err(PackageError::InvalidArguments {
                workout_type: "WLK",
                expected: 4,
                got: data.len(),
            }),
        },
        "SWM" => match *data {
            [action, duration_h, weight_kg, pool_length_m, pool_laps] => Ok(Workout::Swimming {
                action: action as u64,
                duration_h,
                weight_kg,
                pool_length_m,
                pool_laps: pool_laps as u32,
            }),
            _ => Err(PackageError::InvalidArguments {
                workout_type: "SWM",
                expected: 5,
                got: data.len(),
            }),
        },
        _ => Err(PackageError::UnknownActivity(workout_type.to_owned())),
    }
}
