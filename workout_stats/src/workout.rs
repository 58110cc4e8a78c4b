use crate::summary::Summary;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, meters. Shared by running and walking.
const STEP_LEN_M: f64 = 0.65;
/// Distance covered by one stroke, meters.
const STROKE_LEN_M: f64 = 1.38;

// Calibration constants for the calorie formulas. There is no physical
// derivation behind these numbers.
const RUN_CAL_SPEED_RATIO: f64 = 18.0;
const RUN_CAL_SPEED_SHIFT: f64 = 20.0;
const WALK_CAL_WEIGHT_RATIO: f64 = 0.035;
const WALK_CAL_SPEED_HEIGHT_RATIO: f64 = 0.029;
const SWIM_CAL_SPEED_SHIFT: f64 = 1.1;
const SWIM_CAL_WEIGHT_RATIO: f64 = 2.0;

/// One recorded training session.
///
/// `action` is the step count for running and walking and the stroke
/// count for swimming. Durations are in hours, weight in kilograms.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Workout {
    Running {
        action: u64,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    pub const fn training_type(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::SportsWalking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    pub const fn action(&self) -> u64 {
        match *self {
            Workout::Running { action, .. }
            | Workout::SportsWalking { action, .. }
            | Workout::Swimming { action, .. } => action,
        }
    }

    pub const fn duration_h(&self) -> f64 {
        match *self {
            Workout::Running { duration_h, .. }
            | Workout::SportsWalking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => duration_h,
        }
    }

    pub const fn weight_kg(&self) -> f64 {
        match *self {
            Workout::Running { weight_kg, .. }
            | Workout::SportsWalking { weight_kg, .. }
            | Workout::Swimming { weight_kg, .. } => weight_kg,
        }
    }

    const fn action_len_m(&self) -> f64 {
        match self {
            Workout::Running { .. } | Workout::SportsWalking { .. } => STEP_LEN_M,
            Workout::Swimming { .. } => STROKE_LEN_M,
        }
    }

    /// Distance covered during the session, km.
    pub fn distance_km(&self) -> f64 {
        self.action() as f64 * self.action_len_m() / M_IN_KM
    }

    /// Mean speed over the full session, km/h.
    ///
    /// Swimming derives speed from the pool length and lap count
    /// instead of the stroke distance.
    pub fn mean_speed_kmh(&self) -> f64 {
        match *self {
            Workout::Swimming {
                duration_h,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * f64::from(pool_laps) / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Calories burnt during the session, kcal.
    pub fn calories_kcal(&self) -> f64 {
        match *self {
            Workout::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_CAL_SPEED_RATIO * self.mean_speed_kmh() - RUN_CAL_SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * duration_h
                    * MIN_IN_H
            }
            Workout::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                // The floor of the speed-squared/height quotient is part
                // of the formula, not a rounding shortcut.
                (WALK_CAL_WEIGHT_RATIO * weight_kg
                    + (self.mean_speed_kmh().powi(2) / height_cm).floor()
                        * WALK_CAL_SPEED_HEIGHT_RATIO
                        * weight_kg)
                    * duration_h
                    * MIN_IN_H
            }
            Workout::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + SWIM_CAL_SPEED_SHIFT) * SWIM_CAL_WEIGHT_RATIO * weight_kg
            }
        }
    }

    /// Compute every derived metric once and return the session record.
    pub fn summary(&self) -> Summary {
        Summary {
            training_type: self.training_type(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn running_sample() {
        let workout = Workout::Running {
            action: 15000,
            duration_h: 1.0,
            weight_kg: 75.0,
        };

        assert_close(workout.distance_km(), 9.75);
        assert_close(workout.mean_speed_kmh(), 9.75);
        assert_close(workout.calories_kcal(), (18.0 * 9.75 - 20.0) * 75.0 / 1000.0 * 60.0);
    }

    #[test]
    fn walking_sample() {
        let workout = Workout::SportsWalking {
            action: 9000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };

        assert_close(workout.distance_km(), 5.85);
        assert_close(workout.mean_speed_kmh(), 5.85);
        // speed^2 / height floors to zero here, only the weight term remains
        assert_close(workout.calories_kcal(), 0.035 * 75.0 * 60.0);
    }

    #[test]
    fn walking_floors_speed_height_quotient() {
        let workout = Workout::SportsWalking {
            action: 9000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 30.0,
        };

        // 5.85^2 / 30 = 1.1407..., the formula keeps 1.0, not 1.1407
        assert_close(
            workout.calories_kcal(),
            (0.035 * 75.0 + 1.0 * 0.029 * 75.0) * 60.0,
        );
    }

    #[test]
    fn swimming_sample() {
        let workout = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        };

        assert_close(workout.distance_km(), 0.9936);
        assert_close(workout.mean_speed_kmh(), 1.0);
        assert_close(workout.calories_kcal(), (1.0 + 1.1) * 2.0 * 80.0);
    }

    #[test]
    fn swimming_speed_ignores_stroke_distance() {
        let workout = Workout::Swimming {
            action: 0,
            duration_h: 2.0,
            weight_kg: 80.0,
            pool_length_m: 50.0,
            pool_laps: 20,
        };

        assert_close(workout.distance_km(), 0.0);
        assert_close(workout.mean_speed_kmh(), 0.5);
    }

    #[test]
    fn zero_duration_propagates_without_panic() {
        let workout = Workout::Running {
            action: 100,
            duration_h: 0.0,
            weight_kg: 75.0,
        };

        assert!(!workout.mean_speed_kmh().is_finite());
        assert!(!workout.calories_kcal().is_finite());
    }
}
