use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, FEATURE_COLUMNS};

/// Errors produced while loading or invoking the regression model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The model never loaded; carries the startup failure reason.
    Unavailable(String),

    /// The model file parsed but is not a usable model.
    Malformed(String),

    /// A stored column name differs from what the features produce.
    ColumnMismatch {
        index: usize,
        got: String,
        expected: &'static str,
    },

    /// A shape invariant was violated (e.g. weight count vs columns).
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    /// The underlying predict call failed.
    Prediction(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Unavailable(reason) => write!(f, "model unavailable: {reason}"),
            ModelError::Malformed(msg) => write!(f, "malformed model: {msg}"),
            ModelError::ColumnMismatch { index, got, expected } => {
                write!(f, "column {index}: model was trained on '{got}', expected '{expected}'")
            }
            ModelError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            ModelError::Prediction(msg) => write!(f, "prediction failed: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

/// The injected prediction capability.
///
/// A `Regressor` maps one feature row to one raw score. It does not
/// post-process the score and it holds no per-call state.
pub trait Regressor {
    /// Predicts a raw score for a single feature row.
    ///
    /// # Errors
    /// Returns `ModelError` if the row shape is wrong or the underlying
    /// call fails.
    fn predict(&self, row: &[f64]) -> Result<f64, ModelError>;
}

/// A linear regression deserialized from a JSON model file:
/// `{ "columns": [...], "weights": [...], "intercept": b }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    columns: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Builds a model, verifying the column contract up front.
    ///
    /// # Errors
    /// Returns `ColumnMismatch` if the stored column list differs from
    /// [`FEATURE_COLUMNS`] in name or order, `ShapeMismatch` if the
    /// weight count does not match.
    pub fn new(columns: Vec<String>, weights: Vec<f64>, intercept: f64) -> Result<Self, ModelError> {
        let model = Self { columns, weights, intercept };
        model.verify()?;
        Ok(model)
    }

    /// Loads a model from a JSON file.
    ///
    /// # Errors
    /// Returns `Unavailable` if the file cannot be read, `Malformed` if
    /// it is not valid JSON, plus the checks of [`LinearModel::new`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Unavailable(format!("cannot read '{}': {e}", path.display())))?;

        let model: Self = serde_json::from_str(&content)
            .map_err(|e| ModelError::Malformed(format!("invalid JSON: {e}")))?;

        model.verify()?;
        log::info!("loaded regression model from '{}'", path.display());
        Ok(model)
    }

    fn verify(&self) -> Result<(), ModelError> {
        if self.columns.len() != FEATURE_COLUMNS.len() {
            return Err(ModelError::ShapeMismatch {
                what: "columns",
                got: self.columns.len(),
                expected: FEATURE_COLUMNS.len(),
            });
        }
        for (index, (got, expected)) in
            self.columns.iter().zip(FEATURE_COLUMNS.iter()).enumerate()
        {
            if got != expected {
                return Err(ModelError::ColumnMismatch { index, got: got.clone(), expected });
            }
        }
        if self.weights.len() != self.columns.len() {
            return Err(ModelError::ShapeMismatch {
                what: "weights",
                got: self.weights.len(),
                expected: self.columns.len(),
            });
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.weights.len() {
            return Err(ModelError::ShapeMismatch {
                what: "feature row",
                got: row.len(),
                expected: self.weights.len(),
            });
        }
        let dot: f64 = self.weights.iter().zip(row.iter()).map(|(w, x)| w * x).sum();
        let raw = dot + self.intercept;
        if !raw.is_finite() {
            return Err(ModelError::Prediction(format!("non-finite score: {raw}")));
        }
        Ok(raw)
    }
}

/// Rounds to exactly 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Single-shot prediction front end.
///
/// Holds the outcome of the startup model load; a failed load is
/// reported on every predict attempt as `Unavailable` — no retry.
pub struct Predictor {
    model: Result<Box<dyn Regressor>, ModelError>,
}

impl Predictor {
    /// Creates a predictor by loading the model file once.
    pub fn from_path(path: &Path) -> Self {
        let model = match LinearModel::load(path) {
            Ok(m) => Ok(Box::new(m) as Box<dyn Regressor>),
            Err(e) => {
                log::warn!("model load failed: {e}");
                Err(e)
            }
        };
        Self { model }
    }

    /// Creates a predictor around an already-built model.
    pub fn with_model(model: Box<dyn Regressor>) -> Self {
        Self { model: Ok(model) }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_ok()
    }

    /// Predicts the performance score for a feature vector.
    ///
    /// Applies the fixed post-transform `round3(sqrt(max(raw, 0)))`, so
    /// the result is always non-negative with 3 decimal places.
    ///
    /// # Errors
    /// Returns `Unavailable` if the model never loaded, or the error of
    /// the underlying predict call.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let model = match &self.model {
            Ok(m) => m,
            Err(e) => {
                return Err(match e {
                    ModelError::Unavailable(_) => e.clone(),
                    other => ModelError::Unavailable(other.to_string()),
                })
            }
        };

        let raw = model.predict(&features.as_row())?;
        Ok(round3(raw.max(0.0).sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidatedInputs;

    fn columns() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn features() -> FeatureVector {
        FeatureVector::from_inputs(&ValidatedInputs {
            name: "test".into(),
            age: 16,
            study_time: 10,
            absences: 2,
            gpa: 3.5,
        })
    }

    #[test]
    fn linear_model_is_a_dot_product() {
        let model = LinearModel::new(columns(), vec![1.0, 0.0, 0.0, 0.0, 0.0], 2.0).unwrap();
        // study_time = 10 → 10*1 + 2 = 12
        assert!((model.predict(&features().as_row()).unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn wrong_column_name_is_refused() {
        let mut cols = columns();
        cols[2] = "Absence_Rate".into();
        let err = LinearModel::new(cols, vec![0.0; 5], 0.0).unwrap_err();
        assert!(matches!(err, ModelError::ColumnMismatch { index: 2, .. }));
    }

    #[test]
    fn wrong_weight_count_is_refused() {
        let err = LinearModel::new(columns(), vec![0.0; 4], 0.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch { what: "weights", got: 4, expected: 5 }
        ));
    }

    #[test]
    fn missing_file_surfaces_as_unavailable() {
        let predictor = Predictor::from_path(Path::new("no/such/model.json"));
        assert!(!predictor.is_available());
        let err = predictor.predict(&features()).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
        // No retry: the second attempt fails identically.
        let again = predictor.predict(&features()).unwrap_err();
        assert_eq!(err, again);
    }

    #[test]
    fn negative_raw_scores_clamp_to_zero() {
        let model = LinearModel::new(columns(), vec![0.0; 5], -5.0).unwrap();
        let predictor = Predictor::with_model(Box::new(model));
        assert_eq!(predictor.predict(&features()).unwrap(), 0.0);
    }

    #[test]
    fn result_has_three_decimals_and_is_non_negative() {
        let model = LinearModel::new(columns(), vec![0.0; 5], 2.0).unwrap();
        let predictor = Predictor::with_model(Box::new(model));
        let score = predictor.predict(&features()).unwrap();
        // sqrt(2) = 1.41421... → 1.414
        assert_eq!(score, 1.414);
        assert!(score >= 0.0);
        assert_eq!(score, round3(score));
    }

    #[test]
    fn round3_behaves() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(1.2344), 1.234);
        assert_eq!(round3(0.0), 0.0);
    }

    struct Failing;

    impl Regressor for Failing {
        fn predict(&self, _row: &[f64]) -> Result<f64, ModelError> {
            Err(ModelError::Prediction("backend exploded".into()))
        }
    }

    #[test]
    fn underlying_failure_is_surfaced() {
        let predictor = Predictor::with_model(Box::new(Failing));
        let err = predictor.predict(&features()).unwrap_err();
        assert!(matches!(err, ModelError::Prediction(_)));
    }
}
