use crate::validate::ValidatedInputs;

/// Column names the regression model was trained against, in the order
/// the model expects them. The `remainder__` prefix comes from the
/// preprocessing pipeline that produced the model; a model file whose
/// columns differ is refused at load time.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "remainder__Weekly_Study_Time",
    "remainder__Absences",
    "remainder__Absence_Rate",
    "remainder__Absence_Impact",
    "remainder__Study_Impact",
];

/// Substitute denominator used when a divisor would be zero.
///
/// The model was trained on features derived with this exact constant,
/// so it must be preserved for output compatibility.
const ZERO_DIVISOR_SUBSTITUTE: f64 = 0.01;

/// The fixed-shape numeric row fed to the trained model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub study_time: f64,
    pub absences: f64,
    pub absence_rate: f64,
    pub absence_impact: f64,
    pub study_impact: f64,
}

impl FeatureVector {
    /// Derives the feature vector from validated inputs.
    ///
    /// Pure and deterministic: the same inputs always produce the same
    /// vector. Denominators are guarded, so there are no error cases.
    pub fn from_inputs(inputs: &ValidatedInputs) -> Self {
        let study_time = inputs.study_time as f64;
        let absences = inputs.absences as f64;
        let gpa = inputs.gpa;

        let absence_rate = absences / 30.0;

        let absence_impact = if inputs.absences == 0 {
            gpa / ZERO_DIVISOR_SUBSTITUTE
        } else {
            gpa / absences
        };

        // Only reachable with study_time == 0 when the positivity check
        // is bypassed; the product is then 0 by construction.
        let study_impact = if inputs.study_time == 0 {
            study_time * ZERO_DIVISOR_SUBSTITUTE
        } else {
            study_time * gpa
        };

        Self { study_time, absences, absence_rate, absence_impact, study_impact }
    }

    /// Returns the vector as a flat row in [`FEATURE_COLUMNS`] order.
    pub fn as_row(&self) -> [f64; 5] {
        [
            self.study_time,
            self.absences,
            self.absence_rate,
            self.absence_impact,
            self.study_impact,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(age: i64, study_time: i64, absences: i64, gpa: f64) -> ValidatedInputs {
        ValidatedInputs { name: "test".into(), age, study_time, absences, gpa }
    }

    #[test]
    fn worked_example() {
        let fv = FeatureVector::from_inputs(&inputs(16, 10, 2, 3.5));
        assert!((fv.absence_rate - 2.0 / 30.0).abs() < 1e-12);
        assert!((fv.absence_impact - 1.75).abs() < 1e-12);
        assert!((fv.study_impact - 35.0).abs() < 1e-12);
    }

    #[test]
    fn zero_absences_uses_substitute_denominator() {
        let fv = FeatureVector::from_inputs(&inputs(16, 10, 0, 3.5));
        assert!((fv.absence_impact - 3.5 / 0.01).abs() < 1e-12);
        assert!(fv.absence_impact.is_finite());
    }

    #[test]
    fn zero_study_time_yields_zero_impact() {
        // Positivity check bypassed on purpose.
        let fv = FeatureVector::from_inputs(&inputs(16, 0, 2, 3.5));
        assert_eq!(fv.study_impact, 0.0);
    }

    #[test]
    fn derivation_is_bit_identical() {
        let i = inputs(20, 7, 13, 2.9);
        let a = FeatureVector::from_inputs(&i);
        let b = FeatureVector::from_inputs(&i);
        assert_eq!(a.as_row(), b.as_row());
    }

    #[test]
    fn row_order_matches_columns() {
        let fv = FeatureVector::from_inputs(&inputs(16, 10, 2, 3.5));
        let row = fv.as_row();
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        assert_eq!(row[0], fv.study_time);
        assert_eq!(row[4], fv.study_impact);
    }
}
