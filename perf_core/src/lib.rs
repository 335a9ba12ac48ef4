mod dataset;
mod features;
mod model;
mod scoreboard;
mod userlog;
mod validate;

pub use dataset::{ColumnKind, Dataset, DatasetError, Histogram};
pub use features::{FeatureVector, FEATURE_COLUMNS};
pub use model::{round3, LinearModel, ModelError, Predictor, Regressor};
pub use scoreboard::{ModelScore, MODEL_SCOREBOARD};
pub use userlog::SubmissionLog;
pub use validate::{validate, Field, RawSubmission, ValidatedInputs, ValidationError};
pub use validate::{parse_absences, parse_age, parse_gpa, parse_name, parse_study_time};
