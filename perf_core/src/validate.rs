use std::fmt;

/// The five raw text fields captured from the form.
///
/// Ephemeral: built on each Submit and discarded after validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub name: String,
    pub age: String,
    pub study_time: String,
    pub absences: String,
    pub gpa: String,
}

/// Inputs that passed every field check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    pub name: String,
    pub age: i64,
    pub study_time: i64,
    pub absences: i64,
    pub gpa: f64,
}

/// Which form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    StudyTime,
    Absences,
    Gpa,
}

impl Field {
    /// User-facing label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::StudyTime => "Weekly Study Time",
            Field::Absences => "Absences",
            Field::Gpa => "GPA",
        }
    }
}

/// A single field-level validation failure.
///
/// These never propagate past the form: their `Display` text is shown to
/// the user and the submission is re-prompted.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The field is empty after trimming whitespace.
    EmptyInput { field: Field },

    /// The text does not parse as an integer.
    NotAnInteger { field: Field },

    /// The text does not parse as a floating value.
    NotANumber { field: Field },

    /// The value must be strictly positive.
    NotPositive { field: Field },

    /// The value parsed but falls outside the allowed range.
    OutOfRange { field: Field, lo: f64, hi: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput { field } => {
                write!(f, "{} cannot be empty", field.label())
            }
            ValidationError::NotAnInteger { field } => {
                write!(f, "{} must be an integer number", field.label())
            }
            ValidationError::NotANumber { field } => {
                write!(f, "{} must be a number (e.g. 3.5)", field.label())
            }
            ValidationError::NotPositive { field } => {
                write!(f, "{} must be higher than 0", field.label())
            }
            ValidationError::OutOfRange { field, lo, hi } => {
                if lo.fract() == 0.0 && hi.fract() == 0.0 {
                    write!(f, "{} must be between {} and {}", field.label(), *lo as i64, *hi as i64)
                } else {
                    write!(f, "{} must be between {lo:.1} and {hi:.1}", field.label())
                }
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates the name: non-empty after trimming.
///
/// # Errors
/// Returns `EmptyInput` for whitespace-only text.
pub fn parse_name(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput { field: Field::Name });
    }
    Ok(trimmed.to_string())
}

/// Parses the age: an integer in [15, 100].
///
/// # Errors
/// Returns `NotAnInteger` for unparsable text, `OutOfRange` otherwise.
pub fn parse_age(text: &str) -> Result<i64, ValidationError> {
    let age: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger { field: Field::Age })?;
    if !(15..=100).contains(&age) {
        return Err(ValidationError::OutOfRange { field: Field::Age, lo: 15.0, hi: 100.0 });
    }
    Ok(age)
}

/// Parses the weekly study time: a strictly positive integer.
///
/// # Errors
/// Returns `NotAnInteger` for unparsable text, `NotPositive` for values <= 0.
pub fn parse_study_time(text: &str) -> Result<i64, ValidationError> {
    let study_time: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger { field: Field::StudyTime })?;
    if study_time <= 0 {
        return Err(ValidationError::NotPositive { field: Field::StudyTime });
    }
    Ok(study_time)
}

/// Parses the absences: an integer in [0, 30].
///
/// # Errors
/// Returns `NotAnInteger` for unparsable text, `OutOfRange` otherwise.
pub fn parse_absences(text: &str) -> Result<i64, ValidationError> {
    let absences: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger { field: Field::Absences })?;
    if !(0..=30).contains(&absences) {
        return Err(ValidationError::OutOfRange { field: Field::Absences, lo: 0.0, hi: 30.0 });
    }
    Ok(absences)
}

/// Parses the GPA: a float in [0.0, 4.0].
///
/// # Errors
/// Returns `NotANumber` for unparsable text, `OutOfRange` otherwise.
pub fn parse_gpa(text: &str) -> Result<f64, ValidationError> {
    let gpa: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field: Field::Gpa })?;
    if !(0.0..=4.0).contains(&gpa) {
        return Err(ValidationError::OutOfRange { field: Field::Gpa, lo: 0.0, hi: 4.0 });
    }
    Ok(gpa)
}

/// Validates a full submission.
///
/// Every field is checked independently so the caller can show the user
/// all problems at once; the result is either a complete
/// [`ValidatedInputs`] or a non-empty error list, never both.
pub fn validate(raw: &RawSubmission) -> Result<ValidatedInputs, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = collect(parse_name(&raw.name), &mut errors);
    let age = collect(parse_age(&raw.age), &mut errors);
    let study_time = collect(parse_study_time(&raw.study_time), &mut errors);
    let absences = collect(parse_absences(&raw.absences), &mut errors);
    let gpa = collect(parse_gpa(&raw.gpa), &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    // All five are Some when no error was pushed.
    Ok(ValidatedInputs {
        name: name.unwrap_or_default(),
        age: age.unwrap_or_default(),
        study_time: study_time.unwrap_or_default(),
        absences: absences.unwrap_or_default(),
        gpa: gpa.unwrap_or_default(),
    })
}

fn collect<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
