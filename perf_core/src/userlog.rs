use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::validate::RawSubmission;

const HEADER: &str = "timestamp,username,GPA,age,study_hours,absences";

/// Append-only submission log.
///
/// The header is written once, when the file does not yet exist; each
/// fully-valid submission appends one row. Field values are written as
/// the originally-typed strings — no numeric re-formatting — so the log
/// is a faithful record of what the user entered.
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one submission, stamped with the current local time.
    ///
    /// # Errors
    /// Returns the underlying I/O error; callers treat the log as an
    /// audit side effect and decide whether failure gates anything.
    pub fn append(&self, raw: &RawSubmission) -> io::Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string();
        self.append_row(&timestamp, raw)
    }

    fn append_row(&self, timestamp: &str, raw: &RawSubmission) -> io::Result<()> {
        let write_header = !self.path.exists();

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        if write_header {
            writeln!(file, "{HEADER}")?;
        }

        let row = [
            quote(timestamp),
            quote(&raw.name),
            quote(&raw.gpa),
            quote(&raw.age),
            quote(&raw.study_time),
            quote(&raw.absences),
        ]
        .join(",");

        writeln!(file, "{row}")?;
        log::debug!("submission logged to '{}'", self.path.display());
        Ok(())
    }
}

/// Quotes a field only when it contains a delimiter, quote or newline.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawSubmission {
        RawSubmission {
            name: name.into(),
            age: "16".into(),
            study_time: "10".into(),
            absences: "2".into(),
            gpa: "3.50".into(),
        }
    }

    #[test]
    fn header_is_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_logs.csv");
        let log = SubmissionLog::new(&path);

        log.append_row("2026-01-01 10:00:00.000000", &raw("Ada")).unwrap();
        log.append_row("2026-01-01 10:01:00.000000", &raw("Grace")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "2026-01-01 10:00:00.000000,Ada,3.50,16,10,2");
        assert_eq!(lines[2], "2026-01-01 10:01:00.000000,Grace,3.50,16,10,2");
    }

    #[test]
    fn raw_strings_are_preserved_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_logs.csv");
        let log = SubmissionLog::new(&path);

        // "3.50" must not be re-formatted to "3.5".
        log.append_row("t", &raw("Ada")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(",3.50,"));
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_logs.csv");
        let log = SubmissionLog::new(&path);

        log.append_row("t", &raw("Ada, Countess")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Ada, Countess\""));
    }

    #[test]
    fn append_stamps_current_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_logs.csv");
        let log = SubmissionLog::new(&path);

        log.append(&raw("Ada")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        // timestamp,username,... → the first field is non-empty.
        let row = content.lines().nth(1).unwrap();
        assert!(!row.starts_with(','));
        assert!(row.ends_with(",Ada,3.50,16,10,2"));
    }
}
