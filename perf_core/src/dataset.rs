use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Errors produced while loading the student dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// The file cannot be read.
    Io { path: String, msg: String },

    /// The file has no header row.
    MissingHeader,

    /// A data row does not match the header width.
    Row { line: usize, got: usize, expected: usize },

    /// The file has a header but no data rows.
    Empty,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, msg } => write!(f, "cannot read '{path}': {msg}"),
            DatasetError::MissingHeader => write!(f, "dataset has no header row"),
            DatasetError::Row { line, got, expected } => {
                write!(f, "dataset line {line}: expected {expected} values, got {got}")
            }
            DatasetError::Empty => write!(f, "dataset has no data rows"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// How a column is treated for plotting.
///
/// Numeric iff every non-empty value parses as f64; otherwise
/// categorical. A column with no non-empty values is categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// One named column with its raw values.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    values: Vec<String>,
}

impl Column {
    /// Non-empty values parsed as f64. Empty for categorical columns.
    fn numeric_values(&self) -> Vec<f64> {
        if self.kind != ColumnKind::Numeric {
            return Vec::new();
        }
        self.values
            .iter()
            .filter(|v| !v.is_empty())
            .filter_map(|v| v.parse().ok())
            .collect()
    }

    /// Bins the column into `bins` equal-width buckets over [min, max].
    ///
    /// Returns `None` for categorical columns or when there is nothing
    /// to bin.
    pub fn histogram(&self, bins: usize) -> Option<Histogram> {
        let values = self.numeric_values();
        if values.is_empty() || bins == 0 {
            return None;
        }

        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut counts = vec![0usize; bins];
        if hi == lo {
            counts[0] = values.len();
            return Some(Histogram { lo, hi, counts });
        }

        let width = (hi - lo) / bins as f64;
        for v in values {
            let mut index = ((v - lo) / width) as usize;
            // The maximum lands on the upper edge of the last bin.
            if index >= bins {
                index = bins - 1;
            }
            counts[index] += 1;
        }

        Some(Histogram { lo, hi, counts })
    }

    /// Per-label counts, sorted by label.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for v in &self.values {
            *counts.entry(v.as_str()).or_default() += 1;
        }
        counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// Equal-width histogram of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Lower edge of bin `i`, used as the bar label.
    pub fn bin_label(&self, i: usize) -> String {
        if self.counts.len() <= 1 || self.hi == self.lo {
            return format!("{:.1}", self.lo);
        }
        let width = (self.hi - self.lo) / self.counts.len() as f64;
        format!("{:.1}", self.lo + width * i as f64)
    }
}

/// The read-only student dataset backing the Plots & Insights view.
///
/// Loaded fresh each time the view is entered. Parsing is line-oriented:
/// a header row names the columns and every data row must match its
/// width.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Loads and classifies the dataset.
    ///
    /// # Errors
    /// Returns `DatasetError` if the file cannot be read, has no header,
    /// has no data, or contains a row of the wrong width.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            msg: e.to_string(),
        })?;
        let dataset = Self::parse(&content)?;
        log::info!(
            "loaded dataset '{}': {} rows, {} columns",
            path.display(),
            dataset.rows,
            dataset.columns.len()
        );
        Ok(dataset)
    }

    fn parse(content: &str) -> Result<Self, DatasetError> {
        let mut lines = content.lines();

        let header = lines.next().ok_or(DatasetError::MissingHeader)?;
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        if names.is_empty() || names.iter().all(|n| n.is_empty()) {
            return Err(DatasetError::MissingHeader);
        }

        let mut values: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        let mut rows = 0usize;

        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != names.len() {
                return Err(DatasetError::Row {
                    line: i + 2,
                    got: fields.len(),
                    expected: names.len(),
                });
            }
            for (col, field) in values.iter_mut().zip(fields) {
                col.push(field.to_string());
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(DatasetError::Empty);
        }

        let columns = names
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column {
                name: name.to_string(),
                kind: classify(&values),
                values,
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Indices of categorical columns, the candidates for a hue.
    pub fn categorical_indices(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == ColumnKind::Categorical)
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts of `column` labels broken down by the labels of `hue`.
    ///
    /// Returns the sorted hue labels and, per category label, one count
    /// per hue label. `None` if either index is out of bounds.
    pub fn category_counts_by_hue(
        &self,
        column: usize,
        hue: usize,
    ) -> Option<(Vec<String>, Vec<(String, Vec<usize>)>)> {
        let col = self.columns.get(column)?;
        let hue_col = self.columns.get(hue)?;

        let mut hue_labels: Vec<String> = hue_col.values.clone();
        hue_labels.sort();
        hue_labels.dedup();

        let mut grouped: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (value, hue_value) in col.values.iter().zip(hue_col.values.iter()) {
            let slot = grouped
                .entry(value.as_str())
                .or_insert_with(|| vec![0; hue_labels.len()]);
            if let Some(pos) = hue_labels.iter().position(|l| l == hue_value) {
                slot[pos] += 1;
            }
        }

        let groups = grouped
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Some((hue_labels, groups))
    }
}

fn classify(values: &[String]) -> ColumnKind {
    let mut seen_value = false;
    for v in values {
        if v.is_empty() {
            continue;
        }
        seen_value = true;
        if v.parse::<f64>().is_err() {
            return ColumnKind::Categorical;
        }
    }
    if seen_value {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Age,Weekly_Study_Time,Absences,GPA,gender,tutoring
16,10,2,3.5,female,yes
17,5,0,2.8,male,no
16,12,4,3.9,female,yes
18,8,1,3.1,male,no
";

    #[test]
    fn classifies_numeric_and_categorical() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        assert_eq!(ds.rows(), 4);
        assert_eq!(ds.columns()[0].kind, ColumnKind::Numeric);
        assert_eq!(ds.columns()[3].kind, ColumnKind::Numeric);
        assert_eq!(ds.columns()[4].kind, ColumnKind::Categorical);
        assert_eq!(ds.categorical_indices(), vec![4, 5]);
    }

    #[test]
    fn histogram_covers_min_to_max() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        let hist = ds.columns()[1].histogram(4).unwrap();
        assert_eq!(hist.lo, 5.0);
        assert_eq!(hist.hi, 12.0);
        assert_eq!(hist.counts.iter().sum::<usize>(), 4);
        // The maximum value must land in the last bin, not past it.
        assert!(hist.counts[3] >= 1);
    }

    #[test]
    fn constant_column_gets_a_single_bin() {
        let ds = Dataset::parse("x\n7\n7\n7\n").unwrap();
        let hist = ds.columns()[0].histogram(20).unwrap();
        assert_eq!(hist.counts[0], 3);
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn categorical_column_has_no_histogram() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        assert!(ds.columns()[4].histogram(20).is_none());
    }

    #[test]
    fn counts_are_sorted_by_label() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        let counts = ds.columns()[4].category_counts();
        assert_eq!(counts, vec![("female".to_string(), 2), ("male".to_string(), 2)]);
    }

    #[test]
    fn hue_grouping_counts_match() {
        let ds = Dataset::parse(SAMPLE).unwrap();
        let (hues, groups) = ds.category_counts_by_hue(4, 5).unwrap();
        assert_eq!(hues, vec!["no".to_string(), "yes".to_string()]);
        // female: 0 no, 2 yes; male: 2 no, 0 yes.
        assert_eq!(groups[0], ("female".to_string(), vec![0, 2]));
        assert_eq!(groups[1], ("male".to_string(), vec![2, 0]));
    }

    #[test]
    fn ragged_row_is_rejected_with_line_number() {
        let err = Dataset::parse("a,b\n1,2\n3\n").unwrap_err();
        match err {
            DatasetError::Row { line, got, expected } => {
                assert_eq!(line, 3);
                assert_eq!(got, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::parse("a,b\n"), Err(DatasetError::Empty)));
        assert!(matches!(Dataset::parse(""), Err(DatasetError::MissingHeader)));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.columns().len(), 6);
    }
}
