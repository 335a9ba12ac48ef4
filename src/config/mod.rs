use std::path::{Path, PathBuf};

/// File locations the dashboard depends on.
///
/// Defaults point at the repository layout; an optional `app.json` next
/// to the binary overrides any subset of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub dataset_path: PathBuf,
    pub userlog_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            dataset_path: PathBuf::from("data/student_data_clean.csv"),
            userlog_path: PathBuf::from("user_logs.csv"),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "app.json";

    /// Loads the config file, falling back to defaults when it does not
    /// exist.
    ///
    /// # Errors
    /// Returns a human-readable string if the file exists but cannot be
    /// read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

        let val: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}"))?;

        let defaults = Self::default();
        let pick = |key: &str, default: &Path| -> PathBuf {
            val[key]
                .as_str()
                .map(PathBuf::from)
                .unwrap_or_else(|| default.to_path_buf())
        };

        Ok(Self {
            model_path: pick("model_path", &defaults.model_path),
            dataset_path: pick("dataset_path", &defaults.dataset_path),
            userlog_path: pick("userlog_path", &defaults.userlog_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("no/such/app.json").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, r#"{ "model_path": "models/best.json" }"#).unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.model_path, PathBuf::from("models/best.json"));
        assert_eq!(config.userlog_path, AppConfig::default().userlog_path);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_or_default(&path).is_err());
    }
}
