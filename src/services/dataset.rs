//! Dataset loading: the built-in sample or a JSON application list.

use crate::config::DataConfig;
use crate::domain::{sample, Application};
use crate::error::{DatasetError, DatasetResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where the application list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Hard-coded sample applications
    Builtin,
    /// JSON array of applications on disk
    File(PathBuf),
}

impl DataSource {
    /// Resolve the source from configuration. Relative paths are taken from `root`.
    pub fn from_config(config: &DataConfig, root: &Path) -> Self {
        match &config.path {
            Some(path) if path.is_absolute() => Self::File(path.clone()),
            Some(path) => Self::File(root.join(path)),
            None => Self::Builtin,
        }
    }

    /// Short description for the dashboard header
    pub fn describe(&self) -> String {
        match self {
            Self::Builtin => "sample data".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Service for loading the application dataset
pub struct DatasetService {
    source: DataSource,
}

impl DatasetService {
    /// Create a new dataset service
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    /// Get the configured source
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load the application list
    ///
    /// Application ids, and phase ids within an application, must be unique.
    pub async fn load(&self) -> DatasetResult<Vec<Application>> {
        let applications = match &self.source {
            DataSource::Builtin => sample::applications(),
            DataSource::File(path) => Self::read_file(path).await?,
        };

        if let Err(message) = check_unique_ids(&applications) {
            tracing::warn!("Rejecting dataset from {}: {}", self.source.describe(), message);
            return Err(DatasetError::Invalid {
                path: self.source.describe().into(),
                message,
            });
        }

        tracing::info!(
            "Loaded {} applications from {}",
            applications.len(),
            self.source.describe()
        );

        Ok(applications)
    }

    async fn read_file(path: &Path) -> DatasetResult<Vec<Application>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::NotFound(path.to_path_buf())
            } else {
                DatasetError::Io(e)
            }
        })?;

        parse_applications(&content).map_err(|message| DatasetError::Invalid {
            path: path.to_path_buf(),
            message,
        })
    }
}

/// Parse a JSON array of applications
pub fn parse_applications(content: &str) -> std::result::Result<Vec<Application>, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

/// Check that application ids and per-application phase ids are unique
pub fn check_unique_ids(applications: &[Application]) -> std::result::Result<(), String> {
    let mut seen = HashSet::new();
    for app in applications {
        if !seen.insert(app.id.as_str()) {
            return Err(format!("duplicate application id \"{}\"", app.id));
        }

        let mut phases = HashSet::new();
        for phase in &app.phases {
            if !phases.insert(phase.id.as_str()) {
                return Err(format!(
                    "duplicate phase id \"{}\" in application \"{}\"",
                    phase.id, app.id
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Severity, Status, Workstream};
    use std::fs;
    use tempfile::TempDir;

    const DATASET: &str = r#"[
        {
            "id": "inf-1",
            "name": "Identity Gateway",
            "workstream": "Business Apps",
            "currentStage": "Testing",
            "lastUpdated": "2024-09-01",
            "environments": [
                { "name": "DEV", "status": "Completed" },
                { "name": "QA", "status": "Blocked" }
            ],
            "components": [],
            "phases": [
                {
                    "id": "p1",
                    "name": "Phase 1",
                    "environments": [{ "name": "DEV", "status": "Completed" }],
                    "components": []
                }
            ]
        },
        {
            "id": "inf-2",
            "name": "Network Fabric",
            "workstream": "Infrastructure",
            "currentStage": "Not Started",
            "lastUpdated": "2024-09-02",
            "environments": [],
            "components": []
        }
    ]"#;

    fn write_dataset(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("applications.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_load_builtin() {
        let service = DatasetService::new(DataSource::Builtin);
        let apps = tokio_test::block_on(service.load()).unwrap();
        assert_eq!(apps.len(), sample::applications().len());
    }

    #[test]
    fn test_load_file() {
        let (_temp, path) = write_dataset(DATASET);
        let service = DatasetService::new(DataSource::File(path));
        let apps = tokio_test::block_on(service.load()).unwrap();

        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].phases.len(), 1);
        assert_eq!(apps[0].environments[1].status.severity(), Severity::Unknown);
        assert_eq!(apps[1].workstream, Workstream::Other("Infrastructure".into()));
        assert_eq!(apps[1].current_stage, Status::NotStarted);
        assert!(apps[1].environments.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        let service = DatasetService::new(DataSource::File(path.clone()));

        match tokio_test::block_on(service.load()) {
            Err(DatasetError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other.map(|a| a.len())),
        }
    }

    #[test]
    fn test_load_missing_required_field() {
        let (_temp, path) = write_dataset(r#"[{ "id": "x", "name": "No stage" }]"#);
        let service = DatasetService::new(DataSource::File(path));

        let err = tokio_test::block_on(service.load()).unwrap_err();
        match err {
            DatasetError::Invalid { message, .. } => assert!(message.contains("missing field")),
            other => panic!("expected Invalid, got {}", other),
        }
    }

    #[test]
    fn test_load_not_json() {
        let (_temp, path) = write_dataset("applications: []");
        let service = DatasetService::new(DataSource::File(path));
        assert!(matches!(
            tokio_test::block_on(service.load()),
            Err(DatasetError::Invalid { .. })
        ));
    }

    #[test]
    fn test_duplicate_application_ids_rejected() {
        let (_temp, path) = write_dataset(
            r#"[
                { "id": "a", "name": "A", "workstream": "Business Apps", "currentStage": "Planning", "lastUpdated": "x" },
                { "id": "a", "name": "A2", "workstream": "Business Apps", "currentStage": "Planning", "lastUpdated": "y" }
            ]"#,
        );
        let service = DatasetService::new(DataSource::File(path.clone()));

        match tokio_test::block_on(service.load()) {
            Err(DatasetError::Invalid { path: p, message }) => {
                assert_eq!(p, path);
                assert_eq!(message, "duplicate application id \"a\"");
            }
            other => panic!("expected Invalid, got {:?}", other.map(|a| a.len())),
        }
    }

    #[test]
    fn test_duplicate_phase_ids_rejected() {
        let (_temp, path) = write_dataset(
            r#"[{
                "id": "a", "name": "A", "workstream": "Business Apps", "currentStage": "Planning", "lastUpdated": "x",
                "phases": [
                    { "id": "p1", "name": "Phase 1" },
                    { "id": "p1", "name": "Phase 1 again" }
                ]
            }]"#,
        );
        let service = DatasetService::new(DataSource::File(path));
        let err = tokio_test::block_on(service.load()).unwrap_err();
        assert!(err.to_string().contains("duplicate phase id \"p1\" in application \"a\""));
    }

    #[test]
    fn test_same_phase_id_in_different_applications() {
        let mut apps = sample::applications();
        let phases = apps[1].phases.clone();
        apps[0].phases = phases;
        assert!(check_unique_ids(&apps).is_ok());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        assert!(check_unique_ids(&sample::applications()).is_ok());
    }

    #[test]
    fn test_source_from_config() {
        let root = Path::new("/srv/dash");
        let builtin = DataSource::from_config(&DataConfig::default(), root);
        assert_eq!(builtin, DataSource::Builtin);
        assert_eq!(builtin.describe(), "sample data");

        let relative = DataConfig {
            path: Some(PathBuf::from("apps.json")),
        };
        assert_eq!(
            DataSource::from_config(&relative, root),
            DataSource::File(PathBuf::from("/srv/dash/apps.json"))
        );

        let absolute = DataConfig {
            path: Some(PathBuf::from("/data/apps.json")),
        };
        assert_eq!(
            DataSource::from_config(&absolute, root),
            DataSource::File(PathBuf::from("/data/apps.json"))
        );
    }
}
