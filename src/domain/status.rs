//! Migration status values and their display severity.

use serde::{Deserialize, Serialize};

/// A migration status label.
///
/// Covers both the per-environment/component statuses and the application
/// stage markers. Anything outside the known labels is kept verbatim in
/// [`Status::Other`] so datasets from newer sources still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    NotStarted,
    Planning,
    Development,
    Testing,
    Uat,
    Production,
    Completed,
    InProgress,
    Failed,
    Other(String),
}

impl Status {
    /// Every known label, in stage order followed by the environment-only ones
    pub const KNOWN: [Status; 9] = [
        Status::NotStarted,
        Status::Planning,
        Status::Development,
        Status::Testing,
        Status::Uat,
        Status::Production,
        Status::Completed,
        Status::InProgress,
        Status::Failed,
    ];

    /// Get the display label for this status
    pub fn label(&self) -> &str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Planning => "Planning",
            Self::Development => "Development",
            Self::Testing => "Testing",
            Self::Uat => "UAT",
            Self::Production => "Production",
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Failed => "Failed",
            Self::Other(label) => label,
        }
    }

    /// Severity used for styling and workstream counts
    pub fn severity(&self) -> Severity {
        classify(self)
    }

    /// Whether this is the literal `Completed` status
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<&str> for Status {
    fn from(label: &str) -> Self {
        match label {
            "Not Started" => Self::NotStarted,
            "Planning" => Self::Planning,
            "Development" => Self::Development,
            "Testing" => Self::Testing,
            "UAT" => Self::Uat,
            "Production" => Self::Production,
            "Completed" => Self::Completed,
            "In Progress" => Self::InProgress,
            "Failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Semantic severity of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Done,
    Active,
    Pending,
    Failed,
    Unknown,
}

impl Severity {
    /// Whether the status is underway but not finished
    pub fn is_underway(&self) -> bool {
        matches!(self, Self::Active | Self::Pending)
    }
}

/// Classify a status into its severity. Total: unknown labels are `Unknown`.
pub fn classify(status: &Status) -> Severity {
    match status {
        Status::Completed => Severity::Done,
        Status::InProgress | Status::Production | Status::Development => Severity::Active,
        Status::Planning | Status::Testing | Status::Uat => Severity::Pending,
        Status::Failed => Severity::Failed,
        Status::NotStarted | Status::Other(_) => Severity::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_statuses() {
        assert_eq!(classify(&Status::Completed), Severity::Done);
        assert_eq!(classify(&Status::InProgress), Severity::Active);
        assert_eq!(classify(&Status::Production), Severity::Active);
        assert_eq!(classify(&Status::Development), Severity::Active);
        assert_eq!(classify(&Status::Planning), Severity::Pending);
        assert_eq!(classify(&Status::Testing), Severity::Pending);
        assert_eq!(classify(&Status::Uat), Severity::Pending);
        assert_eq!(classify(&Status::Failed), Severity::Failed);
        assert_eq!(classify(&Status::NotStarted), Severity::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for status in Status::KNOWN.iter() {
            assert_eq!(classify(status), classify(status));
            assert_eq!(status.severity(), classify(status));
        }
    }

    #[test]
    fn test_unknown_label_degrades() {
        let status = Status::from("Blocked");
        assert_eq!(status, Status::Other("Blocked".to_string()));
        assert_eq!(classify(&status), Severity::Unknown);
        assert_eq!(status.label(), "Blocked");
    }

    #[test]
    fn test_label_round_trip() {
        for status in Status::KNOWN.iter() {
            assert_eq!(&Status::from(status.label()), status);
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(Status::from("completed"), Status::Other("completed".into()));
        assert!(!Status::from("completed").is_completed());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Status::Uat).unwrap();
        assert_eq!(json, "\"UAT\"");

        let parsed: Status = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, Status::InProgress);

        let unknown: Status = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(unknown.severity(), Severity::Unknown);
    }
}
