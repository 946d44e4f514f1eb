//! Application entities tracked by the dashboard.

use super::status::Status;
use serde::{Deserialize, Serialize};

/// Organisational workstream an application belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Workstream {
    BusinessApps,
    DataAnalytics,
    ResearchModelling,
    Other(String),
}

impl Workstream {
    /// The fixed workstreams in dashboard order
    pub const ALL: [Workstream; 3] = [
        Workstream::BusinessApps,
        Workstream::DataAnalytics,
        Workstream::ResearchModelling,
    ];

    /// Get the display name for this workstream
    pub fn name(&self) -> &str {
        match self {
            Self::BusinessApps => "Business Apps",
            Self::DataAnalytics => "Data & Analytics",
            Self::ResearchModelling => "Research & Modelling",
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the fixed workstreams
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Workstream {
    fn from(name: &str) -> Self {
        match name {
            "Business Apps" => Self::BusinessApps,
            "Data & Analytics" => Self::DataAnalytics,
            "Research & Modelling" => Self::ResearchModelling,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Workstream {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Workstream> for String {
    fn from(workstream: Workstream) -> Self {
        match workstream {
            Workstream::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl std::fmt::Display for Workstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kind of deployable component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    WebApi,
    Ui,
    Database,
    Service,
    Function,
    Other(String),
}

impl ComponentType {
    pub fn label(&self) -> &str {
        match self {
            Self::WebApi => "Web API",
            Self::Ui => "UI",
            Self::Database => "Database",
            Self::Service => "Service",
            Self::Function => "Function",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ComponentType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Web API" => Self::WebApi,
            "UI" => Self::Ui,
            "Database" => Self::Database,
            "Service" => Self::Service,
            "Function" => Self::Function,
            _ => Self::Other(label),
        }
    }
}

impl From<ComponentType> for String {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// A deployment target whose migration is tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Tier label (e.g. "DEV", "QA", "PROD")
    pub name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

impl Environment {
    /// Create an environment with only a name and status
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
            url: None,
            completed_date: None,
        }
    }

    /// Set the completion date
    pub fn completed_on(mut self, date: impl Into<String>) -> Self {
        self.completed_date = Some(date.into());
        self
    }
}

/// A deployable unit of an application or phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,
    /// Source repository URL
    #[serde(default, rename = "githubRepo", skip_serializing_if = "Option::is_none")]
    pub source_repo: Option<String>,
    /// Deployment pipeline repository URL
    #[serde(default, rename = "devOpsRepo", skip_serializing_if = "Option::is_none")]
    pub pipeline_repo: Option<String>,
    /// Build pipeline URL
    #[serde(default, rename = "jenkinsUrl", skip_serializing_if = "Option::is_none")]
    pub build_url: Option<String>,
    pub status: Status,
}

impl Component {
    /// Labelled links that are present, in display order
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Source", self.source_repo.as_deref()),
            ("DevOps", self.pipeline_repo.as_deref()),
            ("Jenkins", self.build_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

/// An optional grouping of environments and components within an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// An application undergoing migration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub workstream: Workstream,
    pub current_stage: Status,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default)]
    pub components: Vec<Component>,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_milestone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<Phase>,
}

impl Application {
    /// Look up a phase by id
    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == phase_id)
    }
}
