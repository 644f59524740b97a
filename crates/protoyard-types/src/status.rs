use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a prototype, hand-edited by its designer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    InProgress,
    Review,
    Ready,
    Archived,
}

/// Badge color used when a status is rendered in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Info,
    Warning,
    Success,
    Neutral,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Info => "info",
            BadgeColor::Warning => "warning",
            BadgeColor::Success => "success",
            BadgeColor::Neutral => "neutral",
        }
    }
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::InProgress,
        ProjectStatus::Review,
        ProjectStatus::Ready,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Review => "review",
            ProjectStatus::Ready => "ready",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Human label shown in the gallery.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Review => "In review",
            ProjectStatus::Ready => "Ready for handoff",
            ProjectStatus::Archived => "Archived",
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            ProjectStatus::InProgress => BadgeColor::Info,
            ProjectStatus::Review => BadgeColor::Warning,
            ProjectStatus::Ready => BadgeColor::Success,
            ProjectStatus::Archived => BadgeColor::Neutral,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Comma-separated list of accepted values, in declaration order.
    pub fn choices() -> String {
        Self::ALL.map(|s| s.as_str()).join(", ")
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scaffold a project was created from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTemplate {
    Blank,
    Dashboard,
}

impl ProjectTemplate {
    pub const ALL: [ProjectTemplate; 2] = [ProjectTemplate::Blank, ProjectTemplate::Dashboard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectTemplate::Blank => "blank",
            ProjectTemplate::Dashboard => "dashboard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn choices() -> String {
        Self::ALL.map(|t| t.as_str()).join(", ")
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known status or template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub choices: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {}: {}. Must be one of: {}",
            self.kind, self.value, self.choices
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for ProjectStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownVariant {
            kind: "status",
            value: s.to_string(),
            choices: Self::choices(),
        })
    }
}

impl FromStr for ProjectTemplate {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownVariant {
            kind: "template",
            value: s.to_string(),
            choices: Self::choices(),
        })
    }
}
