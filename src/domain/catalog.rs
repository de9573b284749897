//! Static widget catalog, grouped by picker tab

use std::str::FromStr;

use thiserror::Error;

use super::section::SectionName;
use super::widget::{VisualizationKind, Widget, WidgetId};

/// Tabs shown in the widget picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CatalogTab {
    #[default]
    Cspm,
    Cwpp,
    Image,
    Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog tab `{0}` (expected one of: CSPM, CWPP, Image, Ticket)")]
pub struct ParseTabError(pub String);

impl CatalogTab {
    pub const ALL: [CatalogTab; 4] = [
        CatalogTab::Cspm,
        CatalogTab::Cwpp,
        CatalogTab::Image,
        CatalogTab::Ticket,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CatalogTab::Cspm => "CSPM",
            CatalogTab::Cwpp => "CWPP",
            CatalogTab::Image => "Image",
            CatalogTab::Ticket => "Ticket",
        }
    }

    /// Section that widgets picked under this tab land in.
    ///
    /// Ticket has no section of its own and shares Registry Scan with Image.
    pub fn section(&self) -> SectionName {
        match self {
            CatalogTab::Cspm => SectionName::CspmExecutive,
            CatalogTab::Cwpp => SectionName::CwppDashboard,
            CatalogTab::Image => SectionName::RegistryScan,
            CatalogTab::Ticket => SectionName::RegistryScan,
        }
    }

    pub fn widgets(&self) -> &'static [CatalogEntry] {
        match self {
            CatalogTab::Cspm => CSPM,
            CatalogTab::Cwpp => CWPP,
            CatalogTab::Image => IMAGE,
            CatalogTab::Ticket => TICKET,
        }
    }

    pub fn find(&self, id: WidgetId) -> Option<&'static CatalogEntry> {
        self.widgets().iter().find(|entry| entry.id == id.0)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.find(id).is_some()
    }

    pub fn next(&self) -> CatalogTab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> CatalogTab {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for CatalogTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cspm" => Ok(CatalogTab::Cspm),
            "cwpp" => Ok(CatalogTab::Cwpp),
            "image" => Ok(CatalogTab::Image),
            "ticket" => Ok(CatalogTab::Ticket),
            _ => Err(ParseTabError(s.to_string())),
        }
    }
}

/// One immutable catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: &'static str,
    pub text: &'static str,
    pub visualization: VisualizationKind,
}

impl CatalogEntry {
    pub fn widget_id(&self) -> WidgetId {
        WidgetId(self.id)
    }

    pub fn to_widget(&self) -> Widget {
        Widget {
            id: WidgetId(self.id),
            name: self.name.to_string(),
            text: self.text.to_string(),
            visualization: self.visualization,
        }
    }
}

const CSPM: &[CatalogEntry] = &[
    CatalogEntry {
        id: 101,
        name: "Cloud Accounts",
        text: "Displays the number of connected and unconnected cloud accounts.",
        visualization: VisualizationKind::CloudAccounts,
    },
    CatalogEntry {
        id: 102,
        name: "Cloud Account Risk Assessment",
        text: "Visualizes account risk based on failed, warning, unavailable, and passed checks.",
        visualization: VisualizationKind::AccountRisk,
    },
];

const CWPP: &[CatalogEntry] = &[
    CatalogEntry {
        id: 201,
        name: "Top 5 Namespace Specific Alerts",
        text: "Shows the most frequent alerts per namespace.",
        visualization: VisualizationKind::Text,
    },
    CatalogEntry {
        id: 202,
        name: "Workload Alerts",
        text: "Displays alerts related to container workloads.",
        visualization: VisualizationKind::Text,
    },
];

const IMAGE: &[CatalogEntry] = &[
    CatalogEntry {
        id: 301,
        name: "Image Risk Assessment",
        text: "Assessment of container image vulnerabilities categorized by severity.",
        visualization: VisualizationKind::ImageSeverity,
    },
    CatalogEntry {
        id: 302,
        name: "Image Security Issues",
        text: "Summarizes security issues found in container images.",
        visualization: VisualizationKind::ImageSeverity,
    },
];

const TICKET: &[CatalogEntry] = &[];
