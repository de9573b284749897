//! Widget model shared by the catalog and the dashboard sections

use std::fmt;

/// Numeric widget identifier.
///
/// Catalog ids are small constants (101, 102, ...). Custom widgets get an id
/// derived from the wall clock, so uniqueness across the dashboard is not
/// guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which canned visualization a widget renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationKind {
    /// Connected vs. not connected accounts
    CloudAccounts,
    /// Check results per outcome, labelled with percentages
    AccountRisk,
    /// Findings per severity bucket
    ImageSeverity,
    /// Description text only
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    pub text: String,
    pub visualization: VisualizationKind,
}

impl Widget {
    /// Build a user-created widget. Custom widgets always use the text fallback.
    pub fn custom(id: WidgetId, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            visualization: VisualizationKind::Text,
        }
    }

    /// Case-insensitive substring match on the name. `needle` must already be lowercase.
    pub fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// In-progress custom widget typed into the picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub text: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn is_admissible(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.text.clear();
    }
}
