//! Canned chart data for widget cards
//!
//! Every number here is a fixed mock value. The chart collaborator receives
//! `{label, value}` pairs and the shared palette.

use super::widget::{VisualizationKind, Widget};

/// Colors reused cyclically by proportion charts
pub const PALETTE: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#ff0000"];

pub const NO_GRAPH_DATA: &str = "No Graph data available!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    pub label: &'static str,
    pub value: u64,
}

impl Datum {
    const fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Value,
    Percent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderSpec {
    Proportion {
        data: Vec<Datum>,
        labels: LabelStyle,
    },
    Magnitude {
        data: Vec<Datum>,
    },
    Text(String),
}

const CLOUD_ACCOUNTS: [Datum; 2] = [Datum::new("Connected", 2), Datum::new("Not Connected", 2)];

const ACCOUNT_RISK: [Datum; 4] = [
    Datum::new("Failed", 3659),
    Datum::new("Warning", 881),
    Datum::new("Not Available", 28),
    Datum::new("Passed", 7235),
];

const IMAGE_SEVERITY: [Datum; 4] = [
    Datum::new("Critical", 10),
    Datum::new("High", 5),
    Datum::new("Medium", 8),
    Datum::new("Low", 3),
];

pub fn select_visualization(widget: &Widget) -> RenderSpec {
    match widget.visualization {
        VisualizationKind::CloudAccounts => RenderSpec::Proportion {
            data: CLOUD_ACCOUNTS.to_vec(),
            labels: LabelStyle::Value,
        },
        VisualizationKind::AccountRisk => RenderSpec::Proportion {
            data: ACCOUNT_RISK.to_vec(),
            labels: LabelStyle::Percent,
        },
        VisualizationKind::ImageSeverity => RenderSpec::Magnitude {
            data: IMAGE_SEVERITY.to_vec(),
        },
        VisualizationKind::Text => {
            if widget.text.is_empty() {
                RenderSpec::Text(NO_GRAPH_DATA.to_string())
            } else {
                RenderSpec::Text(widget.text.clone())
            }
        }
    }
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Label for one slice of a proportion chart
pub fn slice_label(data: &[Datum], index: usize, style: LabelStyle) -> String {
    let Some(datum) = data.get(index) else {
        return String::new();
    };
    match style {
        LabelStyle::Value => format!("{} {}", datum.label, datum.value),
        LabelStyle::Percent => {
            let total: u64 = data.iter().map(|d| d.value).sum();
            let pct = if total == 0 {
                0.0
            } else {
                datum.value as f64 * 100.0 / total as f64
            };
            format!("{} {:.0}%", datum.label, pct)
        }
    }
}
