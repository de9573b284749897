//! Picker checkbox state derived from the dashboard

use std::collections::BTreeMap;

use super::catalog::CatalogTab;
use super::widget::WidgetId;
use crate::store::DashboardState;

/// Widget id -> checked, for the active picker tab.
///
/// Only ids that are checked are stored; anything absent reads as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    checked: BTreeMap<WidgetId, bool>,
}

impl SelectionMap {
    pub fn is_selected(&self, id: WidgetId) -> bool {
        self.checked.get(&id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.checked
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| *id)
    }
}

/// Rebuild the checkbox map for `tab` from what its section currently shows.
pub fn recompute_selection(tab: CatalogTab, state: &DashboardState) -> SelectionMap {
    let mut checked = BTreeMap::new();
    for widget in state.section(tab.section()) {
        if tab.contains(widget.id) {
            checked.insert(widget.id, true);
        }
    }
    SelectionMap { checked }
}
