//! Mutations on the dashboard, with the picker selection kept in sync

use tracing::{debug, info};

use crate::core::id::{IdSource, TimestampIds};
use crate::domain::{
    recompute_selection, CatalogTab, Draft, SectionName, SelectionMap, Widget, WidgetId,
};

use super::state::{DashboardState, SectionFilter};

/// What a toggle did to the active section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Ignored,
}

/// Dashboard state plus the active picker tab and its derived selection.
///
/// Every method that changes the tab or a section rebuilds the selection
/// before returning.
#[derive(Debug)]
pub struct Dashboard {
    state: DashboardState,
    active_tab: CatalogTab,
    selection: SelectionMap,
    ids: Box<dyn IdSource>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_ids(Box::new(TimestampIds))
    }

    pub fn with_ids(ids: Box<dyn IdSource>) -> Self {
        Self::from_state(DashboardState::initial(), CatalogTab::default(), ids)
    }

    pub fn from_state(state: DashboardState, active_tab: CatalogTab, ids: Box<dyn IdSource>) -> Self {
        let mut dashboard = Self {
            state,
            active_tab,
            selection: SelectionMap::default(),
            ids,
        };
        dashboard.recompute();
        dashboard
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn active_tab(&self) -> CatalogTab {
        self.active_tab
    }

    pub fn active_section(&self) -> SectionName {
        self.active_tab.section()
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    pub fn section(&self, name: SectionName) -> &[Widget] {
        self.state.section(name)
    }

    pub fn filter_section(&self, name: SectionName, term: &str) -> SectionFilter<'_> {
        self.state.filter_section(name, term)
    }

    pub fn set_active_tab(&mut self, tab: CatalogTab) {
        if self.active_tab == tab {
            return;
        }
        self.active_tab = tab;
        self.recompute();
    }

    /// Check or uncheck a catalog widget for the active tab.
    pub fn toggle(&mut self, id: WidgetId) -> ToggleOutcome {
        let section = self.active_section();
        let outcome = if self.state.contains(section, id) {
            self.state.remove_all(section, id);
            info!(%id, section = section.title(), "widget unchecked");
            ToggleOutcome::Removed
        } else if let Some(entry) = self.active_tab.find(id) {
            self.state.append(section, entry.to_widget());
            info!(%id, section = section.title(), "widget checked");
            ToggleOutcome::Added
        } else {
            debug!(%id, tab = self.active_tab.title(), "toggle ignored: id not in catalog");
            ToggleOutcome::Ignored
        };
        self.recompute();
        outcome
    }

    /// Admit the draft as a custom widget in the active section.
    ///
    /// The draft is cleared whether or not a widget was created.
    pub fn confirm_draft(&mut self, draft: &mut Draft) -> Option<WidgetId> {
        let created = if draft.is_admissible() {
            let id = self.ids.next_id();
            let section = self.active_section();
            let widget = Widget::custom(id, draft.name.clone(), draft.text.clone());
            self.state.append(section, widget);
            info!(%id, section = section.title(), "custom widget added");
            Some(id)
        } else {
            debug!("draft ignored: empty name");
            None
        };
        draft.clear();
        self.recompute();
        created
    }

    pub fn remove_widget(&mut self, section: SectionName, id: WidgetId) -> usize {
        let removed = self.state.remove_all(section, id);
        if removed > 0 {
            info!(%id, section = section.title(), removed, "widget removed");
        }
        self.recompute();
        removed
    }

    fn recompute(&mut self) {
        self.selection = recompute_selection(self.active_tab, &self.state);
        debug!(
            tab = self.active_tab.title(),
            checked = self.selection.len(),
            "selection recomputed"
        );
    }
}
