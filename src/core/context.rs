//! Shared context passed to panels

use crate::domain::{CatalogTab, SectionName, SelectionMap, WidgetId};

/// A widget visible under the current search, with the section it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWidget {
    pub section: SectionName,
    pub id: WidgetId,
}

/// Snapshot of app state that panels read while handling keys
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Tab the picker shows
    pub active_tab: CatalogTab,

    /// Checkbox state for `active_tab`
    pub selection: SelectionMap,

    /// Widgets passing the search filter, section by section
    pub visible: Vec<VisibleWidget>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, id: WidgetId) -> bool {
        self.selection.is_selected(id)
    }
}
