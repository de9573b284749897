use std::collections::BTreeMap;

use crate::domain::{CatalogTab, SectionName, Widget, WidgetId};

/// Widgets currently shown, per section, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    sections: BTreeMap<SectionName, Vec<Widget>>,
}

impl DashboardState {
    /// Empty sections only
    pub fn empty() -> Self {
        let sections = SectionName::ALL
            .iter()
            .map(|name| (*name, Vec::new()))
            .collect();
        Self { sections }
    }

    /// CSPM and CWPP sections seeded with their full catalogs, Registry Scan empty
    pub fn initial() -> Self {
        let mut state = Self::empty();
        for tab in [CatalogTab::Cspm, CatalogTab::Cwpp] {
            for entry in tab.widgets() {
                state.append(tab.section(), entry.to_widget());
            }
        }
        state
    }

    pub fn section(&self, name: SectionName) -> &[Widget] {
        self.sections.get(&name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: SectionName, id: WidgetId) -> bool {
        self.section(name).iter().any(|w| w.id == id)
    }

    pub fn append(&mut self, name: SectionName, widget: Widget) {
        self.sections.entry(name).or_default().push(widget);
    }

    /// Drop every widget with `id` from the section. Returns how many were removed.
    pub fn remove_all(&mut self, name: SectionName, id: WidgetId) -> usize {
        let Some(widgets) = self.sections.get_mut(&name) else {
            return 0;
        };
        let before = widgets.len();
        widgets.retain(|w| w.id != id);
        before - widgets.len()
    }

    pub fn filter_section(&self, name: SectionName, term: &str) -> SectionFilter<'_> {
        SectionFilter {
            iter: self.section(name).iter(),
            needle: term.to_lowercase(),
        }
    }

    pub fn total_widgets(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}

/// Lazy search over one section. Clone it to restart from the top.
#[derive(Debug, Clone)]
pub struct SectionFilter<'a> {
    iter: std::slice::Iter<'a, Widget>,
    needle: String,
}

impl<'a> Iterator for SectionFilter<'a> {
    type Item = &'a Widget;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.iter.by_ref().find(|w| w.name_matches(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
