//! Actions that panels return to the app

use crate::domain::{CatalogTab, Draft, SectionName, WidgetId};

/// Actions returned by panels to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Check or uncheck a catalog widget for the active tab
    ToggleWidget(WidgetId),

    /// Switch the picker to another catalog tab
    SwitchTab(CatalogTab),

    /// Admit the draft as a custom widget and close the picker
    ConfirmDraft(Draft),

    /// Close the picker, dropping the draft
    CancelDraft,

    /// Remove a widget from a section
    RemoveWidget(SectionName, WidgetId),

    /// Open the widget picker
    OpenPicker,

    /// Close current overlay/popup
    CloseOverlay,

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
