//! Widget picker - catalog checkboxes plus the custom widget form

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::domain::Draft;

/// Which part of the picker receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerFocus {
    #[default]
    Catalog,
    Name,
    Description,
}

impl PickerFocus {
    fn next(self) -> Self {
        match self {
            PickerFocus::Catalog => PickerFocus::Name,
            PickerFocus::Name => PickerFocus::Description,
            PickerFocus::Description => PickerFocus::Catalog,
        }
    }

    fn prev(self) -> Self {
        match self {
            PickerFocus::Catalog => PickerFocus::Description,
            PickerFocus::Name => PickerFocus::Catalog,
            PickerFocus::Description => PickerFocus::Name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Picker {
    focus: PickerFocus,
    cursor: usize,
    draft: Draft,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> PickerFocus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Back to the catalog list with an empty form
    pub fn reset(&mut self) {
        self.focus = PickerFocus::Catalog;
        self.cursor = 0;
        self.draft.clear();
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            PickerFocus::Catalog => None,
            PickerFocus::Name => Some(&mut self.draft.name),
            PickerFocus::Description => Some(&mut self.draft.text),
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let entries = ctx.active_tab.widgets();
        match key.code {
            KeyCode::Left | KeyCode::Char('[') | KeyCode::Char('h') => {
                self.cursor = 0;
                Action::SwitchTab(ctx.active_tab.prev())
            }
            KeyCode::Right | KeyCode::Char(']') | KeyCode::Char('l') => {
                self.cursor = 0;
                Action::SwitchTab(ctx.active_tab.next())
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < entries.len() {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => match entries.get(self.cursor) {
                Some(entry) => Action::ToggleWidget(entry.widget_id()),
                None => Action::Notify(
                    format!("{} has no widgets to add", ctx.active_tab.title()),
                    NotifyLevel::Warn,
                ),
            },
            _ => Action::None,
        }
    }
}

impl Module for Picker {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        // Cursor may point past a shorter list after the tab changed elsewhere.
        let len = ctx.active_tab.widgets().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }

        match key.code {
            KeyCode::Esc => {
                self.reset();
                return Action::CancelDraft;
            }
            KeyCode::Enter => {
                let draft = std::mem::take(&mut self.draft);
                self.reset();
                return Action::ConfirmDraft(draft);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Action::None;
            }
            _ => {}
        }

        if self.focus == PickerFocus::Catalog {
            return self.handle_catalog_key(key, ctx);
        }

        let Some(field) = self.field_mut() else {
            return Action::None;
        };
        match key.code {
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                field.push(ch);
            }
            _ => {}
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogTab, WidgetId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(picker: &mut Picker, ctx: &Context, text: &str) {
        for ch in text.chars() {
            picker.handle_key(key(KeyCode::Char(ch)), ctx);
        }
    }

    #[test]
    fn test_space_toggles_entry_under_cursor() {
        let mut picker = Picker::new();
        let ctx = Context::new();
        assert_eq!(
            picker.handle_key(key(KeyCode::Char(' ')), &ctx),
            Action::ToggleWidget(WidgetId(101))
        );
        picker.handle_key(key(KeyCode::Char('j')), &ctx);
        picker.handle_key(key(KeyCode::Char('j')), &ctx);
        assert_eq!(picker.cursor(), 1);
        assert_eq!(
            picker.handle_key(key(KeyCode::Char(' ')), &ctx),
            Action::ToggleWidget(WidgetId(102))
        );
    }

    #[test]
    fn test_tab_switch_resets_cursor() {
        let mut picker = Picker::new();
        let ctx = Context::new();
        picker.handle_key(key(KeyCode::Down), &ctx);
        assert_eq!(
            picker.handle_key(key(KeyCode::Right), &ctx),
            Action::SwitchTab(CatalogTab::Cwpp)
        );
        assert_eq!(picker.cursor(), 0);
        assert_eq!(
            picker.handle_key(key(KeyCode::Left), &ctx),
            Action::SwitchTab(CatalogTab::Ticket)
        );
    }

    #[test]
    fn test_vim_keys_switch_tab_only_in_catalog() {
        let mut picker = Picker::new();
        let ctx = Context::new();
        assert_eq!(
            picker.handle_key(key(KeyCode::Char('l')), &ctx),
            Action::SwitchTab(CatalogTab::Cwpp)
        );
        assert_eq!(
            picker.handle_key(key(KeyCode::Char('h')), &ctx),
            Action::SwitchTab(CatalogTab::Ticket)
        );

        picker.handle_key(key(KeyCode::Tab), &ctx);
        assert_eq!(picker.handle_key(key(KeyCode::Char('l')), &ctx), Action::None);
        assert_eq!(picker.draft().name, "l");
    }

    #[test]
    fn test_empty_tab_has_nothing_to_toggle() {
        let mut picker = Picker::new();
        let ctx = Context {
            active_tab: CatalogTab::Ticket,
            ..Context::new()
        };
        assert_eq!(
            picker.handle_key(key(KeyCode::Char(' ')), &ctx),
            Action::Notify("Ticket has no widgets to add".to_string(), NotifyLevel::Warn)
        );
    }

    #[test]
    fn test_form_fields_and_confirm() {
        let mut picker = Picker::new();
        let ctx = Context::new();
        picker.handle_key(key(KeyCode::Tab), &ctx);
        assert_eq!(picker.focus(), PickerFocus::Name);
        type_text(&mut picker, &ctx, "Quotas [x]");
        picker.handle_key(key(KeyCode::Backspace), &ctx);
        picker.handle_key(key(KeyCode::Tab), &ctx);
        type_text(&mut picker, &ctx, "hl");

        assert_eq!(picker.draft(), &Draft::new("Quotas [x", "hl"));
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter), &ctx),
            Action::ConfirmDraft(Draft::new("Quotas [x", "hl"))
        );
        assert_eq!(picker.draft(), &Draft::default());
        assert_eq!(picker.focus(), PickerFocus::Catalog);
    }

    #[test]
    fn test_escape_cancels_and_clears() {
        let mut picker = Picker::new();
        let ctx = Context::new();
        picker.handle_key(key(KeyCode::BackTab), &ctx);
        assert_eq!(picker.focus(), PickerFocus::Description);
        type_text(&mut picker, &ctx, "notes");
        assert_eq!(picker.handle_key(key(KeyCode::Esc), &ctx), Action::CancelDraft);
        assert_eq!(picker.draft(), &Draft::default());
    }
}
