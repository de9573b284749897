//! Compact menu - every visible widget in one list, with remove

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module};

#[derive(Debug, Clone, Default)]
pub struct CompactMenu {
    cursor: usize,
}

impl CompactMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Module for CompactMenu {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let len = ctx.visible.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Action::CloseOverlay,
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => {
                match ctx.visible.get(self.cursor) {
                    Some(item) => Action::RemoveWidget(item.section, item.id),
                    None => Action::None,
                }
            }
            KeyCode::Char('a') | KeyCode::Enter => Action::OpenPicker,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VisibleWidget;
    use crate::domain::{SectionName, WidgetId};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx() -> Context {
        Context {
            visible: vec![
                VisibleWidget {
                    section: SectionName::CspmExecutive,
                    id: WidgetId(101),
                },
                VisibleWidget {
                    section: SectionName::CwppDashboard,
                    id: WidgetId(202),
                },
            ],
            ..Context::new()
        }
    }

    #[test]
    fn test_remove_item_under_cursor() {
        let mut menu = CompactMenu::new();
        let ctx = ctx();
        menu.handle_key(key(KeyCode::Down), &ctx);
        menu.handle_key(key(KeyCode::Down), &ctx);
        assert_eq!(menu.cursor(), 1);
        assert_eq!(
            menu.handle_key(key(KeyCode::Char('x')), &ctx),
            Action::RemoveWidget(SectionName::CwppDashboard, WidgetId(202))
        );
    }

    #[test]
    fn test_cursor_clamps_when_list_shrinks() {
        let mut menu = CompactMenu::new();
        let mut ctx = ctx();
        menu.handle_key(key(KeyCode::Down), &ctx);
        ctx.visible.truncate(1);
        assert_eq!(
            menu.handle_key(key(KeyCode::Delete), &ctx),
            Action::RemoveWidget(SectionName::CspmExecutive, WidgetId(101))
        );
        ctx.visible.clear();
        assert_eq!(menu.handle_key(key(KeyCode::Char('x')), &ctx), Action::None);
    }

    #[test]
    fn test_menu_exits() {
        let mut menu = CompactMenu::new();
        let ctx = ctx();
        assert_eq!(menu.handle_key(key(KeyCode::Char('a')), &ctx), Action::OpenPicker);
        assert_eq!(menu.handle_key(key(KeyCode::Esc), &ctx), Action::CloseOverlay);
    }
}
