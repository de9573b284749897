//! Key and mouse dispatch

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode};
use crate::core::Module;
use crate::domain::SectionName;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    if app.picker_open {
        let action = app.picker.handle_key(key, &app.ctx);
        app.apply_action(action);
        return;
    }

    if app.menu_open {
        let action = app.menu.handle_key(key, &app.ctx);
        app.apply_action(action);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || app.picker_open || app.menu_open {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.prev_section(),
        MouseEventKind::ScrollDown => app.next_section(),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('a') | KeyCode::Char('+') => app.open_picker(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_focused(),
        KeyCode::Char('l') | KeyCode::Right => app.next_card(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_card(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.next_section(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.prev_section(),
        KeyCode::Char('1') => app.set_focus_section(SectionName::CspmExecutive),
        KeyCode::Char('2') => app.set_focus_section(SectionName::CwppDashboard),
        KeyCode::Char('3') => app.set_focus_section(SectionName::RegistryScan),
        KeyCode::Esc => {
            if !app.search.is_empty() {
                app.clear_search();
            }
        }
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.exit_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.search_push(ch);
        }
        _ => {}
    }
}
