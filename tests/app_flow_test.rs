//! Key-driven flows through the app, without a terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cnapp_dash::app::{App, StatusLevel};
use cnapp_dash::core::SequentialIds;
use cnapp_dash::domain::{CatalogTab, SectionName, WidgetId};
use cnapp_dash::input::handle_key;
use cnapp_dash::store::Dashboard;

fn app() -> App {
    App::with_dashboard(Dashboard::with_ids(Box::new(SequentialIds::starting_at(1))))
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn names(app: &App, section: SectionName) -> Vec<String> {
    app.dashboard
        .section(section)
        .iter()
        .map(|w| w.name.clone())
        .collect()
}

#[test]
fn add_image_widget_from_picker() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.active_tab(), CatalogTab::Image);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.ctx.is_checked(WidgetId(301)));
    press(&mut app, KeyCode::Esc);

    assert!(!app.picker_open);
    assert_eq!(names(&app, SectionName::RegistryScan), vec!["Image Risk Assessment"]);
}

#[test]
fn toggling_in_empty_category_warns() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Left);
    assert_eq!(app.active_tab(), CatalogTab::Ticket);

    press(&mut app, KeyCode::Char(' '));
    let (text, level) = app.status_text().unwrap();
    assert_eq!(text, "Ticket has no widgets to add");
    assert_eq!(level, StatusLevel::Warn);
    assert_eq!(app.dashboard.state().total_widgets(), 4);
    assert!(app.picker_open);
}

#[test]
fn custom_widget_from_picker_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Open Tickets");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "Triage queue");
    press(&mut app, KeyCode::Enter);

    assert!(!app.picker_open);
    let section = app.dashboard.section(SectionName::CspmExecutive);
    let last = &section[section.len() - 1];
    assert_eq!(last.id, WidgetId(1));
    assert_eq!(last.name, "Open Tickets");
    assert_eq!(last.text, "Triage queue");
    assert!(app.status_text().is_some());
}

#[test]
fn empty_custom_name_adds_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dashboard.state().total_widgets(), 4);
    assert!(app.picker.draft().name.is_empty());
}

#[test]
fn remove_card_then_readd_from_picker() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.focus_section, SectionName::CwppDashboard);
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(names(&app, SectionName::CwppDashboard), vec!["Workload Alerts"]);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Right);
    assert!(!app.ctx.is_checked(WidgetId(201)));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Esc);
    assert_eq!(
        names(&app, SectionName::CwppDashboard),
        vec!["Workload Alerts", "Top 5 Namespace Specific Alerts"]
    );
}

#[test]
fn search_narrows_every_section() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "alerts");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.visible_widgets(SectionName::CspmExecutive).count(), 0);
    assert_eq!(app.visible_widgets(SectionName::CwppDashboard).count(), 2);
    assert_eq!(app.ctx.visible.len(), 2);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.ctx.visible.len(), 4);
}

#[test]
fn compact_menu_removes_and_opens_picker() {
    let mut app = app();
    press(&mut app, KeyCode::Char('m'));
    assert!(app.menu_open);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(names(&app, SectionName::CspmExecutive), vec!["Cloud Accounts"]);

    press(&mut app, KeyCode::Char('a'));
    assert!(app.picker_open);
    assert!(!app.menu_open);
    assert!(!app.ctx.is_checked(WidgetId(102)));
}

#[test]
fn quit_from_dashboard() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
