use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{Config, ConfigError};
use crate::core::{Action, Context, NotifyLevel, VisibleWidget};
use crate::domain::{CatalogTab, Draft, SectionName, Widget, WidgetId};
use crate::modules::{CompactMenu, Picker};
use crate::store::{Dashboard, SectionFilter, ToggleOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Everything resolved before the first frame: config, CLI overrides and the
/// warnings collected along the way
#[derive(Debug, Default)]
pub struct Startup {
    pub config: Config,
    /// `--tab`, wins over `default_tab`
    pub tab: Option<String>,
    pub search: Option<String>,
    pub warnings: Vec<String>,
}

impl Startup {
    /// A config that failed to load becomes a warning and the defaults.
    pub fn new(
        loaded: Result<Config, ConfigError>,
        tab: Option<String>,
        search: Option<String>,
    ) -> Self {
        let mut warnings = Vec::new();
        let config = loaded.unwrap_or_else(|err| {
            warnings.push(format!("Config ignored: {err}"));
            Config::default()
        });
        Self {
            config,
            tab,
            search,
            warnings,
        }
    }
}

#[derive(Debug)]
pub struct App {
    /// Snapshot handed to overlay panels
    pub ctx: Context,
    pub dashboard: Dashboard,
    pub picker: Picker,
    pub menu: CompactMenu,
    pub picker_open: bool,
    pub menu_open: bool,
    pub help_open: bool,
    pub input_mode: InputMode,
    pub search: String,
    /// Section holding the card cursor
    pub focus_section: SectionName,
    /// Card index among the section's visible widgets
    pub focus_card: usize,
    pub status: Option<StatusMessage>,
    pub status_timeout: Duration,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_dashboard(Dashboard::new())
    }

    pub fn with_dashboard(dashboard: Dashboard) -> Self {
        let mut app = Self {
            ctx: Context::new(),
            dashboard,
            picker: Picker::new(),
            menu: CompactMenu::new(),
            picker_open: false,
            menu_open: false,
            help_open: false,
            input_mode: InputMode::Normal,
            search: String::new(),
            focus_section: SectionName::CspmExecutive,
            focus_card: 0,
            status: None,
            status_timeout: Duration::from_secs(3),
            should_quit: false,
        };
        app.sync_context();
        app
    }

    /// Apply startup options. Bad input falls back to defaults, and every
    /// warning is logged and joined into one status message.
    pub fn from_startup(startup: Startup, dashboard: Dashboard) -> Self {
        let Startup {
            config,
            tab,
            search,
            mut warnings,
        } = startup;

        let mut app = Self::with_dashboard(dashboard);
        app.status_timeout = config.status_timeout();

        let tab = match tab.as_deref() {
            Some(raw) => raw.parse::<CatalogTab>().map(Some),
            None => config.initial_tab(),
        };
        match tab {
            Ok(Some(tab)) => app.dashboard.set_active_tab(tab),
            Ok(None) => {}
            Err(err) => warnings.push(err.to_string()),
        }
        if let Some(term) = search {
            app.set_search(term);
        }
        app.sync_context();

        for warning in &warnings {
            warn!("{warning}");
        }
        if !warnings.is_empty() {
            app.set_status(warnings.join("; "), StatusLevel::Warn);
        }
        app
    }

    /// Sync context with app state
    pub fn sync_context(&mut self) {
        let this = &*self;
        let visible: Vec<VisibleWidget> = SectionName::ALL
            .iter()
            .flat_map(|section| {
                this.visible_widgets(*section).map(move |widget| VisibleWidget {
                    section: *section,
                    id: widget.id,
                })
            })
            .collect();

        self.ctx.active_tab = self.dashboard.active_tab();
        self.ctx.selection = self.dashboard.selection().clone();
        self.ctx.visible = visible;
    }

    pub fn active_tab(&self) -> CatalogTab {
        self.dashboard.active_tab()
    }

    /// Widgets of `section` that pass the current search
    pub fn visible_widgets(&self, section: SectionName) -> SectionFilter<'_> {
        self.dashboard.filter_section(section, &self.search)
    }

    pub fn focused_widget(&self) -> Option<&Widget> {
        self.visible_widgets(self.focus_section).nth(self.focus_card)
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > self.status_timeout {
                self.status = None;
            }
        }
    }

    // === Overlays ===

    pub fn open_picker(&mut self) {
        self.menu_open = false;
        self.picker.reset();
        self.picker_open = true;
        self.sync_context();
    }

    pub fn close_picker(&mut self) {
        self.picker.reset();
        self.picker_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu.reset();
            self.sync_context();
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::ToggleWidget(id) => self.toggle_widget(id),
            Action::SwitchTab(tab) => self.dashboard.set_active_tab(tab),
            Action::ConfirmDraft(draft) => self.confirm_draft(draft),
            Action::CancelDraft => self.close_picker(),
            Action::RemoveWidget(section, id) => self.remove_widget(section, id),
            Action::OpenPicker => self.open_picker(),
            Action::CloseOverlay => {
                self.menu_open = false;
                self.help_open = false;
            }
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::Quit => self.should_quit = true,
        }
        self.clamp_cursor();
        self.sync_context();
    }

    fn toggle_widget(&mut self, id: WidgetId) {
        let tab = self.active_tab();
        let name = tab.find(id).map(|entry| entry.name);
        let section = tab.section();
        match (self.dashboard.toggle(id), name) {
            (ToggleOutcome::Added, Some(name)) => {
                self.set_status(format!("Added {name} to {}", section.title()), StatusLevel::Info)
            }
            (ToggleOutcome::Removed, _) => self.set_status(
                format!("Removed {} from {}", name.unwrap_or("widget"), section.title()),
                StatusLevel::Info,
            ),
            _ => {}
        }
    }

    fn confirm_draft(&mut self, mut draft: Draft) {
        let section = self.dashboard.active_section();
        if self.dashboard.confirm_draft(&mut draft).is_some() {
            self.set_status(
                format!("Added custom widget to {}", section.title()),
                StatusLevel::Info,
            );
        }
        self.close_picker();
    }

    pub fn remove_widget(&mut self, section: SectionName, id: WidgetId) {
        let name = self
            .dashboard
            .section(section)
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.name.clone());
        if self.dashboard.remove_widget(section, id) > 0 {
            let name = name.unwrap_or_else(|| id.to_string());
            self.set_status(format!("Removed {name}"), StatusLevel::Info);
        }
    }

    // === Search ===

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Leave search editing, keeping the term
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.input_mode = InputMode::Normal;
        self.after_search_change();
    }

    pub fn search_push(&mut self, ch: char) {
        self.search.push(ch);
        self.after_search_change();
    }

    pub fn search_pop(&mut self) {
        self.search.pop();
        self.after_search_change();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.after_search_change();
    }

    fn after_search_change(&mut self) {
        debug!(term = %self.search, "search changed");
        self.clamp_cursor();
        self.sync_context();
    }

    // === Card cursor ===

    pub fn next_card(&mut self) {
        let len = self.visible_widgets(self.focus_section).count();
        if self.focus_card + 1 < len {
            self.focus_card += 1;
        }
    }

    pub fn prev_card(&mut self) {
        self.focus_card = self.focus_card.saturating_sub(1);
    }

    pub fn next_section(&mut self) {
        self.focus_section = self.focus_section.next();
        self.clamp_cursor();
    }

    pub fn prev_section(&mut self) {
        self.focus_section = self.focus_section.prev();
        self.clamp_cursor();
    }

    pub fn set_focus_section(&mut self, section: SectionName) {
        self.focus_section = section;
        self.clamp_cursor();
    }

    pub fn remove_focused(&mut self) {
        let Some(id) = self.focused_widget().map(|w| w.id) else {
            return;
        };
        self.apply_action(Action::RemoveWidget(self.focus_section, id));
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_widgets(self.focus_section).count();
        if self.focus_card >= len {
            self.focus_card = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIds;

    fn app() -> App {
        App::with_dashboard(Dashboard::with_ids(Box::new(SequentialIds::starting_at(1))))
    }

    #[test]
    fn test_context_tracks_search() {
        let mut app = app();
        assert_eq!(app.ctx.visible.len(), 4);
        app.set_search("risk");
        assert_eq!(
            app.ctx.visible,
            vec![VisibleWidget {
                section: SectionName::CspmExecutive,
                id: WidgetId(102),
            }]
        );
    }

    #[test]
    fn test_remove_focused_clamps_cursor() {
        let mut app = app();
        app.next_card();
        assert_eq!(app.focused_widget().map(|w| w.id), Some(WidgetId(102)));
        app.remove_focused();
        assert_eq!(app.focus_card, 0);
        assert_eq!(app.focused_widget().map(|w| w.id), Some(WidgetId(101)));
        assert!(!app.ctx.selection.is_selected(WidgetId(102)));
        assert!(app.status_text().is_some());
    }

    #[test]
    fn test_confirm_closes_picker() {
        let mut app = app();
        app.open_picker();
        app.apply_action(Action::ConfirmDraft(Draft::new("Foo", "")));
        assert!(!app.picker_open);
        assert_eq!(app.dashboard.section(SectionName::CspmExecutive).len(), 3);

        app.open_picker();
        app.apply_action(Action::ConfirmDraft(Draft::new(" ", "")));
        assert!(!app.picker_open);
        assert_eq!(app.dashboard.section(SectionName::CspmExecutive).len(), 3);
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut app = app();
        app.status_timeout = Duration::ZERO;
        app.set_status("hello", StatusLevel::Warn);
        std::thread::sleep(Duration::from_millis(2));
        app.on_tick();
        assert!(app.status.is_none());
    }

    fn start(startup: Startup) -> App {
        App::from_startup(
            startup,
            Dashboard::with_ids(Box::new(SequentialIds::starting_at(1))),
        )
    }

    fn bad_config() -> ConfigError {
        ConfigError::Read {
            path: "config.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }

    #[test]
    fn test_startup_cli_tab_wins_over_config() {
        let config = Config {
            default_tab: Some("image".to_string()),
            ..Config::default()
        };
        let startup = Startup::new(Ok(config.clone()), Some("cwpp".to_string()), None);
        let app = start(startup);
        assert_eq!(app.active_tab(), CatalogTab::Cwpp);
        assert!(app.status.is_none());

        let startup = Startup::new(Ok(config), None, Some("risk".to_string()));
        let app = start(startup);
        assert_eq!(app.active_tab(), CatalogTab::Image);
        assert_eq!(app.search, "risk");
        assert_eq!(app.ctx.visible.len(), 1);
        assert_eq!(app.ctx.active_tab, CatalogTab::Image);
    }

    #[test]
    fn test_startup_bad_tab_keeps_default() {
        let startup = Startup::new(Ok(Config::default()), Some("billing".to_string()), None);
        let app = start(startup);
        assert_eq!(app.active_tab(), CatalogTab::Cspm);
        let (text, level) = app.status_text().unwrap();
        assert!(text.contains("billing"));
        assert_eq!(level, StatusLevel::Warn);
    }

    #[test]
    fn test_startup_keeps_every_warning() {
        let startup = Startup::new(Err(bad_config()), Some("billing".to_string()), None);
        assert_eq!(startup.config.tick_rate_ms, 200);
        let app = start(startup);
        let (text, _) = app.status_text().unwrap();
        assert!(text.starts_with("Config ignored: read config config.toml"));
        assert!(text.contains("unknown catalog tab `billing`"));
        assert_eq!(app.active_tab(), CatalogTab::Cspm);
    }

    #[test]
    fn test_open_picker_closes_menu() {
        let mut app = app();
        app.toggle_menu();
        assert!(app.menu_open);
        app.apply_action(Action::OpenPicker);
        assert!(app.picker_open);
        assert!(!app.menu_open);
    }
}
