use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use cnapp_dash::app::{App, Startup};
use cnapp_dash::config;
use cnapp_dash::store::Dashboard;
use cnapp_dash::terminal::{install_panic_restore, TerminalGuard};
use cnapp_dash::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "cnapp-dash",
    version,
    about = "CNAPP dashboard: browse, add and remove security widgets in the terminal"
)]
struct Args {
    /// Picker category selected at startup (CSPM, CWPP, Image, Ticket)
    #[arg(long)]
    tab: Option<String>,

    /// Initial search term
    #[arg(long)]
    search: Option<String>,

    /// Config file path (default: ~/.config/cnapp-dash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let startup = Startup::new(config::load(args.config.as_deref()), args.tab, args.search);

    let _log_guard = logging::init(startup.config.log_filter.as_deref());
    let tick_rate = startup.config.tick_rate();

    let app = App::from_startup(startup, Dashboard::new());
    info!(tab = %app.active_tab().title(), "starting");

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, tick_rate);

    drop(guard);

    if let Err(err) = res {
        tracing::error!(error = ?err, "terminal loop failed");
        eprintln!("{err:?}");
    }

    info!("exiting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
