use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// N.E.X.T terminal client: job matching for individuals, companies and startups
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (nexttui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Show the splash and onboarding screens again
    #[arg(long)]
    reset_onboarding: bool,
}

mod app;
mod handlers;
mod ui;
mod utils;

use nexttui::api::MockGateway;
use nexttui::config::Config;
use nexttui::model::{self, SessionModel};
use nexttui::services::{spawn_api_service, ApiRequest, ApiResponse};
use nexttui::storage::StateDb;

/// Frame interval while the card deck is moving
const ANIMATION_POLL: Duration = Duration::from_millis(16);

/// Frame interval otherwise
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct App {
    /// Pure application state
    pub model: model::Model,

    /// Requests to the background gateway worker
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,

    /// Responses from the background gateway worker
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Local onboarding/session flags
    pub store: StateDb,
}

impl App {
    fn new(config: &Config, reset_onboarding: bool) -> Result<Self> {
        let store = match &config.state_db_path {
            Some(path) => StateDb::open(path)?,
            None => StateDb::new()?,
        };

        if reset_onboarding {
            store
                .reset_onboarding()
                .context("Failed to reset onboarding flags")?;
            tracing::info!("Onboarding flags reset");
        }

        let flags = store.load_flags()?;
        let user = store.load_session()?;
        let user_type = store.load_user_type()?;
        tracing::debug!(
            "Loaded state: flags={:?} signed_in={} user_type={:?}",
            flags,
            user.is_some(),
            user_type
        );

        let gateway = Arc::new(MockGateway::new(config.gateway_latency()));
        let (api_tx, api_rx) = spawn_api_service(gateway);

        let mut model = model::Model::new(config.vim_mode, config.deck_settings());
        if let Some(role) = user.as_ref().map(|u| u.user_type) {
            model.profile.ensure_for(role);
        }
        model.session = SessionModel::new(flags, user, user_type);

        Ok(Self {
            model,
            api_tx,
            api_rx,
            store,
        })
    }

    /// Queue a request for the gateway worker
    pub fn send_request(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            tracing::error!("API service is gone; request dropped");
        }
    }

    pub fn toast_error(&mut self, error: impl std::fmt::Display) {
        self.model.show_toast(format!("Error: {}", error));
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {:?}", path))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nexttui=debug"));

    // The TUI owns stdout, so logs only go to the file
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();

    tracing::info!("Debug logging to {:?}", path);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Load configuration, then let CLI flags override it
    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    match &config_path {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }
    if args.vim {
        config.vim_mode = true;
    }

    let mut app = App::new(&config, args.reset_onboarding)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();

        // Advance time-driven state before drawing
        app.tick_splash(now);
        app.tick_deck(now);

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.should_dismiss_toast(Instant::now()) {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        let timeout = if app.model.is_animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key)?,
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
