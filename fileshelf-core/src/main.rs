//! src/main.rs
//! Terminal manifest browser: load `files.json` once, filter it as you type,
//! copy URLs and download files.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::{Notify, mpsc},
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use fileshelf_core::{
    AppError, LoggerBuilder,
    cli::Cli,
    config::Config,
    controller::{
        actions::Action,
        dispatcher::{ActionDispatcher, Flow},
        key_map::map_event,
    },
    listing::print_listing,
    logging::LoggerConfig,
    model::{
        app_state::AppState,
        resource::{ManifestSource, ResourceLinks},
        store::ManifestStore,
    },
    operators::{clipboard::SystemClipboard, download::ResourceDownloader},
    view::ui::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> anyhow::Result<()> {
    setup_panic_handler();

    let cli = Cli::parse();
    run(cli).await.context("fileshelf failed")
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::load(cli.config.as_deref()).await?;
    config.apply_cli(&cli);

    let _log_guard = init_logging(&config).await;

    match cli.print {
        Some(format) => {
            let query = cli.query.as_deref().unwrap_or("");
            print_listing(&config, query, format, &mut io::stdout().lock()).await
        }
        None => {
            let app = App::new(&config, cli.query.unwrap_or_default())?;
            app.run().await?;
            info!("Application exited cleanly");
            Ok(())
        }
    }
}

/// Logging failures never stop the browser; it just runs without a log file.
async fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let log_dir = match &config.log.dir {
        Some(dir) => dir.clone(),
        None => match Config::default_log_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Logging disabled: {e}");
                return None;
            }
        },
    };

    let logger = LoggerBuilder::new()
        .with_config(LoggerConfig::default())
        .with_log_dir(log_dir)
        .with_level(&config.log.level);

    match logger.build().await {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            None
        }
    }
}

struct App {
    terminal: AppTerminal,
    state: AppState,
    dispatcher: ActionDispatcher<SystemClipboard>,
    task_rx: mpsc::UnboundedReceiver<Action>,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: &Config, initial_query: String) -> Result<Self, AppError> {
        info!(source = %config.source, "Starting fileshelf");

        let source = ManifestSource::parse(&config.source);
        let (task_tx, task_rx) = mpsc::unbounded_channel::<Action>();

        let mut state = AppState::new(
            ResourceLinks::new(config.base_url.clone()),
            config.toast_duration,
        );
        state.set_query(initial_query);

        let downloader = Arc::new(ResourceDownloader::new(
            source.clone(),
            config.download_dir.clone(),
        ));
        let dispatcher = ActionDispatcher::new(SystemClipboard::new(), downloader, task_tx.clone());

        Self::spawn_manifest_load(source, task_tx);

        let terminal = setup_terminal()?;

        Ok(Self {
            terminal,
            state,
            dispatcher,
            task_rx,
            ui_renderer: UIRenderer::new(),
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// The single manifest fetch; its outcome comes back as an action.
    fn spawn_manifest_load(source: ManifestSource, task_tx: mpsc::UnboundedSender<Action>) {
        tokio::spawn(async move {
            let store = ManifestStore::new(source);
            let action = match store.load().await {
                Ok(manifest) => Action::ManifestLoaded(manifest),
                Err(e) => Action::ManifestFailed(e.to_string()),
            };
            let _ = task_tx.send(action);
        });
    }

    async fn run(mut self) -> Result<(), AppError> {
        self.setup_shutdown_handler();

        let mut event_stream = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.render()?;
                needs_redraw = false;
            }

            let action = tokio::select! {
                () = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => map_event(&event),
                    Some(Err(e)) => {
                        warn!(error = %e, "Terminal event error");
                        None
                    }
                    None => break,
                },

                Some(action) = self.task_rx.recv() => Some(action),

                _ = ticker.tick() => Some(Action::Tick),
            };

            let Some(action) = action else {
                continue;
            };

            match self.dispatcher.handle(&mut self.state, action) {
                Flow::Quit => break,
                Flow::Redraw => needs_redraw = true,
                Flow::Idle => {}
            }
        }

        info!(
            frames = self.ui_renderer.stats().frames,
            slow_frames = self.ui_renderer.stats().slow,
            "Event loop terminated"
        );
        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        let Self {
            terminal,
            state,
            ui_renderer,
            ..
        } = self;

        terminal
            .draw(|frame: &mut Frame<'_>| ui_renderer.render(frame, state))
            .map_err(terminal_error("draw frame"))?;
        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
                    warn!("Failed to create SIGTERM handler");
                    return;
                };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> AppError {
    move |e| AppError::terminal(format!("Failed to {action}: {e}"))
}

fn setup_terminal() -> Result<AppTerminal, AppError> {
    enable_raw_mode().map_err(terminal_error("enable raw mode"))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error("enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(terminal_error("create terminal"))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<(), AppError> {
    disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(terminal_error("leave alternate screen"))?;
    terminal.show_cursor().map_err(terminal_error("show cursor"))?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
