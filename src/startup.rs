use crate::shutdown;
use brody::components::day_preparation::{render, ViewState};
use brody::components::DayPreparationHandle;
use brody::config::Config;
use brody::error::{other_error, BrodyResult, Error};
use brody::utils::i18n::set_locale;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    // stdout carries the rendered page, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the day preparation view in the terminal until input ends or a signal arrives
pub async fn start_app(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    {
        let config_read = config.read().await;
        let locale = set_locale(&config_read.locale);
        info!("Setting locale to {}", locale);
        info!("Using planning endpoint {}", config_read.endpoint_url()?);
    }

    let handle = DayPreparationHandle::new(Arc::clone(&config));

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, shutdown_handle).await;
    });

    // Re-render on every state replacement
    let mut state_rx = handle.subscribe();
    let render_task = tokio::spawn(async move {
        let initial = state_rx.borrow_and_update().clone();
        print_page(&initial);

        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            print_page(&state);
        }
    });

    let input_rx = spawn_input_reader();

    tokio::select! {
        result = handle_input(input_rx, handle.clone()) => {
            info!("Input closed, shutting down");
            handle.shutdown().await?;
            result?;
        }
        _ = shutdown_recv => {
            info!("Received shutdown signal, shutting down");
        }
    }

    render_task.abort();
    Ok(())
}

/// Read stdin lines on a dedicated thread; blocking reads must not hold up runtime shutdown
fn spawn_input_reader() -> mpsc::Receiver<std::io::Result<String>> {
    let (line_tx, line_rx) = mpsc::channel(8);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    line_rx
}

/// Turn input lines into button clicks
async fn handle_input(
    mut line_rx: mpsc::Receiver<std::io::Result<String>>,
    handle: DayPreparationHandle,
) -> BrodyResult<()> {
    while let Some(line) = line_rx.recv().await {
        let line = line.map_err(Error::from)?;

        match line.trim() {
            "q" | "quit" => break,
            _ => {
                if handle.click().await?.is_none() {
                    debug!("Still preparing, click ignored");
                }
            }
        }
    }

    Ok(())
}

fn print_page(state: &ViewState) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", render::render_page(state));
    let _ = writeln!(stdout, "{}", render::prompt());
    let _ = stdout.flush();
}
