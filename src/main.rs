mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::Mutex;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Settings;
use controller::AppController;
use model::{AppModel, CatalogClient, Route};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Arc::new(Settings::parse());

    let _log_guard = match logging::init_logging(&settings.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== BuildUp Client Starting ===");
    tracing::debug!(catalog_url = %settings.catalog_url, "Using catalog");

    let catalog = CatalogClient::new(&settings.catalog_url, settings.timeout())?;

    let mut app_model = AppModel::new();
    app_model.set_catalog_client(Arc::new(catalog));
    let model = Arc::new(Mutex::new(app_model));

    let controller = AppController::new(model.clone(), settings.clone());

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let start: Route = settings.start.into();
    controller.navigate_to(start).await;

    let res = run_app(&mut terminal, model.clone(), controller.clone()).await;

    controller.teardown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("BuildUp client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (ui_state, home, categories, drop_zone, should_quit) = {
            let model_guard = model.lock().await;

            // Auto-clear old errors and notices (after 5 seconds)
            model_guard.auto_clear_old_errors().await;

            (
                model_guard.get_ui_state().await,
                model_guard.get_screen(model::ScreenId::Home).await,
                model_guard.get_screen(model::ScreenId::Categories).await,
                model_guard.get_drop_zone().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &ui_state, &home, &categories, &drop_zone);
        })?;

        // Short poll keeps debounced results and loading states flowing in
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    let _ = controller.handle_key_event(key).await;
                }
                Event::Paste(text) => controller.handle_paste(&text).await,
                _ => {}
            }
        }
    }

    Ok(())
}
