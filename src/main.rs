mod config;
mod controller;
mod logging;
mod model;
mod source;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Settings;
use controller::AppController;
use model::{AppModel, Document};
use view::AppView;

const SAMPLE_LABEL: &str = "sample";
const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_args();

    if let Err(e) = logging::init_logging(&settings.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== staccato starting ===");

    let (document, label) = match settings.file.as_deref() {
        Some(path) => {
            let text = source::load_text_file(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            (Document::new(text), source::source_label(path))
        }
        None => (Document::sample(), SAMPLE_LABEL.to_string()),
    };

    tracing::info!(
        source = %label,
        words = document.len(),
        wpm = settings.wpm,
        "Document loaded"
    );

    let app_model = AppModel::new(document, label, settings.wpm, settings.summary_bullets);
    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    // Lets Ctrl+Enter through where the terminal can report it; Ctrl+S works everywhere
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("staccato shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    let mut events = EventStream::new();
    let mut snapshots = model.lock().await.subscribe();
    // Drives error expiry and redraws on resize
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    loop {
        let (view, ui_state, should_quit) = {
            let mut model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors();

            (
                model_guard.reader_view(),
                model_guard.get_ui_state(),
                model_guard.should_quit(),
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &view, &ui_state);
        })?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    if let Err(e) = controller.handle_key_event(key).await {
                        tracing::warn!(error = %e, "Key handling failed");
                    }
                }
                Some(Ok(Event::Paste(text))) => controller.handle_paste(text).await,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tick.tick() => {}
        }
    }

    // Leave no advance task behind
    model.lock().await.cancel_advance();

    Ok(())
}
