//! TUI front-end entry (Ratatui + Crossterm)
//! - Builds the persistence stack (document store + local JSON fallback)
//! - Restores any saved session, then runs the event loop

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::auth::{LocalProvider, Session};
use crate::dashboard::HistoryMode;
use crate::store::{connection, migrate, LocalStore, Persistence, RemoteStore};

pub mod input;
pub mod state;
pub mod ui;
pub mod util;

pub async fn run() -> Result<()> {
    let mut app = init_app().await?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        // periodic re-persist while a session is active; stops with the session
        if app.autosave_due() {
            app.autosave().await;
        }

        if app.quit {
            break;
        }
    }

    disable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

pub async fn init_app() -> Result<state::App> {
    let local = LocalStore::from_env()?;

    // the document store is optional: any connection problem means offline
    // mode, everything then runs on the local JSON copy
    let remote = match connection::get_db_pool(&connection::database_url()).await {
        Ok(pool) => match migrate::run_migrations(&pool).await {
            Ok(()) => Some(RemoteStore::new(pool)),
            Err(err) => {
                log::warn!("migrations failed, running offline: {err}");
                None
            }
        },
        Err(err) => {
            log::warn!("document store unavailable, running offline: {err}");
            None
        }
    };

    let store = Persistence::new(remote, local.clone(), HistoryMode::from_env());

    let mut session = Session::new(Box::new(LocalProvider::new(local.clone())), local);
    session.on_change(|user| match user {
        Some(user) => log::info!("session started for {}", user.email),
        None => log::info!("session ended"),
    });

    Ok(state::App::new(session, store).await)
}
