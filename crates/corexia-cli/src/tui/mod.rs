//! Interactive dashboard: a crossterm event loop around the same
//! engine pipeline the list commands use.

mod app;
mod messages;
mod ui;

use anyhow::Result;
use app::DashboardApp;
use corexia_runtime::{AppStore, Config, DataSource};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub fn run(store: AppStore, source: DataSource, config: Config) -> Result<()> {
    let mut app = DashboardApp::new(store, source, config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        app.absorb_loads();
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            handle_key(app, key.code)?;
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_key(app: &mut DashboardApp, code: KeyCode) -> Result<()> {
    // Search prompt captures all input while open
    if let Some(buffer) = app.search_input.as_mut() {
        match code {
            KeyCode::Esc => app.search_input = None,
            KeyCode::Enter => app.commit_search(),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => buffer.push(c),
            _ => {}
        }
        return Ok(());
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('s') => {
            if let Some(list) = app.current_list() {
                list.cycle_sort();
            }
        }
        KeyCode::Char('o') => {
            if let Some(list) = app.current_list() {
                list.toggle_direction();
            }
        }
        KeyCode::Left => {
            if let Some(list) = app.current_list() {
                list.previous_page();
            }
        }
        KeyCode::Right => {
            if let Some(list) = app.current_list() {
                list.next_page();
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if let Some(list) = app.current_list() {
                list.grow_page_size();
            }
        }
        KeyCode::Char('-') => {
            if let Some(list) = app.current_list() {
                list.shrink_page_size();
            }
        }
        KeyCode::Char(']') | KeyCode::Tab => app.tab = app.tab.next(),
        KeyCode::Char('[') | KeyCode::BackTab => app.tab = app.tab.previous(),
        KeyCode::Char('b') => {
            let collapsed = app.store.sidebar_collapsed();
            app.store.set_sidebar_collapsed(!collapsed)?;
        }
        KeyCode::Char('l') => {
            let next = app.store.locale().cycled();
            app.store.set_locale(next)?;
        }
        KeyCode::Char('r') => app.reload_current(),
        _ => {}
    }

    Ok(())
}
