//! Event handling for the TUI.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eventdeck_events::EventCatalog;
use eventdeck_toast::{ToastConfig, ToastController};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime as TokioRuntime;
use tracing::{debug, info};

use super::app::{App, Focus, NavAction};
use super::ui;
use super::Options;

/// Result type for TUI operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Cards per grid row; Up/Down move by a whole row.
pub(super) const GRID_COLUMNS: usize = 3;

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Create the runtime the toast timers run on.
///
/// The UI loop stays synchronous; only timer tasks live here.
fn init_timer_runtime() -> Result<TokioRuntime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("eventdeck-timer")
        .enable_time()
        .build()?;
    Ok(runtime)
}

/// Run the TUI event loop.
pub fn run(options: Options) -> Result<()> {
    // Must outlive the app so timers can be cancelled on teardown
    let runtime = init_timer_runtime()?;

    let config = ToastConfig::new().with_dismiss_after(options.dismiss_after);
    let toast = ToastController::new(config, runtime.handle().clone());
    let mut app = App::new(EventCatalog::sample(), toast, &options);

    info!(
        category = %app.selected_category(),
        search = %app.search,
        "starting tui"
    );

    // Setup terminal
    let mut terminal = setup_terminal()?;

    // Run event loop
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal before reporting errors
    restore_terminal(&mut terminal)?;

    // Tear the page down; drops the pending dismiss timer, if any
    drop(app);
    debug!("tui stopped");

    result
}

/// Main event loop.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for events with timeout
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        // Apply expired notification timers
        app.tick();

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply one key press to the app state.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle Ctrl+C to quit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Filter row is reachable from both focus modes
    match key.code {
        KeyCode::Tab => return app.next_category(),
        KeyCode::BackTab => return app.prev_category(),
        _ => {}
    }

    match app.focus {
        Focus::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => app.focus_cards(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_search()
            }
            KeyCode::Char(c) => app.enter_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            _ => {}
        },
        Focus::Cards => match key.code {
            KeyCode::Char('/') => app.focus_search(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('x') => app.dismiss_toast(),
            KeyCode::Enter | KeyCode::Char('r') => app.rsvp_selected(),
            KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_by(-(GRID_COLUMNS as isize)),
            KeyCode::Down | KeyCode::Char('j') => app.select_by(GRID_COLUMNS as isize),
            KeyCode::Char('[') => app.prev_category(),
            KeyCode::Char(']') => app.next_category(),
            KeyCode::Char(c) => {
                if let Some(action) = NavAction::from_key(c) {
                    app.nav(action);
                }
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{settle, test_app};
    use crate::tui::Options;
    use tokio::time::sleep;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_c_quits() {
        let mut app = test_app(Options::default());
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_mode_captures_letters() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quiz");

        // 'q' and 'u' were typed, not treated as quit / subscribe
        assert!(!app.should_quit);
        assert!(!app.toast.is_visible());
        assert_eq!(app.search, "quiz");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Cards);
        assert!(!app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_u_clears_search() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        assert!(app.visible_events().is_empty());

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.search, "");
        assert_eq!(app.cursor_pos, 0);
        assert_eq!(app.visible_events().len(), 8);
        assert_eq!(app.focus, Focus::Search);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_then_filter() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "dinner");
        press(&mut app, KeyCode::Enter);

        // All -> Conference -> Workshop -> Networking
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);

        let titles: Vec<&str> = app.visible_events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Tech Founders Dinner"]);

        press(&mut app, KeyCode::BackTab);
        assert!(app.visible_events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_grid_navigation() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 4);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 7);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rsvp_then_close() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.toast.is_visible());

        press(&mut app, KeyCode::Char('x'));
        assert!(!app.toast.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_interaction_extends_toast() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Char('i'));

        sleep(Duration::from_millis(4000)).await;
        press(&mut app, KeyCode::Char('n'));

        sleep(Duration::from_millis(4000)).await;
        settle().await;
        app.tick();
        assert!(app.toast.is_visible());

        sleep(Duration::from_millis(1000)).await;
        settle().await;
        app.tick();
        assert!(!app.toast.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_q_quits_from_cards() {
        let mut app = test_app(Options::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
