//! pomo - minimal terminal pomodoro timer
//!
//! Counts down focus, short-break and long-break intervals, rings when a
//! countdown completes and switches to the next mode.
//!
//! # Architecture
//!
//! The TUI uses an event-driven architecture with three main components:
//!
//! 1. **Keyboard Task**: Polls for keyboard input and sends events to the main loop
//! 2. **Tick Task**: Spawned by the scheduler while the countdown runs
//! 3. **Main Event Loop**: Processes events, updates state, and renders the UI
//!
//! All tasks respect a shared `CancellationToken` for graceful shutdown.
//!
//! # Usage
//!
//! ```text
//! pomo                      # 25/5/15 minute defaults
//! pomo --focus 50 --mute    # longer focus blocks, no alert
//! pomo config               # print the effective configuration
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    cursor::Show,
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pomo_core::Mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{filter::Directive, EnvFilter};

use pomo_tui::app::App;
use pomo_tui::config::Config;
use pomo_tui::error::{Result as TuiResult, TuiError};
use pomo_tui::input::{handle_key_event, Action, Event};
use pomo_tui::notifier::ToneNotifier;
use pomo_tui::scheduler::IntervalScheduler;
use pomo_tui::ui;

// ============================================================================
// CLI Arguments
// ============================================================================

/// pomo - minimal terminal pomodoro timer
#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "Focus / short break / long break countdown in the terminal")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Focus length in minutes
    #[arg(long, value_name = "MIN", global = true)]
    focus: Option<u32>,

    /// Short break length in minutes
    #[arg(long, value_name = "MIN", global = true)]
    short_break: Option<u32>,

    /// Long break length in minutes
    #[arg(long, value_name = "MIN", global = true)]
    long_break: Option<u32>,

    /// Start with the completion alert muted
    #[arg(long, short = 'm', global = true)]
    mute: bool,

    /// Config file (default: <config dir>/pomo/config.toml)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. "pomo=debug"
    #[arg(long, value_name = "DIRECTIVE", default_value = "pomo=info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the effective configuration as TOML
    Config,
}

impl Args {
    /// Loads the config file and applies command-line overrides on top.
    fn effective_config(&self) -> TuiResult<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(minutes) = self.focus {
            config.durations.focus = minutes;
        }
        if let Some(minutes) = self.short_break {
            config.durations.short_break = minutes;
        }
        if let Some(minutes) = self.long_break {
            config.durations.long_break = minutes;
        }
        if self.mute {
            config.sound = false;
        }
        Ok(config)
    }
}

// ============================================================================
// Terminal Session
// ============================================================================

/// Raw-mode, alternate-screen terminal that is restored on drop.
///
/// `restore` can be called explicitly to observe cleanup errors; the drop
/// path only logs them.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    fn enter() -> TuiResult<Self> {
        let init_error = |e: io::Error| TuiError::TerminalInit(e.to_string());

        enable_raw_mode().map_err(init_error)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(init_error(e));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                Err(init_error(e))
            }
        }
    }

    fn restore(&mut self) -> TuiResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let cleanup_error = |e: io::Error| TuiError::TerminalCleanup(e.to_string());
        disable_raw_mode().map_err(cleanup_error)?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show).map_err(cleanup_error)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!(error = %e, "Failed to cleanup terminal");
        }
    }
}

// ============================================================================
// Keyboard Input Task
// ============================================================================

/// How long one blocking poll waits before the cancellation token is checked.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Maps a terminal event to a loop event; mouse, focus and paste are dropped.
fn translate_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

fn poll_terminal_event() -> Option<CrosstermEvent> {
    match event::poll(INPUT_POLL) {
        Ok(true) => event::read().ok(),
        _ => None,
    }
}

/// Forwards keyboard and resize events into the loop until cancelled or the
/// receiver is gone.
fn spawn_keyboard_task(
    event_tx: mpsc::UnboundedSender<Event>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while !cancel_token.is_cancelled() {
            let polled = match tokio::task::spawn_blocking(poll_terminal_event).await {
                Ok(polled) => polled,
                Err(e) => {
                    error!(error = %e, "Keyboard polling task panicked");
                    break;
                }
            };

            let Some(event) = polled.and_then(translate_event) else {
                continue;
            };
            if event_tx.send(event).is_err() {
                debug!("Event channel closed");
                break;
            }
        }
        debug!("Keyboard task stopped");
    })
}

// ============================================================================
// Main Event Loop
// ============================================================================

/// Runs the main TUI event loop until the user quits.
///
/// Each iteration renders, then handles at most one event to completion.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    cancel_token: &CancellationToken,
) -> Result<()> {
    // Upper bound between redraws when no event arrives
    let redraw_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match tokio::time::timeout(redraw_rate, event_rx.recv()).await {
            Ok(Some(Event::Key(key))) => {
                if handle_key_event(key, app) == Action::Quit {
                    info!("User requested quit");
                    cancel_token.cancel();
                    break;
                }
            }
            Ok(Some(Event::Tick(generation))) => {
                app.on_tick(generation);
            }
            Ok(Some(Event::Resize(width, height))) => {
                // ratatui picks up the new size on the next draw
                debug!(width, height, "Terminal resized");
            }
            Ok(None) => {
                warn!("Event channel closed");
                break;
            }
            Err(_) => {}
        }

        if app.should_quit {
            cancel_token.cancel();
            break;
        }

        if cancel_token.is_cancelled() {
            break;
        }
    }

    Ok(())
}

// ============================================================================
// Logging Setup
// ============================================================================

/// `<state dir>/pomo/pomo.log`.
///
/// The state dir is `$XDG_STATE_HOME` or `~/.local/state`.
fn log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .map(|dir| dir.join("pomo").join("pomo.log"))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the file-backed subscriber.
///
/// stderr shares the terminal with the alternate screen, so logs only ever
/// go to the file.
fn init_logging(level: &str) {
    let opened = match log_path() {
        Some(path) => open_log_file(&path)
            .map_err(|e| eprintln!("Warning: Cannot open log file {}: {e}", path.display()))
            .ok(),
        None => {
            eprintln!("Warning: No state directory, logging disabled");
            None
        }
    };
    let Some(file) = opened else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .init();
        return;
    };

    let directive = level.parse::<Directive>().unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log level {level:?} ({e}), using info");
        Directive::from(tracing::Level::INFO)
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config problems are reported before the terminal is taken over
    let config = args.effective_config().context("Failed to load configuration")?;
    let durations = match config.duration_table() {
        Ok(table) => table,
        Err(e) => bail!("Invalid durations: {e}"),
    };

    if let Some(Command::Config) = args.command {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logging(&args.log_level);

    info!(
        focus = durations.get(Mode::Focus),
        short_break = durations.get(Mode::ShortBreak),
        long_break = durations.get(Mode::LongBreak),
        sound = config.sound,
        "pomo starting..."
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let cancel_token = CancellationToken::new();

    let mut session = match TerminalSession::enter() {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "Failed to initialize terminal");
            return Err(e.into());
        }
    };

    let scheduler = IntervalScheduler::new(config.tick_period(), event_tx.clone());
    let mut app = App::new(durations, Box::new(scheduler), Box::new(ToneNotifier::new()))
        .with_sound(config.sound);

    let keyboard_handle = spawn_keyboard_task(event_tx, cancel_token.clone());

    let result =
        run_event_loop(&mut session.terminal, &mut app, &mut event_rx, &cancel_token).await;

    cancel_token.cancel();
    // Dropping the app cancels any running tick task
    drop(app);

    let _ = tokio::time::timeout(Duration::from_millis(100), keyboard_handle).await;

    if let Err(e) = session.restore() {
        error!(error = %e, "Failed to cleanup terminal");
    }

    info!("pomo stopped");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

    #[test]
    fn test_translate_key_and_resize() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(matches!(
            translate_event(CrosstermEvent::Key(key)),
            Some(Event::Key(k)) if k == key
        ));
        assert!(matches!(
            translate_event(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
    }

    #[test]
    fn test_translate_drops_other_events() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(translate_event(CrosstermEvent::Mouse(mouse)).is_none());
        assert!(translate_event(CrosstermEvent::FocusGained).is_none());
    }

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("pomo").join("pomo.log");

        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "first").unwrap();
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_log_path_ends_with_pomo_log() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("pomo/pomo.log"));
        }
    }

    #[test]
    fn test_cli_overrides_durations() {
        let args = Args::parse_from(["pomo", "--focus", "50", "--long-break", "20", "--mute"]);
        assert_eq!(args.focus, Some(50));
        assert_eq!(args.short_break, None);
        assert_eq!(args.long_break, Some(20));
        assert!(args.mute);
        assert_eq!(args.log_level, "pomo=info");
    }
}
