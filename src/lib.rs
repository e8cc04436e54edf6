//! A customizable cross-platform terminal dashboard that graphs smoothed
//! per-core CPU utilization, plus the total, over a fixed window of history.
//!
//! Everything the `coregraph` binary does starts from [`start_coregraph`].

pub mod app;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod options;

pub mod utils {
    pub(crate) mod cancellation_token;
    pub mod error;
    pub mod general;
    pub mod logging;
}

use std::{
    io::{stderr, stdout, Stdout, Write},
    panic::{self, PanicHookInfo},
    path::Path,
    sync::{
        mpsc::{self, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{poll, read, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use tui::{backend::CrosstermBackend, Terminal};

use crate::{
    app::{ticker::Ticker, App},
    canvas::Painter,
    collection::{CpuSource, SysinfoSource},
    constants::INPUT_POLL_MILLISECONDS,
    event::{handle_key_event_or_break, CoregraphEvent},
    options::{get_args, get_or_create_config, init_app_config, Styles},
    utils::{cancellation_token::CancellationToken, error::DrawResult},
};

type CoregraphTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run coregraph until the user quits.
///
/// `enable_error_hook` is set once the terminal has been taken over, after
/// which the caller should call [`reset_stdout`] before printing any error.
pub fn start_coregraph(enable_error_hook: &mut bool) -> anyhow::Result<()> {
    let args = get_args();

    #[cfg(feature = "logging")]
    {
        if let Some(log_file) = &args.general_args.log_file {
            utils::logging::init_logger(log::LevelFilter::Debug, std::ffi::OsStr::new(log_file))
                .context("Unable to set up the log file.")?;
        }
    }

    let config = get_or_create_config(args.general_args.config_location.as_deref().map(Path::new))
        .context("Unable to properly parse or create the config file.")?;

    let app_config_fields = init_app_config(&args, &config)
        .context("Found an issue while trying to build the app config.")?;
    let styles = Styles::new(&config).context("Found an issue while setting colours.")?;
    crate::info!("Starting with {app_config_fields:?}");

    // Find the cores before touching the terminal, so setup failures print normally.
    let mut source = SysinfoSource::new(app_config_fields.max_cores)
        .context("Unable to set up the CPU usage counters.")?;
    let mut app = App::new(app_config_fields, source.core_count())
        .context("Unable to set up the CPU history.")?;
    let painter = Painter::init(styles);

    check_if_terminal();

    // Set up the terminal.
    enable_raw_mode()?;
    *enable_error_hook = true;

    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    panic::set_hook(Box::new(panic_hook));

    let cancellation_token = Arc::new(CancellationToken::default());
    let (sender, receiver) = mpsc::channel();

    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            // Nothing left to do if the main thread is gone.
            let _ = sender.send(CoregraphEvent::Terminate);
        })?;
    }

    let input_thread = create_input_thread(sender, cancellation_token.clone());

    let mut ticker = Ticker::new(
        Duration::from_millis(app.app_config_fields.update_rate),
        Instant::now(),
    );
    try_drawing(&mut terminal, &app, &painter)?;

    loop {
        match receiver.recv_timeout(ticker.time_until_tick(Instant::now())) {
            Ok(CoregraphEvent::KeyInput(event)) => {
                if handle_key_event_or_break(event) {
                    break;
                }
            }
            Ok(CoregraphEvent::Resize) => {
                try_drawing(&mut terminal, &app, &painter)?;
            }
            Ok(CoregraphEvent::Terminate) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }

        let now = Instant::now();
        if ticker.poll(now) {
            app.tick(&mut source, now);
            try_drawing(&mut terminal, &app, &painter)?;
        }
    }

    cancellation_token.cancel();
    if input_thread.join().is_err() {
        crate::error!("The input thread panicked.");
    }
    cleanup_terminal(&mut terminal)?;
    crate::info!("Exiting after {} ticks.", app.history.ticks());

    Ok(())
}

/// Draw a frame, restoring the terminal if that fails.
fn try_drawing(terminal: &mut CoregraphTerminal, app: &App, painter: &Painter) -> DrawResult<()> {
    if let Err(err) = terminal.draw(|f| painter.draw_data(f, app)) {
        crate::error!("Failed to draw a frame: {err}");
        cleanup_terminal(terminal)?;
        return Err(err.into());
    }

    Ok(())
}

/// Hand the terminal back to the shell.
pub fn cleanup_terminal(terminal: &mut CoregraphTerminal) -> DrawResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Warn if stdout isn't a terminal, since the dashboard needs one.
fn check_if_terminal() {
    if !stdout().is_tty() {
        eprintln!(
            "Warning: coregraph is not being output to a terminal. Things might not work properly."
        );
        eprintln!("If you're stuck, press 'q' or 'Ctrl-c' to quit the program.");
        stderr().flush().unwrap_or(());
        thread::sleep(Duration::from_secs(1));
    }
}

/// Leave raw mode and the alternate screen, ignoring any errors.
pub fn reset_stdout() {
    let mut stdout = stdout();
    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

/// Restore the terminal before printing the panic, or it gets lost in the
/// alternate screen.
fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let message = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };
    let location = panic_info
        .location()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown location".to_string());
    let stacktrace = format!("{:?}", backtrace::Backtrace::new());

    reset_stdout();

    let _ = execute!(
        stdout(),
        Print(format!(
            "thread '<unnamed>' panicked at '{message}', {location}\n\r{stacktrace}"
        )),
    );
}

/// Forward key presses and resizes to the main thread until cancelled.
fn create_input_thread(
    sender: Sender<CoregraphEvent>, cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let poll_duration = Duration::from_millis(INPUT_POLL_MILLISECONDS);

        loop {
            if cancellation_token.is_cancelled() {
                break;
            }

            let event = match poll(poll_duration).and_then(|ready| ready.then(read).transpose()) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    crate::debug!("Failed to read terminal input: {err}");
                    if cancellation_token.sleep_with_cancellation(poll_duration) {
                        break;
                    }
                    continue;
                }
            };

            let forwarded = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    Some(CoregraphEvent::KeyInput(key))
                }
                Event::Resize(_, _) => Some(CoregraphEvent::Resize),
                _ => None,
            };

            if let Some(forwarded) = forwarded {
                if sender.send(forwarded).is_err() {
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn input_thread_stops_once_cancelled() {
        let cancellation_token = Arc::new(CancellationToken::default());
        let (sender, _receiver) = mpsc::channel();

        let input_thread = create_input_thread(sender, cancellation_token.clone());
        thread::sleep(Duration::from_millis(INPUT_POLL_MILLISECONDS * 2));
        cancellation_token.cancel();

        assert!(input_thread.join().is_ok());
    }
}
