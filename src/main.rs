use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use todo::app::LogicThread;
use todo::config::Config;
use todo::core::Filter;
use todo::log::LogLevel;
use todo::render::RenderState;
use todo::{tlog, tlog_error, ui, Error, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// todo - a small terminal to-do list
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    TODO_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.todo/todo.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Log every key event (implies --debug)
    #[arg(long)]
    pub trace: bool,

    /// Completion filter to start with (overrides default_filter in todo.toml)
    #[arg(short = 'f', long, value_enum)]
    pub filter: Option<Filter>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_debug = std::env::var("TODO_DEBUG").ok();
    todo::log::init(LogLevel::resolve(cli.debug, cli.trace, env_debug.as_deref()));
    tlog!("todo starting (level={})", todo::log::level().as_str());

    let config = Config::load()?.with_cli_filter(cli.filter);

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let mut terminal = setup_terminal()?;

    let logic_rx = state_rx.clone();
    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, state_tx, logic_rx, shutdown_clone));

    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle
        .join()
        .unwrap_or(Err(Error::LogicThreadPanicked));
    restore_terminal(&mut terminal)?;

    if let Err(e) = &logic_result {
        tlog_error!("Logic thread failed: {}", e);
    }
    tlog!("todo exiting");
    result.and(logic_result)
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
