use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{tlog_debug, Result};

const IDLE_SLEEP: Duration = Duration::from_millis(1);

/// Owns the model. The only thread that touches the task store.
pub struct LogicThread;

impl LogicThread {
    /// Run until a `Quit` command or until `shutdown` is raised.
    ///
    /// `state_rx` is a clone of the render thread's receiver, used to drop
    /// a stale snapshot before publishing a newer one.
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        state_rx: Receiver<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        tlog_debug!(
            "LogicThread::run default_filter={} show_keymap={}",
            config.default_filter,
            config.show_keymap
        );
        let mut model = Model::new(config);
        publish(&state_tx, &state_rx, &mut model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                if handle_message(&mut model, msg) {
                    tlog_debug!("LogicThread quitting with {} tasks", model.store.len());
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(());
                }

                if model.dirty {
                    publish(&state_tx, &state_rx, &mut model);
                }
            }

            thread::sleep(IDLE_SLEEP);
        }

        Ok(())
    }
}

/// Feed one message through `update` and run its commands.
/// Returns true when the app should quit.
pub fn handle_message(model: &mut Model, msg: Message) -> bool {
    let mut quit = false;
    for cmd in update(model, msg) {
        quit |= execute_command(cmd);
    }
    quit
}

fn execute_command(cmd: Command) -> bool {
    match cmd {
        Command::Quit => {
            tlog_debug!("Command::Quit");
            true
        }
    }
}

/// Send the latest snapshot, replacing one the render thread has not
/// picked up yet.
fn publish(state_tx: &Sender<RenderState>, state_rx: &Receiver<RenderState>, model: &mut Model) {
    let _ = state_rx.try_recv();
    let _ = state_tx.try_send(model.snapshot());
    model.dirty = false;
}
