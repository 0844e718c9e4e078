//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime. Store mutations are not commands: they are
//! synchronous and happen inside `update`.

/// Output commands from the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // App lifecycle
    Quit,
}
