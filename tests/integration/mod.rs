//! Integration test suite for todo.
//!
//! These tests drive the public API the way the TUI does: through the
//! task store, the projection, and the TEA update function.
//!
//! # Test Categories
//!
//! - `store_properties`: Task store mutation guarantees
//! - `projection`: Filter + search over a live store
//! - `key_flows`: Keyboard-driven sessions through `update` and `snapshot`

mod fixtures;

mod key_flows;
mod projection;
mod store_properties;
