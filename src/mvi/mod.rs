//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for the unidirectional data flow
//! that drives the census loop.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State + follow-up Intent + Effect
//!    ↑                                  │
//!    └──────────── queue ───────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every transition
//! - **Intent**: Commands consumed in FIFO order
//! - **Reducer**: Pure function producing the next state, the next intent and
//!   an optional effect for the caller to perform

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Step};
pub use state::AppState;
