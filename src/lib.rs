pub mod census;
pub mod cli;
pub mod config;
pub mod driver;
pub mod events;
pub mod interval;
pub mod logging;
pub mod mvi;
pub mod random;
pub mod runtime;
pub mod shutdown;
pub mod terminal_guard;
