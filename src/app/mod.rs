//! Application state for the terminal client

pub mod state;

pub use state::App;
