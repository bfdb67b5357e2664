//! today: a terminal list of what you're doing right now.
//!
//! State lives in memory for the length of a session. The TUI is the
//! only surface; `ops` holds the list logic and `model` the data.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
