//! Application layer managing the intake session and its workflows.
//!
//! This module owns the view state machine, the two background routines
//! it drives (title resolution and record saving), and the terminal-facing
//! application state.

pub mod session;
pub mod workflow;
pub mod resolver;
pub mod saver;
pub mod state;

pub use session::*;
pub use workflow::*;
pub use resolver::*;
pub use saver::*;
pub use state::*;
