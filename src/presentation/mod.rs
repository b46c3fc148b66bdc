//! Presentation layer handling terminal UI and user input.
//!
//! This module draws each intake screen using ratatui and translates
//! keyboard input (including keyboard-wedge barcode scanners) into
//! application operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
