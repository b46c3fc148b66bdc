//! shelfscan - ISBN Intake Library
//!
//! A terminal point-of-sale intake tool: scan or type an ISBN, resolve its
//! title, enter price, quantity and location, and save the record remotely.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
