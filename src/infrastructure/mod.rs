//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP backend, the worker threads that run
//! remote calls off the event loop, the barcode scanner source, and the
//! configuration and logging setup.

pub mod config;
pub mod dispatcher;
pub mod http;
pub mod logging;
pub mod scanner;

pub use config::*;
pub use dispatcher::*;
pub use http::*;
pub use logging::*;
pub use scanner::*;
