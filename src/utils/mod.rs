//! The `utils` module provides shared definitions used across the
//! application: the error taxonomy and logging initialization.

pub mod error;
pub mod logging;
