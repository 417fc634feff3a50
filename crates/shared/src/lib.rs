//! Cross-cutting bootstrap for the gantry binary: optional env-file loading
//! and tracing subscriber configuration.

pub mod env;
pub mod logging;
