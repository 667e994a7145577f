//! Observability for qgate.
//! `tracing` crate with `EnvFilter`, per-crate log levels, output on stderr.

pub mod setup;

pub use setup::init_tracing;
