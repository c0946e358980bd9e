//! Observability for the fortune engine.
//! `tracing` crate with `EnvFilter`, plus span helpers per operation.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
