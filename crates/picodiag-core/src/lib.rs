//! # picodiag-core
//!
//! Diagnostics model for the picodiag web server.
//!
//! This crate provides:
//! - Collaborator traits for everything the diagnostics page reads
//!   (network link, temperature, heap, clocks, remote data, LED)
//! - The `DiagnosticsReport` aggregator and its text renderer
//! - The shared `SourceError` type
//!
//! This crate is intentionally runtime-agnostic and contains no I/O,
//! making it usable on both Linux hosts and on-device firmware ports.

pub mod error;
pub mod report;
pub mod sources;

pub use error::SourceError;
pub use report::DiagnosticsReport;
pub use sources::{
    DiagnosticSources, GeoClock, HeapSnapshot, JokeSource, Led, LinkReport, MemoryStats,
    NetworkLink, SpaceRoster, TemperatureSensor, UtcClock,
};
