//! ensplot: layered ensemble/time-series plot composition.
//!
//! The crate splits plot composition into a Rust-idiomatic API facade, a
//! deterministic geometry core, and backend-agnostic render primitives so
//! host applications can draw the same frame through any `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{EnsemblePlot, PlotConfig};
pub use error::{PlotError, PlotResult};
