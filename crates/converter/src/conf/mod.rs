//! Conf module — configuration model and loading for hosts embedding the
//! engine.
//!
//! The engine itself takes explicit arguments; this is the boundary a CLI or
//! service uses to decide which pattern file, pattern name, and output
//! destination a run should use.

pub mod load;
pub mod model;

pub use model::ConverterConfig;
