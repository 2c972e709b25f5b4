//! # cleanarch-gen
//!
//! Filesystem materialization and generation pipeline: creates the project
//! root, the planned directory tree, then renders and writes every registry
//! entry in declaration order. Fail-fast — the first renderer or filesystem
//! error halts the run; files already written remain on disk (no rollback).
//!
//! Every operation takes an explicit root path. Nothing here reads or
//! mutates the process working directory, so independent runs with distinct
//! roots are safe within one process.

pub mod error;
pub mod materializer;
pub mod pipeline;

pub use error::GenerateError;
pub use materializer::{Overwrite, WriteOutcome};
pub use pipeline::{generate, GenerateReport};
