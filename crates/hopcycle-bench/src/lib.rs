//! Hop-stream generator and benchmark utilities for hopcycle.
//!
//! This crate provides deterministic generation of routing hop streams for
//! benchmarking and invariant testing of `hopcycle-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_hops, render_lines};
