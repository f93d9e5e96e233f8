//! # notus-stream
//!
//! Per-purpose seeded sampler streams.
//!
//! A simulation run draws from four independent uniform streams, one per
//! purpose: wet-spell durations, dry-spell durations, precipitation
//! depths, and temperature-residual shocks. Keeping the purposes on
//! separate generators means consuming more draws for one purpose never
//! perturbs the sequences of the others, and each purpose can be replayed
//! in isolation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use notus_stream::{SamplerStream, StreamPurpose, StreamSeeds};
//!
//! let seeds = StreamSeeds::derive(42);
//! let mut depth = seeds.stream(StreamPurpose::Depth);
//! let u = depth.next_uniform(); // in [0, 1)
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `purpose` | Purpose labels |
//! | `stream` | Seeded uniform stream |
//! | `seeds` | Per-purpose seed bundles |

mod purpose;
mod seeds;
mod stream;

pub use purpose::StreamPurpose;
pub use seeds::StreamSeeds;
pub use stream::SamplerStream;
