//! Uniform random sampling of lines from a stream of any length, in one pass and O(K) memory.

pub mod cli;
pub mod config;
pub mod error;
pub mod reservoir;
pub mod source;
pub mod uniform;

pub use config::{LineBound, SampleConfig};
pub use error::SampleError;
pub use reservoir::{sample_lines, Halt, ReservoirSampler, Sample};
pub use source::{IterSource, LineSource, ReaderSource};
pub use uniform::{entropy_rng, UniformSource};
