//! Filesystem lookups for served files.

pub mod resolver;

pub use resolver::{Resolution, ResolvedFile, resolve};
