//! Program implementations.

pub mod bench;
pub mod recursive;
