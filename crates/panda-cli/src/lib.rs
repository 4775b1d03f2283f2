//! Library side of the `panda-loaders` binary.

pub mod config;
pub mod logging;
pub mod workspace;
