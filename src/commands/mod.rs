//! Command handlers
//!
//! Entry points used by the `gesture-replay` binary.

pub mod replay;
