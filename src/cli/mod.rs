//! CLI command layer for the `fgr` binary.

pub mod commands;
