//! CLI support for the `edgewalk` binary.

pub mod commands;
