//! CLI commands

pub mod apply;
