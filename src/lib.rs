//! update-nbconf library
//!
//! Points a NetBeans installation's `etc/netbeans.conf` at a JDK and at
//! user/cache directories given on the command line.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod netbeans;
pub mod paths;

pub use args::{parse_properties, Properties};
pub use commands::apply::{apply, run, ApplyOptions, ApplyReport};
pub use error::ApplyError;
