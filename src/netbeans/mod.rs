//! NetBeans launcher configuration

pub mod conf;

pub use conf::{ConfFile, ConfValues, LineChange, Setting};
