//! Grouped constant modules

pub mod symmetric;
