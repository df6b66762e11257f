//! Constant values for symkit cryptographic operations
//!
//! This library provides common constants used across the symkit workspace.

#![no_std]

pub mod utils;
