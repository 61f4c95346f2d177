//! Core infrastructure
//!
//! Crate-wide support code that is not tied to any one vehicle component.

pub mod logging;
