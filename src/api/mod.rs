//! API Boundary
//!
//! All outbound HTTP calls go through this module.

pub mod client;

pub use client::*;
