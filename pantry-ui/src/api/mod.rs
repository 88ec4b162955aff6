//! API Access
//!
//! Browser transport for the pantry REST API.

mod client;

pub use client::*;
