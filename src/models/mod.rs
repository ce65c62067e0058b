//! Runtime models shared across the console.

pub mod config;
