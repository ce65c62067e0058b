//! Domain entities and aggregates exposed by the console core.

pub mod access;
pub mod case;
pub mod client;
pub mod court;
pub mod document;
pub mod hearing;
pub mod lawyer;
pub mod opponent;
pub mod options;
pub mod task;
pub mod team;
pub mod types;
