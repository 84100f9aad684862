//! Routemap Core Library
//!
//! Undirected weighted locality graph with shortest, longest and alternative
//! route queries.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod sample;
