//! Command implementations for routemap

pub mod dispatch;
pub mod network;
pub mod report;
pub mod routes;
