pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod views;
