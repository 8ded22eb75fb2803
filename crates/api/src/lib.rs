//! HTTP API: configuration, routing, request validation and response mapping
//! around the projection engine.

pub mod app;
pub mod config;
pub mod middleware;
