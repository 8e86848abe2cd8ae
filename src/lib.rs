#![deny(missing_docs)]

//! Core library for the Newsdesk briefing server.

/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Summary and quiz backends.
pub mod generation;
/// Structured logging and tracing setup.
pub mod logging;
/// News item sources.
pub mod news;
/// Service layer shared by the HTTP handlers.
pub mod service;
/// Sentence segmentation helpers.
pub mod text;
