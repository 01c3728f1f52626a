//! Backend for a trivia application.
//!
//! Questions and categories live in a SQLite database accessed through a
//! repository layer; the HTTP surface is a small set of JSON endpoints for
//! listing, paginating, searching, creating and deleting questions, plus a
//! quiz endpoint that serves a random not-yet-asked question.

/// HTTP handlers, routes, server setup and error mapping
pub mod api;
/// Command line interface definition
pub mod cli;
/// Application-wide constants
pub mod constants;
/// Database pool, models and repository
pub mod db;
/// Data-layer error types
pub mod errors;
/// Diesel table definitions
pub mod schema;
/// Logging initialization
pub mod utils;
