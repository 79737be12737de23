//! Montage server library.
//!
//! Serves the public portfolio pages and the admin API as a single binary;
//! split out as a library so the route handlers and repositories can be
//! tested and reused from the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod upload;
