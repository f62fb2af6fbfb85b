//! client-api - a minimal client registry CRUD service backed by SQLite

pub mod cli;
pub mod config;
pub mod db;
pub mod http_server;
pub mod model;
pub mod openapi;
pub mod queries;
