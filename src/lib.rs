// src/lib.rs

// Top-level modules
pub mod services;
pub mod models;
pub mod handlers;
pub mod routes;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
