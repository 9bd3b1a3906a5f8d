// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Relay service components and the lunch-selection pipeline

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
