//! Core translation client module

pub mod client;
pub mod config;
pub mod errors;
pub mod handler;
pub mod identity;
pub mod models;
pub mod transport;
