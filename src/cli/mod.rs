//! Command-line demo built on the library

pub mod commands;
