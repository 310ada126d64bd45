pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod validation;
