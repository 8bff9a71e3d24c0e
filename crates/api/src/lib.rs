//! # PlantView App
//!
//! Command-line front end over the PlantView backend.
//!
//! This crate contains:
//! - Dependency wiring ([`context::AppContext`])
//! - Command handlers for sessions, the product catalog and production
//!   history
//! - The `clap` argument model
//! - Tracing setup

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
