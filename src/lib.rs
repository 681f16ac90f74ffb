//! Roblox Tracker - a terminal dashboard over seeded sample data
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod data;
pub mod export;
pub mod models;
pub mod terminal;
pub mod ui;
