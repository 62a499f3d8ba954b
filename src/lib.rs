//! # Birthday Reminder Bot
//!
//! A Telegram bot that keeps a CSV-backed list of birthdays and reminds
//! subscribers about them.
//!
//! ## Features
//! - Subscribe with /start and receive a daily reminder sweep
//! - "today" and "tomorrow" reminders at a configurable trigger time
//! - /list for the next 7 days, /add to append new records
//! - Record file reloadable at runtime with /reload

/// Bot command handlers and update dispatch
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Shared state passed to the dispatcher and services
pub mod context;
/// Background services: the reminder sweep and health endpoints
pub mod services;
/// Birthday records and the subscriber registry
pub mod store;
/// Utility functions for dates, validation, and formatting
pub mod utils;
