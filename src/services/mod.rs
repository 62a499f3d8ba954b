/// Health check endpoints served over HTTP
pub mod health;
/// Daily reminder sweep
pub mod reminder;
