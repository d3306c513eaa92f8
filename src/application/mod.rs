/// Session lifecycle and request headers
pub mod auth;
/// API client and service implementations
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouping the endpoints
pub mod interfaces;
/// Lifecycle event observers
pub mod observer;
