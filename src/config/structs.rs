//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Bypass rules (paths, methods, cookie patterns).
pub mod bypass_config;

/// Cache store and TTL settings.
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP listener and upstream settings.
pub mod http_server_config;
