//! Implementation blocks for configuration types.

/// Defaults and validation for the cache section.
pub mod cache_config;

/// Loading, saving and validating the root configuration.
pub mod configuration;

/// Display and error impls for configuration errors.
pub mod configuration_error;

/// Defaults for the HTTP server section.
pub mod http_server_config;
