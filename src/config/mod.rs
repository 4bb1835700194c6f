//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the cache handler
//! configuration from a TOML file. The cache itself only consumes the parsed
//! `CacheConfig`; file handling exists for the standalone binary.
//!
//! # Configuration Structure
//!
//! - **log_level**: Logging verbosity for the binary
//! - **cache**: Store backend, TTL and bypass rules
//! - **http_server**: Listener, upstream and metrics route
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_handler::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
