//! # Cache Handler
//!
//! An HTTP response cache for actix-web, packaged as middleware plus a small
//! reverse-proxy binary that puts the middleware in front of an upstream origin.
//!
//! ## Overview
//!
//! For every request the handler makes one of three decisions:
//!
//! - **bypass**: a configured decider fires (first path segment, method or
//!   cookie name). The request passes through untouched.
//! - **hit**: a live entry exists for the request key. The stored response is
//!   replayed and downstream is never called.
//! - **miss**: downstream is called, its response is buffered, stored with
//!   the configured TTL and delivered.
//!
//! Every response carries a `Cache-Status` header naming the outcome, and a
//! per-handler counter is incremented for it.
//!
//! ## Stores
//!
//! - **file**: sharded directory tree with self-expiring MessagePack records
//! - **redis**: remote key-value store with native `EX` expiry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{App, HttpServer};
//! use cache_handler::config::structs::configuration::Configuration;
//! use cache_handler::handler::structs::cache_handler::CacheHandler;
//! use cache_handler::handler::structs::cache_middleware::CacheMiddleware;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let handler = Arc::new(CacheHandler::new(config.cache.clone()).await?);
//!
//! HttpServer::new(move || App::new().wrap(CacheMiddleware::new(handler.clone())));
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Store backends (file and Redis) behind one async trait
//! - [`config`] - Configuration management and TOML parsing
//! - [`deciders`] - Bypass predicates
//! - [`handler`] - Key derivation, response capture and the middleware
//! - [`http`] - Reverse-proxy listener used by the binary
//! - [`logging`] - Logger setup for the binary
//! - [`stats`] - Hit, miss and bypass counters with Prometheus output
//! - [`structs`] - CLI argument parsing

/// Cache store module supporting a local directory and Redis.
///
/// Stores opaque byte payloads under string keys with a TTL; expired
/// entries read as absent.
pub mod cache;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration file.
pub mod config;

/// Bypass decision pipeline.
pub mod deciders;

/// Response caching middleware.
///
/// Derives keys, captures downstream responses and replays stored ones.
pub mod handler;

/// Reverse-proxy HTTP listener.
pub mod http;

/// Logger setup.
pub mod logging;

/// Outcome counters and their Prometheus rendering.
pub mod stats;

/// Command-line interface structures.
pub mod structs;
