//! Layered configuration for the company research service.
//!
//! This crate provides:
//! - [`ResearchConfig`]: The root configuration type with namespaced sub-configs
//! - [`load_merged`]: Two-layer config loading (global + local) with env overrides
//! - [`schema`]: JSON Schema generation for IDE autocomplete
//! - [`validation`]: Advisory validation that produces warnings
//!
//! # Configuration Precedence (lowest to highest)
//! 1. Default values
//! 2. Global config (`~/.config/company-research/research.json`)
//! 3. Local config (`./research.json`)
//! 4. Environment variables
//!
//! Command-line flags, applied by the server binary, sit above all of these.
//!
//! # Environment Variables
//! - `TAVILY_API_KEY`: Tavily API key (env-only, never read from files)
//! - `TAVILY_BASE_URL`: Override Tavily API base URL
//! - `RESEARCH_HOST`: Listener address
//! - `RESEARCH_PORT`: Listener port
//! - `RESEARCH_LOG_LEVEL`: Override log level
//! - `RESEARCH_LOG_JSON`: Enable JSON logging ("true" or "1")

pub mod loader;
pub mod merge;
pub mod schema;
pub mod types;
pub mod validation;

pub use loader::{LoadedResearchConfig, load_merged};
pub use schema::schema_json_pretty;
pub use types::ResearchConfig;
