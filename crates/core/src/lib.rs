//! Core library for codeagent
//!
//! This crate implements the **Functional Core** of the codeagent demo platform,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`codeagent_core`** (this crate): request/response types and template rendering, zero I/O
//! - **`codeagent`**: the HTTP server, the status-flag manager, delays and the CLI client
//!
//! Functions here never read the clock, sleep or touch the network. Anything
//! time-dependent (metadata timestamps) is passed in by the shell.
//!
//! # Module Organization
//!
//! - [`requests`]: request DTOs accepted by the API, with their defaults
//! - [`responses`]: payloads returned by the API and the builders that fill them
//! - [`templates`]: the canned demo-mode text (code, analysis reports, chat replies)
//! - [`project`]: project upload tallying
//! - [`status`]: the simulated backend server status flag and its reports
//!
//! # Example Usage
//!
//! ```rust
//! use codeagent_core::requests::CodeGenerationRequest;
//! use codeagent_core::responses::generation_result;
//!
//! let request: CodeGenerationRequest =
//!     serde_json::from_str(r#"{"prompt": "sort a list"}"#).unwrap();
//! let result = generation_result(&request, "2025-01-01T00:00:00.000000".to_string());
//!
//! assert!(result.success);
//! assert_eq!(result.language, "python");
//! assert!(result.code.contains("Generated for: sort a list"));
//! ```

pub mod project;
pub mod requests;
pub mod responses;
pub mod status;
pub mod templates;

/// Model name reported in every demo-mode payload.
pub const DEMO_MODEL: &str = "demo-mode-vllm-ready";

/// Infrastructure label attached to API envelopes.
pub const ENVELOPE_INFRASTRUCTURE: &str = "vllm-production-ready";
