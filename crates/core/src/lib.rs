//! Core library for adcraft
//!
//! This crate implements the **Functional Core** of the adcraft application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The adcraft project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`adcraft_core`** (this crate): Pure transformation functions with zero I/O
//! - **`adcraft`**: HTTP calls, the web server and CLI orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No network calls, no environment lookups, no logging
//! - **Deterministic**: Fallback copy and fallback images are fixed literals
//!
//! # Module Organization
//!
//! - [`campaign`]: Prompt composition, model-output parsing, response
//!   normalization and the error taxonomy for ad campaign generation
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use adcraft_core::campaign::{assemble, parse_copy, BrandTone, GenerationRequest, Platform};
//!
//! let request = GenerationRequest {
//!     prompt: "Summer sale".to_string(),
//!     platform: Platform::Instagram,
//!     brand_tone: BrandTone::Witty,
//!     cta_text: "Shop now".to_string(),
//! };
//!
//! // Parse whatever the text model answered (no HTTP required)
//! let copy = parse_copy("no json here", &request).into_copy();
//!
//! // No generated image, so the stock image is used
//! let result = assemble(copy, None);
//! assert_eq!(result.hashtags.len(), 5);
//! ```

pub mod campaign;
