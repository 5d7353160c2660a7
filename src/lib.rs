//! Quran Lookup & Search Service Library
//!
//! This library crate defines the core modules behind the HTTP API binary (`main.rs`).
//! The corpus is loaded once at startup and shared read-only across all request
//! handlers; every query is a bounded in-memory scan.
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`corpus`**: The immutable in-memory data model. Holds chapters, verses, and the
//!   static structural metadata tables (juz boundaries, manzil ranges, sajdah verses),
//!   plus the startup loader that parses and validates the corpus data file.
//! - **`search`**: The core information retrieval logic. Contains the text normalizer,
//!   the relevance scorer, and the full-scan search engine (ranked and exact modes).
//! - **`filters`**: Structural range filtering. Resolves verses by juz, manzil,
//!   revelation type, or verse length, with uniform pagination.
//! - **`error`**: The request-level error taxonomy (validation vs. not-found) and its
//!   mapping onto HTTP responses.

pub mod corpus;
pub mod error;
pub mod filters;
pub mod search;
