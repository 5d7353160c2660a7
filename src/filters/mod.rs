//! Range Filter Module
//!
//! Resolves verses by structural position rather than by text.
//!
//! ## Overview
//! Four filter operations share one pagination contract: by juz (1..=30), by manzil
//! (1..=7), by revelation type (meccan/medinan), and by computed verse length
//! (short/medium/long over the translation's word count). The sajdah index lives
//! here too, enriched with juz numbers via the same boundary logic.
//!
//! Out-of-range juz/manzil ordinals yield an empty page rather than an error.
//!
//! ## Submodules
//! - **`engine`**: The corpus scans, boundary tests, and pagination.
//! - **`handlers`**: HTTP request handlers for the filter and sajdah endpoints.
//! - **`types`**: Pagination inputs, page envelopes, and the length buckets.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
