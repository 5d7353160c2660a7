//! Corpus Model Module
//!
//! The immutable in-memory representation of the corpus and its structural metadata.
//!
//! ## Overview
//! The entire corpus (114 surahs, ~6,236 verses with Arabic text, English translation,
//! and transliteration) is parsed from a static JSON data file once at startup and
//! never mutated afterwards. All read paths operate on a shared `Arc<Corpus>`.
//!
//! ## Submodules
//! - **`model`**: Core data types (`Corpus`, `Chapter`, `Verse`) and iteration helpers.
//! - **`loader`**: Parses and validates the corpus data file. Defects are fatal.
//! - **`metadata`**: Compiled-in structural tables: juz boundaries, manzil ranges,
//!   and the sajdah verse list.
//! - **`handlers`**: HTTP request handlers for corpus-level lookups (overview stats,
//!   chapter and verse-range retrieval).

pub mod handlers;
pub mod loader;
pub mod metadata;
pub mod model;
