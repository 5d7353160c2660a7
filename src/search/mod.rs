//! Search Service Module
//!
//! The core component responsible for executing free-text queries against the corpus.
//!
//! ## Overview
//! This module implements the Information Retrieval (IR) pipeline for the service.
//! Every query is a full scan over the in-memory corpus; there is no persistent
//! index. Two modes exist: ranked tokenized matching (the default) and a legacy
//! exact pattern match.
//!
//! ## Responsibilities
//! - **Normalization**: Reducing raw query and verse text to a canonical token sequence.
//! - **Ranking**: Scoring verses by token overlap, ordering, proximity, and phrase bonuses.
//! - **Retrieval**: Projecting matching verses into API records with chapter context.
//! - **API**: Exposing search capabilities via the Axum HTTP handlers.
//!
//! ## Submodules
//! - **`normalizer`**: Canonical tokenization shared by queries and verse text.
//! - **`scorer`**: The relevance scoring algorithm.
//! - **`engine`**: Corpus scanning, ranking, and the legacy search wrapper.
//! - **`handlers`**: HTTP request handlers for the search endpoints.
//! - **`types`**: Field/mode selectors and response DTOs.

pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod scorer;
pub mod types;
