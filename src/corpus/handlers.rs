//! HTTP handlers for corpus-level lookups: overview statistics, single-chapter
//! retrieval, and verse / verse-range retrieval.

use super::model::{Chapter, Corpus, RevelationType, Verse};
use crate::error::ApiError;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Corpus-level statistics served at the API root.
#[derive(Debug, Serialize)]
pub struct CorpusStats {
    pub total_surahs: usize,
    pub total_meccan_surahs: usize,
    pub total_medinan_surahs: usize,
    pub total_verses: usize,
    pub number_of_words: usize,
}

pub async fn handle_overview(Extension(corpus): Extension<Arc<Corpus>>) -> Json<CorpusStats> {
    let total_meccan_surahs = corpus
        .chapters
        .values()
        .filter(|c| c.revelation == RevelationType::Meccan)
        .count();

    Json(CorpusStats {
        total_surahs: corpus.chapters.len(),
        total_meccan_surahs,
        total_medinan_surahs: corpus.chapters.len() - total_meccan_surahs,
        total_verses: corpus.verse_count(),
        number_of_words: corpus
            .iter_verses()
            .map(|v| v.verse.arabic.split_whitespace().count())
            .sum(),
    })
}

pub async fn handle_chapter(
    Path(chapter): Path<String>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Json<Chapter>, ApiError> {
    let number: u32 = chapter.parse().map_err(|_| ApiError::NotFound)?;
    let chapter = corpus.chapter(number).ok_or(ApiError::NotFound)?;
    Ok(Json(chapter.clone()))
}

pub async fn handle_verse_range(
    Path((chapter, verse)): Path<(String, String)>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Response, ApiError> {
    let number: u32 = chapter.parse().map_err(|_| ApiError::NotFound)?;
    let chapter = corpus.chapter(number).ok_or(ApiError::NotFound)?;

    match select_verses(chapter, &verse)? {
        VerseSelection::Single(verse) => Ok(Json(verse).into_response()),
        VerseSelection::Range(verses) => Ok(Json(verses).into_response()),
    }
}

/// What a `:verse` path segment resolved to: one verse, or a numbered slice.
#[derive(Debug)]
pub enum VerseSelection {
    Single(Verse),
    Range(BTreeMap<u32, Verse>),
}

/// Resolves a verse selector of the form `n` or `n-m` against a chapter.
///
/// A range is clamped to the chapter's last verse. Malformed ranges (non-numeric
/// bounds, a zero start, or start > end) are validation errors; a selector that
/// points at nothing is not-found.
pub fn select_verses(chapter: &Chapter, selector: &str) -> Result<VerseSelection, ApiError> {
    match selector.split_once('-') {
        None => {
            let verse_number: u32 = selector.parse().map_err(|_| ApiError::NotFound)?;
            let verse = chapter
                .verses
                .get(&verse_number)
                .ok_or(ApiError::NotFound)?;
            Ok(VerseSelection::Single(verse.clone()))
        }
        Some((start, end)) => {
            let invalid = || ApiError::Validation("invalid range".to_string());
            let start: u32 = start.parse().map_err(|_| invalid())?;
            let end: u32 = end.parse().map_err(|_| invalid())?;
            if start == 0 || start > end {
                return Err(invalid());
            }

            let verses: BTreeMap<u32, Verse> = chapter
                .verses
                .range(start..=end)
                .map(|(&number, verse)| (number, verse.clone()))
                .collect();
            if verses.is_empty() {
                return Err(ApiError::NotFound);
            }
            Ok(VerseSelection::Range(verses))
        }
    }
}
