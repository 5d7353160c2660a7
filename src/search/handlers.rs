use super::engine;
use super::types::{project_fields, LegacyRecord, MatchMode, SearchField, SearchResponse, VerseRecord};
use crate::corpus::model::Corpus;
use crate::error::ApiError;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub field: Option<String>,
    #[serde(default)]
    pub exact: bool,
    /// Optional comma-separated projection of record keys.
    pub fields: Option<String>,
}

#[derive(Deserialize)]
pub struct FieldSearchParams {
    pub q: Option<String>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Response, ApiError> {
    let query = require_query(params.q.as_deref(), "Missing search query. Use ?q=your+search+term")?;

    let field_name = params.field.as_deref().unwrap_or("translation");
    let field = SearchField::parse(field_name).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown search field '{}'. Use translation, arabic, transliteration or all",
            field_name
        ))
    })?;
    let mode = if params.exact {
        MatchMode::Exact
    } else {
        MatchMode::Tokenized
    };

    let results = engine::search(&corpus, query, field, mode);
    tracing::debug!(total = results.len(), query, "search completed");

    Ok(respond(
        results,
        query,
        field_name,
        Some(params.exact),
        params.fields.as_deref(),
    ))
}

pub async fn handle_search_arabic(
    Query(params): Query<FieldSearchParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Response, ApiError> {
    let query = require_query(params.q.as_deref(), "Missing search query. Use ?q=arabic_text")?;
    let results = engine::search(&corpus, query, SearchField::Arabic, MatchMode::Tokenized);
    Ok(respond(results, query, "arabic", None, None))
}

pub async fn handle_search_transliteration(
    Query(params): Query<FieldSearchParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Response, ApiError> {
    let query = require_query(
        params.q.as_deref(),
        "Missing search query. Use ?q=transliteration_text",
    )?;
    let results = engine::search(
        &corpus,
        query,
        SearchField::Transliteration,
        MatchMode::Tokenized,
    );
    Ok(respond(results, query, "transliteration", None, None))
}

pub async fn handle_search_all(
    Query(params): Query<FieldSearchParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Response, ApiError> {
    let query = require_query(params.q.as_deref(), "Missing search query. Use ?q=search_term")?;
    let results = engine::search(&corpus, query, SearchField::All, MatchMode::Tokenized);
    Ok(respond(
        results,
        query,
        "all (translation, arabic, transliteration)",
        None,
        None,
    ))
}

pub async fn handle_legacy_search(
    Path(term): Path<String>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Json<Vec<LegacyRecord>> {
    let term = term.to_lowercase();
    Json(engine::legacy_search(&corpus, &term))
}

/// An absent or empty `q` parameter is rejected before the engine runs.
fn require_query<'a>(q: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    match q {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}

fn respond(
    results: Vec<VerseRecord>,
    query: &str,
    search_field: &str,
    exact_match: Option<bool>,
    projection: Option<&str>,
) -> Response {
    let total_matches = results.len();
    match projection {
        Some(requested) => {
            let wanted: Vec<&str> = requested
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .collect();
            let results: Vec<Value> = results
                .iter()
                .map(|record| project_fields(record, &wanted))
                .collect();
            Json(SearchResponse {
                total_matches,
                query: query.to_string(),
                search_field: search_field.to_string(),
                exact_match,
                results,
            })
            .into_response()
        }
        None => Json(SearchResponse {
            total_matches,
            query: query.to_string(),
            search_field: search_field.to_string(),
            exact_match,
            results,
        })
        .into_response(),
    }
}
