use super::engine;
use super::types::{JuzPage, LengthPage, ManzilPage, Pagination, RevelationPage, SajdahList};
use crate::corpus::model::Corpus;
use crate::error::ApiError;
use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

pub async fn handle_filter_juz(
    Path(juz): Path<u32>,
    Query(params): Query<PageParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Json<JuzPage>, ApiError> {
    let page = engine::filter_by_juz(&corpus, juz, pagination(&params)?);
    Ok(Json(JuzPage { page, juz }))
}

pub async fn handle_filter_manzil(
    Path(manzil): Path<u32>,
    Query(params): Query<PageParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Json<ManzilPage>, ApiError> {
    let page = engine::filter_by_manzil(&corpus, manzil, pagination(&params)?);
    Ok(Json(ManzilPage { page, manzil }))
}

pub async fn handle_filter_revelation(
    Path(kind): Path<String>,
    Query(params): Query<PageParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Json<RevelationPage>, ApiError> {
    let page = engine::filter_by_revelation(&corpus, &kind, pagination(&params)?);
    Ok(Json(RevelationPage {
        page,
        revelation_type: kind,
    }))
}

pub async fn handle_filter_length(
    Path(bucket): Path<String>,
    Query(params): Query<PageParams>,
    Extension(corpus): Extension<Arc<Corpus>>,
) -> Result<Json<LengthPage>, ApiError> {
    let page = engine::filter_by_length(&corpus, &bucket, pagination(&params)?);
    Ok(Json(LengthPage {
        page,
        verse_length: bucket,
    }))
}

pub async fn handle_sajdah(Extension(corpus): Extension<Arc<Corpus>>) -> Json<SajdahList> {
    let verses = engine::sajdah_verses(&corpus);
    Json(SajdahList {
        total: verses.len(),
        verses,
    })
}

/// Applies the page=1 / limit=20 defaults and rejects zero values, which would
/// make the page arithmetic meaningless.
fn pagination(params: &PageParams) -> Result<Pagination, ApiError> {
    let pagination = Pagination {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(20),
    };
    if pagination.page == 0 || pagination.limit == 0 {
        return Err(ApiError::Validation(
            "page and limit must be positive".to_string(),
        ));
    }
    Ok(pagination)
}
