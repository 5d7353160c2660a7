use axum::{routing::get, Extension, Router};
use furqan_api::corpus::handlers::{handle_chapter, handle_overview, handle_verse_range};
use furqan_api::corpus::loader::load_corpus;
use furqan_api::error::ApiError;
use furqan_api::filters::handlers::{
    handle_filter_juz, handle_filter_length, handle_filter_manzil, handle_filter_revelation,
    handle_sajdah,
};
use furqan_api::search::handlers::{
    handle_legacy_search, handle_search, handle_search_all, handle_search_arabic,
    handle_search_transliteration,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let mut data_path = PathBuf::from("data/quran.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Corpus: loaded once, shared read-only for the process lifetime.
    tracing::info!("Loading corpus from {}", data_path.display());
    let corpus = Arc::new(load_corpus(&data_path)?);
    tracing::info!(
        "Loaded {} surahs / {} verses",
        corpus.chapters.len(),
        corpus.verse_count()
    );

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api", get(handle_overview))
        .route("/api/", get(handle_overview))
        .route("/api/corpus/:term", get(handle_legacy_search))
        .route("/api/search", get(handle_search))
        .route("/api/search/arabic", get(handle_search_arabic))
        .route("/api/search/transliteration", get(handle_search_transliteration))
        .route("/api/search/all", get(handle_search_all))
        .route("/api/filter/juz/:juz", get(handle_filter_juz))
        .route("/api/filter/manzil/:manzil", get(handle_filter_manzil))
        .route("/api/filter/revelation/:kind", get(handle_filter_revelation))
        .route("/api/filter/length/:bucket", get(handle_filter_length))
        .route("/api/sajdah", get(handle_sajdah))
        .route("/api/:chapter", get(handle_chapter))
        .route("/api/:chapter/:verse", get(handle_verse_range))
        .fallback(handle_not_found)
        .layer(Extension(corpus));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}
