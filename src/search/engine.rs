use super::normalizer::normalize;
use super::scorer::score;
use super::types::{LegacyRecord, MatchMode, SearchField, VerseRecord};
use crate::corpus::model::{Corpus, Verse};
use regex::Regex;

/// Runs a free-text query over the whole corpus.
///
/// Tokenized mode scores every verse and returns hits ranked by descending
/// relevance; exact mode tests a case-insensitive literal pattern and returns
/// hits in corpus order without scores. A query that normalizes to zero tokens
/// simply matches nothing.
pub fn search(corpus: &Corpus, query: &str, field: SearchField, mode: MatchMode) -> Vec<VerseRecord> {
    match mode {
        MatchMode::Tokenized => ranked_search(corpus, query, field),
        MatchMode::Exact => pattern_search(corpus, query, field),
    }
}

/// Backward-compatible search over the translation field only.
///
/// The first record is always the match count, followed by compact snippets of
/// each hit's translation, in relevance order.
pub fn legacy_search(corpus: &Corpus, term: &str) -> Vec<LegacyRecord> {
    let hits = ranked_search(corpus, term, SearchField::Translation);

    let mut records = Vec::with_capacity(hits.len() + 1);
    records.push(LegacyRecord::Count {
        total_matches: hits.len(),
    });
    records.extend(hits.into_iter().map(|hit| LegacyRecord::Match {
        surah_no: hit.surah_number,
        verse_no: hit.verse_number,
        content: truncate_snippet(&hit.translation),
    }));
    records
}

fn ranked_search(corpus: &Corpus, query: &str, field: SearchField) -> Vec<VerseRecord> {
    let query_tokens = normalize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for verse_ref in corpus.iter_verses() {
        let best = field_texts(verse_ref.verse, field)
            .into_iter()
            .map(|text| score(text, &query_tokens))
            .max()
            .unwrap_or(0);
        if best > 0 {
            let mut record = VerseRecord::from_verse(&verse_ref);
            record.score = Some(best);
            hits.push(record);
        }
    }

    // Stable sort: equal scores keep corpus order (surah then verse ascending).
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

fn pattern_search(corpus: &Corpus, query: &str, field: SearchField) -> Vec<VerseRecord> {
    let term = query.to_lowercase();
    let pattern = match Regex::new(&format!("(?i){}", regex::escape(term.trim()))) {
        Ok(pattern) => pattern,
        Err(_) => return Vec::new(),
    };

    corpus
        .iter_verses()
        .filter(|verse_ref| {
            field_texts(verse_ref.verse, field)
                .into_iter()
                .any(|text| pattern.is_match(text))
        })
        .map(|verse_ref| VerseRecord::from_verse(&verse_ref))
        .collect()
}

fn field_texts(verse: &Verse, field: SearchField) -> Vec<&str> {
    match field {
        SearchField::Translation => vec![&verse.translation],
        SearchField::Arabic => vec![&verse.arabic],
        SearchField::Transliteration => vec![&verse.transliteration],
        SearchField::All => vec![&verse.translation, &verse.arabic, &verse.transliteration],
    }
}

/// At most 100 characters of translation followed by an ellipsis.
fn truncate_snippet(text: &str) -> String {
    let mut snippet: String = text.chars().take(100).collect();
    snippet.push_str("...");
    snippet
}
