//! Relevance scoring for tokenized search.
//!
//! A candidate only scores at all when every query token is contained in at least
//! one of its tokens (substring containment, so "rahm" matches "rahman"). On top
//! of a flat base, bonuses reward query tokens appearing in order, close together,
//! and as a contiguous phrase. The two positional passes are intentionally
//! independent: the ordered pass advances a cursor and never looks back, while the
//! proximity pass always takes each token's first occurrence from the start.
//! Downstream ranking depends on this exact interaction.

use super::normalizer::normalize;

const MATCH_BASE: u32 = 100;
const SEQUENCE_STEP: u32 = 10;
const FULL_ORDER_BONUS: u32 = 50;
const PROXIMITY_WINDOW: u32 = 50;
const PHRASE_BONUS: u32 = 1000;

/// Scores a candidate text against normalized query tokens. Returns 0 for
/// "no match": an empty query, an empty candidate, or any query token with no
/// substring occurrence in the candidate's tokens.
pub fn score(candidate: &str, query_tokens: &[String]) -> u32 {
    if query_tokens.is_empty() {
        return 0;
    }
    let text_tokens = normalize(candidate);
    if text_tokens.is_empty() {
        return 0;
    }

    let all_present = query_tokens
        .iter()
        .all(|q| text_tokens.iter().any(|t| t.contains(q.as_str())));
    if !all_present {
        return 0;
    }

    let mut score = MATCH_BASE;

    // Ordered pass. Each token must land strictly after the previous match to
    // earn its step. A token that cannot advance clears the order bonus but the
    // scan continues without moving the cursor, so later tokens can still earn
    // their step if they occur further right.
    let mut next_start = 0usize;
    let mut in_order = true;
    for token in query_tokens {
        match text_tokens[next_start..]
            .iter()
            .position(|t| t.contains(token.as_str()))
        {
            Some(offset) => {
                next_start += offset + 1;
                score += SEQUENCE_STEP;
            }
            None => in_order = false,
        }
    }
    if in_order {
        score += FULL_ORDER_BONUS;
    }

    // Proximity pass, independent of the ordered pass: first occurrence of each
    // token scanning from the start every time.
    let positions: Vec<usize> = query_tokens
        .iter()
        .filter_map(|q| text_tokens.iter().position(|t| t.contains(q.as_str())))
        .collect();
    if positions.len() >= 2 {
        let min = positions.iter().min().copied().unwrap_or(0);
        let max = positions.iter().max().copied().unwrap_or(0);
        score += PROXIMITY_WINDOW.saturating_sub((max - min) as u32);
    }

    // A contiguous phrase occurrence in the normalized text outranks any
    // combination of the positional bonuses. Additive, not exclusive.
    let phrase = query_tokens.join(" ");
    if text_tokens.join(" ").contains(&phrase) {
        score += PHRASE_BONUS;
    }

    score
}
