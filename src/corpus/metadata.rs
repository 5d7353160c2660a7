//! Structural metadata tables.
//!
//! Three fixed facts about the corpus, compiled in rather than loaded from a file:
//!
//! - **Juz boundaries**: the 30-part division. Each juz spans an inclusive range of
//!   `(surah, verse)` pairs; the ranges are non-overlapping and cover every verse.
//! - **Manzil ranges**: the 7-part division, defined over whole surahs.
//! - **Sajdah verses**: the 15 verses of prostration, each obligatory or recommended.

use serde::{Deserialize, Serialize};

/// Strength of the prostration called for by a sajdah verse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SajdahType {
    Obligatory,
    Recommended,
}

/// A verse of prostration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SajdahVerse {
    pub surah: u32,
    pub verse: u32,
    #[serde(rename = "type")]
    pub kind: SajdahType,
}

/// Inclusive `(surah, verse)` range covered by one juz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JuzBoundary {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl JuzBoundary {
    /// Whether a verse falls inside this juz. Surahs are compared first; verse
    /// ordinals only break the tie on the boundary surahs, so ranges that cross
    /// surahs and ranges inside a single surah are both handled.
    pub fn contains(&self, surah: u32, verse: u32) -> bool {
        let (start_surah, start_verse) = self.start;
        let (end_surah, end_verse) = self.end;
        (surah > start_surah || (surah == start_surah && verse >= start_verse))
            && (surah < end_surah || (surah == end_surah && verse <= end_verse))
    }
}

/// The 30 juz boundaries in order; juz `n` is `JUZ_BOUNDARIES[n - 1]`.
pub const JUZ_BOUNDARIES: [JuzBoundary; 30] = [
    JuzBoundary { start: (1, 1), end: (2, 141) },
    JuzBoundary { start: (2, 142), end: (2, 252) },
    JuzBoundary { start: (2, 253), end: (3, 92) },
    JuzBoundary { start: (3, 93), end: (4, 23) },
    JuzBoundary { start: (4, 24), end: (4, 147) },
    JuzBoundary { start: (4, 148), end: (5, 81) },
    JuzBoundary { start: (5, 82), end: (6, 110) },
    JuzBoundary { start: (6, 111), end: (7, 87) },
    JuzBoundary { start: (7, 88), end: (8, 40) },
    JuzBoundary { start: (8, 41), end: (9, 92) },
    JuzBoundary { start: (9, 93), end: (11, 5) },
    JuzBoundary { start: (11, 6), end: (12, 52) },
    JuzBoundary { start: (12, 53), end: (14, 52) },
    JuzBoundary { start: (15, 1), end: (16, 128) },
    JuzBoundary { start: (17, 1), end: (18, 74) },
    JuzBoundary { start: (18, 75), end: (20, 135) },
    JuzBoundary { start: (21, 1), end: (22, 78) },
    JuzBoundary { start: (23, 1), end: (25, 20) },
    JuzBoundary { start: (25, 21), end: (27, 55) },
    JuzBoundary { start: (27, 56), end: (29, 45) },
    JuzBoundary { start: (29, 46), end: (33, 30) },
    JuzBoundary { start: (33, 31), end: (36, 27) },
    JuzBoundary { start: (36, 28), end: (39, 31) },
    JuzBoundary { start: (39, 32), end: (41, 46) },
    JuzBoundary { start: (41, 47), end: (45, 37) },
    JuzBoundary { start: (46, 1), end: (51, 30) },
    JuzBoundary { start: (51, 31), end: (57, 29) },
    JuzBoundary { start: (58, 1), end: (66, 12) },
    JuzBoundary { start: (67, 1), end: (77, 50) },
    JuzBoundary { start: (78, 1), end: (114, 6) },
];

/// The 7 manzil ranges as inclusive surah spans; manzil `n` is `MANZIL_RANGES[n - 1]`.
pub const MANZIL_RANGES: [(u32, u32); 7] = [
    (1, 4),
    (5, 9),
    (10, 16),
    (17, 25),
    (26, 36),
    (37, 49),
    (50, 114),
];

/// The 15 sajdah verses.
pub const SAJDAH_VERSES: [SajdahVerse; 15] = [
    SajdahVerse { surah: 7, verse: 206, kind: SajdahType::Recommended },
    SajdahVerse { surah: 13, verse: 15, kind: SajdahType::Recommended },
    SajdahVerse { surah: 16, verse: 50, kind: SajdahType::Recommended },
    SajdahVerse { surah: 17, verse: 109, kind: SajdahType::Recommended },
    SajdahVerse { surah: 19, verse: 58, kind: SajdahType::Recommended },
    SajdahVerse { surah: 22, verse: 18, kind: SajdahType::Recommended },
    SajdahVerse { surah: 22, verse: 77, kind: SajdahType::Recommended },
    SajdahVerse { surah: 25, verse: 60, kind: SajdahType::Recommended },
    SajdahVerse { surah: 27, verse: 26, kind: SajdahType::Recommended },
    SajdahVerse { surah: 32, verse: 15, kind: SajdahType::Obligatory },
    SajdahVerse { surah: 38, verse: 24, kind: SajdahType::Recommended },
    SajdahVerse { surah: 41, verse: 38, kind: SajdahType::Obligatory },
    SajdahVerse { surah: 53, verse: 62, kind: SajdahType::Obligatory },
    SajdahVerse { surah: 84, verse: 21, kind: SajdahType::Recommended },
    SajdahVerse { surah: 96, verse: 19, kind: SajdahType::Obligatory },
];

/// Juz number (1..=30) owning a verse, or `None` for positions outside the corpus.
pub fn juz_for_verse(surah: u32, verse: u32) -> Option<u32> {
    JUZ_BOUNDARIES
        .iter()
        .position(|boundary| boundary.contains(surah, verse))
        .map(|index| index as u32 + 1)
}

/// Manzil number (1..=7) owning a surah, or `None` for surahs outside 1..=114.
pub fn manzil_for_surah(surah: u32) -> Option<u32> {
    MANZIL_RANGES
        .iter()
        .position(|&(start, end)| surah >= start && surah <= end)
        .map(|index| index as u32 + 1)
}

/// Sajdah category of a verse, or `None` for the overwhelming majority that carry none.
pub fn sajdah_for_verse(surah: u32, verse: u32) -> Option<SajdahType> {
    SAJDAH_VERSES
        .iter()
        .find(|entry| entry.surah == surah && entry.verse == verse)
        .map(|entry| entry.kind)
}
