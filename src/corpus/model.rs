use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Historical period a surah was revealed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RevelationType {
    #[serde(alias = "Meccan")]
    Meccan,
    #[serde(alias = "Medinan")]
    Medinan,
}

impl RevelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevelationType::Meccan => "meccan",
            RevelationType::Medinan => "medinan",
        }
    }
}

/// A single verse. Field names mirror the corpus data file, so the same shape
/// is used for loading and for serving chapter/verse lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verse {
    /// Stable external identifier, `surah.verse` as a real number (e.g. `2.255`).
    pub id: f64,
    /// Arabic source text.
    #[serde(rename = "content")]
    pub arabic: String,
    /// English translation.
    #[serde(rename = "translation_eng")]
    pub translation: String,
    /// Latin-script transliteration.
    pub transliteration: String,
}

/// A surah: its names, revelation origin, and ordered verses.
///
/// Verse numbers are contiguous starting at 1; the loader rejects anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "surah_name")]
    pub name: String,
    #[serde(rename = "surah_name_ar")]
    pub name_arabic: String,
    #[serde(rename = "type")]
    pub revelation: RevelationType,
    #[serde(default)]
    pub total_verses: usize,
    pub verses: BTreeMap<u32, Verse>,
}

/// The whole corpus: surah number -> chapter, ordered.
///
/// Constructed once by the loader and shared read-only for the lifetime of the
/// process; no write path exists after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    pub chapters: BTreeMap<u32, Chapter>,
}

/// A verse together with its position and owning chapter, as yielded by a corpus scan.
#[derive(Debug, Clone, Copy)]
pub struct VerseRef<'a> {
    pub surah_number: u32,
    pub verse_number: u32,
    pub chapter: &'a Chapter,
    pub verse: &'a Verse,
}

impl Corpus {
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(|c| c.verses.len()).sum()
    }

    /// Iterates every verse in corpus order (surah ascending, then verse ascending).
    pub fn iter_verses(&self) -> impl Iterator<Item = VerseRef<'_>> {
        self.chapters.iter().flat_map(|(&surah_number, chapter)| {
            chapter.verses.iter().map(move |(&verse_number, verse)| VerseRef {
                surah_number,
                verse_number,
                chapter,
                verse,
            })
        })
    }
}
