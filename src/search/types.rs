use crate::corpus::metadata::SajdahType;
use crate::corpus::model::{RevelationType, VerseRef};
use crate::filters::types::LengthBucket;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which verse field(s) a search runs against.
///
/// Resolved once at the HTTP boundary from the `field` query parameter; the scan
/// itself never re-interprets field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Translation,
    Arabic,
    Transliteration,
    All,
}

impl SearchField {
    /// Case-insensitive parse; `None` for unknown field names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "translation" => Some(SearchField::Translation),
            "arabic" => Some(SearchField::Arabic),
            "transliteration" => Some(SearchField::Transliteration),
            "all" => Some(SearchField::All),
            _ => None,
        }
    }
}

/// How query text is matched against verse text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Normalize the query to tokens, score every verse, rank descending.
    Tokenized,
    /// Case-insensitive literal pattern, corpus order, no scoring.
    Exact,
}

/// A matched verse projected for the API, with its chapter context and whatever
/// annotations the producing operation attaches. Unset annotations are omitted
/// from the serialized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    pub surah_number: u32,
    pub surah_name: String,
    pub surah_name_arabic: String,
    pub verse_number: u32,
    pub verse_id: f64,
    pub arabic_text: String,
    pub translation: String,
    pub transliteration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juz: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manzil: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revelation_type: Option<RevelationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse_length: Option<LengthBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sajdah: Option<SajdahType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sajdah_type: Option<SajdahType>,
}

impl VerseRecord {
    /// Base projection of a verse; every annotation starts out unset.
    pub fn from_verse(v: &VerseRef<'_>) -> Self {
        Self {
            surah_number: v.surah_number,
            surah_name: v.chapter.name.clone(),
            surah_name_arabic: v.chapter.name_arabic.clone(),
            verse_number: v.verse_number,
            verse_id: v.verse.id,
            arabic_text: v.verse.arabic.clone(),
            translation: v.verse.translation.clone(),
            transliteration: v.verse.transliteration.clone(),
            score: None,
            juz: None,
            manzil: None,
            revelation_type: None,
            verse_length: None,
            sajdah: None,
            sajdah_type: None,
        }
    }
}

/// Restricts a serialized record to the requested keys. Unknown keys are
/// ignored rather than rejected.
pub fn project_fields(record: &VerseRecord, fields: &[&str]) -> Value {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| fields.contains(&key.as_str()))
                .collect(),
        ),
        Ok(other) => other,
        Err(_) => Value::Null,
    }
}

/// Envelope for the search endpoints.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T> {
    pub total_matches: usize,
    pub query: String,
    pub search_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<bool>,
    pub results: Vec<T>,
}

/// One element of the legacy `/corpus/:term` response array.
///
/// The count variant is always the first element, and its key keeps its
/// historical trailing space; existing clients parse it as-is.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LegacyRecord {
    Count {
        #[serde(rename = "total_matches ")]
        total_matches: usize,
    },
    Match {
        surah_no: u32,
        verse_no: u32,
        content: String,
    },
}
