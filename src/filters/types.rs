use crate::search::types::VerseRecord;
use serde::{Deserialize, Serialize};

/// Verse length bucket, computed from the translation's whitespace-split word count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LengthBucket {
    /// At most 10 words.
    Short,
    /// 11 to 30 words.
    Medium,
    /// More than 30 words.
    Long,
}

impl LengthBucket {
    /// Case-insensitive parse; `None` for unknown bucket names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "short" => Some(LengthBucket::Short),
            "medium" => Some(LengthBucket::Medium),
            "long" => Some(LengthBucket::Long),
            _ => None,
        }
    }

    /// Bucket a text falls into.
    pub fn of(text: &str) -> Self {
        let words = text.split_whitespace().count();
        if words <= 10 {
            LengthBucket::Short
        } else if words <= 30 {
            LengthBucket::Medium
        } else {
            LengthBucket::Long
        }
    }
}

/// Page selection for the filter operations.
///
/// Both values are 1-based and nonzero; the HTTP handlers validate before the
/// engine runs.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// One page of filter results plus pagination bookkeeping.
#[derive(Debug, Serialize)]
pub struct FilterPage {
    pub results: Vec<VerseRecord>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl FilterPage {
    /// The empty page returned for out-of-range division ordinals.
    pub fn empty(pagination: Pagination) -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: 0,
        }
    }
}

/// Response envelopes: the shared page plus the scheme-specific label.
#[derive(Debug, Serialize)]
pub struct JuzPage {
    #[serde(flatten)]
    pub page: FilterPage,
    pub juz: u32,
}

#[derive(Debug, Serialize)]
pub struct ManzilPage {
    #[serde(flatten)]
    pub page: FilterPage,
    pub manzil: u32,
}

#[derive(Debug, Serialize)]
pub struct RevelationPage {
    #[serde(flatten)]
    pub page: FilterPage,
    pub revelation_type: String,
}

#[derive(Debug, Serialize)]
pub struct LengthPage {
    #[serde(flatten)]
    pub page: FilterPage,
    pub verse_length: String,
}

#[derive(Debug, Serialize)]
pub struct SajdahList {
    pub total: usize,
    pub verses: Vec<VerseRecord>,
}
