use super::types::{FilterPage, LengthBucket, Pagination};
use crate::corpus::metadata::{
    juz_for_verse, sajdah_for_verse, JUZ_BOUNDARIES, MANZIL_RANGES, SAJDAH_VERSES,
};
use crate::corpus::model::{Corpus, VerseRef};
use crate::search::types::VerseRecord;

/// All verses of one juz, annotated with the juz number and any sajdah marker.
///
/// A juz ordinal outside 1..=30 yields an empty page with total 0, not an error.
pub fn filter_by_juz(corpus: &Corpus, juz: u32, pagination: Pagination) -> FilterPage {
    let boundary = match juz
        .checked_sub(1)
        .and_then(|index| JUZ_BOUNDARIES.get(index as usize))
    {
        Some(boundary) => boundary,
        None => return FilterPage::empty(pagination),
    };

    let records = corpus
        .iter_verses()
        .filter(|v| boundary.contains(v.surah_number, v.verse_number))
        .map(|v| {
            let mut record = annotated_record(&v);
            record.juz = Some(juz);
            record
        })
        .collect();
    paginate(records, pagination)
}

/// All verses of the surahs making up one manzil.
///
/// A manzil ordinal outside 1..=7 yields an empty page with total 0, not an error.
pub fn filter_by_manzil(corpus: &Corpus, manzil: u32, pagination: Pagination) -> FilterPage {
    let (start, end) = match manzil
        .checked_sub(1)
        .and_then(|index| MANZIL_RANGES.get(index as usize))
    {
        Some(&range) => range,
        None => return FilterPage::empty(pagination),
    };

    let records = corpus
        .iter_verses()
        .filter(|v| v.surah_number >= start && v.surah_number <= end)
        .map(|v| {
            let mut record = annotated_record(&v);
            record.manzil = Some(manzil);
            record
        })
        .collect();
    paginate(records, pagination)
}

/// All verses of chapters whose revelation type matches, case-insensitively.
/// An unknown type name matches nothing.
pub fn filter_by_revelation(corpus: &Corpus, kind: &str, pagination: Pagination) -> FilterPage {
    let records = corpus
        .iter_verses()
        .filter(|v| v.chapter.revelation.as_str().eq_ignore_ascii_case(kind))
        .map(|v| {
            let mut record = annotated_record(&v);
            record.revelation_type = Some(v.chapter.revelation);
            record
        })
        .collect();
    paginate(records, pagination)
}

/// All verses whose translation falls into the requested length bucket.
/// An unknown bucket name matches nothing.
pub fn filter_by_length(corpus: &Corpus, bucket: &str, pagination: Pagination) -> FilterPage {
    let wanted = match LengthBucket::parse(bucket) {
        Some(bucket) => bucket,
        None => return paginate(Vec::new(), pagination),
    };

    let records = corpus
        .iter_verses()
        .filter(|v| LengthBucket::of(&v.verse.translation) == wanted)
        .map(|v| {
            let mut record = annotated_record(&v);
            record.verse_length = Some(wanted);
            record
        })
        .collect();
    paginate(records, pagination)
}

/// The sajdah verses present in the corpus, in table order, each enriched with
/// its juz number. Entries pointing outside the corpus are skipped.
pub fn sajdah_verses(corpus: &Corpus) -> Vec<VerseRecord> {
    SAJDAH_VERSES
        .iter()
        .filter_map(|entry| {
            let chapter = corpus.chapter(entry.surah)?;
            let verse = chapter.verses.get(&entry.verse)?;
            let mut record = VerseRecord::from_verse(&VerseRef {
                surah_number: entry.surah,
                verse_number: entry.verse,
                chapter,
                verse,
            });
            record.sajdah_type = Some(entry.kind);
            record.juz = juz_for_verse(entry.surah, entry.verse);
            Some(record)
        })
        .collect()
}

/// Base record with the annotations every filter operation shares.
fn annotated_record(v: &VerseRef<'_>) -> VerseRecord {
    let mut record = VerseRecord::from_verse(v);
    record.juz = juz_for_verse(v.surah_number, v.verse_number);
    record.sajdah = sajdah_for_verse(v.surah_number, v.verse_number);
    record
}

fn paginate(records: Vec<VerseRecord>, pagination: Pagination) -> FilterPage {
    let total = records.len();
    let total_pages = total.div_ceil(pagination.limit);
    let start = (pagination.page - 1) * pagination.limit;
    let results = records
        .into_iter()
        .skip(start)
        .take(pagination.limit)
        .collect();

    FilterPage {
        results,
        total,
        page: pagination.page,
        limit: pagination.limit,
        total_pages,
    }
}
