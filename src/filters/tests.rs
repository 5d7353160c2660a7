//! Filter Module Tests
//!
//! Validates the structural range filters and their shared pagination contract.
//!
//! ## Test Scopes
//! - **Juz / Manzil**: Boundary membership, out-of-range permissiveness, annotations.
//! - **Revelation / Length**: Category matching and bucket edges.
//! - **Pagination**: Page arithmetic and idempotence across pages.
//! - **Sajdah**: Index lookups and juz enrichment.

#[cfg(test)]
mod tests {
    use crate::corpus::metadata::{sajdah_for_verse, SajdahType, JUZ_BOUNDARIES, MANZIL_RANGES};
    use crate::corpus::model::{Chapter, Corpus, RevelationType, Verse};
    use crate::filters::engine::{
        filter_by_juz, filter_by_length, filter_by_manzil, filter_by_revelation, sajdah_verses,
    };
    use crate::filters::types::{LengthBucket, Pagination};
    use std::collections::BTreeMap;

    fn make_chapter(surah: u32, revelation: RevelationType, verse_count: u32) -> Chapter {
        let verses: BTreeMap<u32, Verse> = (1..=verse_count)
            .map(|number| {
                (
                    number,
                    Verse {
                        id: surah as f64 + number as f64 / 1000.0,
                        arabic: "آية".to_string(),
                        translation: format!("verse {} of surah {}", number, surah),
                        transliteration: format!("ayah {}", number),
                    },
                )
            })
            .collect();

        Chapter {
            name: format!("Surah {}", surah),
            name_arabic: "سورة".to_string(),
            revelation,
            total_verses: verse_count as usize,
            verses,
        }
    }

    /// Surahs 1 (7 verses) and 2 (200 verses), enough to span the first juz
    /// boundary (which crosses from 1:7 into surah 2 and ends at 2:141).
    fn two_chapter_corpus() -> Corpus {
        let mut chapters = BTreeMap::new();
        chapters.insert(1, make_chapter(1, RevelationType::Meccan, 7));
        chapters.insert(2, make_chapter(2, RevelationType::Medinan, 200));
        Corpus { chapters }
    }

    /// Surah 32 only; its verse 15 is a sajdah verse inside juz 21 and manzil 5.
    fn sajdah_corpus() -> Corpus {
        let mut chapters = BTreeMap::new();
        chapters.insert(32, make_chapter(32, RevelationType::Meccan, 15));
        Corpus { chapters }
    }

    // ============================================================
    // JUZ FILTER TESTS
    // ============================================================

    #[test]
    fn test_juz_one_spans_chapter_boundary() {
        let corpus = two_chapter_corpus();
        let page = filter_by_juz(&corpus, 1, Pagination::default());

        // Juz 1 covers 1:1 through 2:141 -> 7 + 141 verses of this corpus.
        assert_eq!(page.total, 148);
        assert_eq!(page.results.len(), 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 20);
        assert_eq!(page.total_pages, 8);
    }

    #[test]
    fn test_juz_records_stay_inside_boundary() {
        let corpus = two_chapter_corpus();
        let boundary = &JUZ_BOUNDARIES[0];
        let page = filter_by_juz(
            &corpus,
            1,
            Pagination {
                page: 1,
                limit: 1000,
            },
        );

        assert!(page
            .results
            .iter()
            .all(|r| boundary.contains(r.surah_number, r.verse_number)));
        assert!(page.results.iter().all(|r| r.juz == Some(1)));
    }

    #[test]
    fn test_juz_two_starts_after_boundary() {
        let corpus = two_chapter_corpus();
        let page = filter_by_juz(&corpus, 2, Pagination::default());

        // Juz 2 starts at 2:142; this corpus runs out at 2:200.
        assert_eq!(page.total, 59);
        assert_eq!(page.results[0].surah_number, 2);
        assert_eq!(page.results[0].verse_number, 142);
    }

    #[test]
    fn test_juz_out_of_range_is_empty_not_error() {
        let corpus = two_chapter_corpus();
        for juz in [0, 31, 100] {
            let page = filter_by_juz(&corpus, juz, Pagination::default());
            assert_eq!(page.total, 0);
            assert!(page.results.is_empty());
            assert_eq!(page.total_pages, 0);
            assert_eq!(page.page, 1);
            assert_eq!(page.limit, 20);
        }
    }

    #[test]
    fn test_juz_valid_but_uncovered_by_corpus_is_empty() {
        let corpus = two_chapter_corpus();
        // Juz 3 starts at 2:253, past this corpus's last verse.
        let page = filter_by_juz(&corpus, 3, Pagination::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    // ============================================================
    // MANZIL FILTER TESTS
    // ============================================================

    #[test]
    fn test_manzil_collects_whole_surahs() {
        let corpus = two_chapter_corpus();
        // Manzil 1 spans surahs 1-4; both test surahs belong to it.
        let page = filter_by_manzil(
            &corpus,
            1,
            Pagination {
                page: 1,
                limit: 1000,
            },
        );

        assert_eq!(page.total, 207);
        assert!(page.results.iter().all(|r| r.manzil == Some(1)));
    }

    #[test]
    fn test_manzil_without_matching_surahs_is_empty() {
        let corpus = two_chapter_corpus();
        let page = filter_by_manzil(&corpus, 2, Pagination::default());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_manzil_out_of_range_is_empty_not_error() {
        let corpus = two_chapter_corpus();
        for manzil in [0, 8] {
            let page = filter_by_manzil(&corpus, manzil, Pagination::default());
            assert_eq!(page.total, 0);
            assert_eq!(page.total_pages, 0);
        }
    }

    #[test]
    fn test_manzil_records_carry_juz_and_sajdah_annotations() {
        let corpus = sajdah_corpus();
        let page = filter_by_manzil(
            &corpus,
            5,
            Pagination {
                page: 1,
                limit: 1000,
            },
        );

        assert_eq!(page.total, 15);
        assert!(page.results.iter().all(|r| r.manzil == Some(5)));
        // Surah 32 sits inside juz 21 (29:46 - 33:30).
        assert!(page.results.iter().all(|r| r.juz == Some(21)));

        let last = page.results.last().expect("non-empty");
        assert_eq!(last.verse_number, 15);
        assert_eq!(last.sajdah, Some(SajdahType::Obligatory));
        assert!(page.results[..14].iter().all(|r| r.sajdah.is_none()));
    }

    // ============================================================
    // REVELATION FILTER TESTS
    // ============================================================

    #[test]
    fn test_revelation_filter_matches_case_insensitively() {
        let corpus = two_chapter_corpus();

        let meccan = filter_by_revelation(&corpus, "MECCAN", Pagination::default());
        assert_eq!(meccan.total, 7);
        assert!(meccan
            .results
            .iter()
            .all(|r| r.revelation_type == Some(RevelationType::Meccan)));

        let medinan = filter_by_revelation(&corpus, "medinan", Pagination::default());
        assert_eq!(medinan.total, 200);
    }

    #[test]
    fn test_revelation_filter_unknown_type_matches_nothing() {
        let corpus = two_chapter_corpus();
        let page = filter_by_revelation(&corpus, "qwerty", Pagination::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    // ============================================================
    // LENGTH FILTER TESTS
    // ============================================================

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    fn length_corpus() -> Corpus {
        let mut chapter = make_chapter(1, RevelationType::Meccan, 4);
        for (number, count) in [(1u32, 10usize), (2, 11), (3, 30), (4, 31)] {
            if let Some(verse) = chapter.verses.get_mut(&number) {
                verse.translation = words(count);
            }
        }
        let mut chapters = BTreeMap::new();
        chapters.insert(1, chapter);
        Corpus { chapters }
    }

    #[test]
    fn test_length_bucket_edges() {
        assert_eq!(LengthBucket::of(&words(10)), LengthBucket::Short);
        assert_eq!(LengthBucket::of(&words(11)), LengthBucket::Medium);
        assert_eq!(LengthBucket::of(&words(30)), LengthBucket::Medium);
        assert_eq!(LengthBucket::of(&words(31)), LengthBucket::Long);
    }

    #[test]
    fn test_length_filter_buckets() {
        let corpus = length_corpus();

        let short = filter_by_length(&corpus, "short", Pagination::default());
        assert_eq!(short.total, 1);
        assert_eq!(short.results[0].verse_number, 1);
        assert_eq!(short.results[0].verse_length, Some(LengthBucket::Short));

        let medium = filter_by_length(&corpus, "MEDIUM", Pagination::default());
        assert_eq!(medium.total, 2);

        let long = filter_by_length(&corpus, "long", Pagination::default());
        assert_eq!(long.total, 1);
        assert_eq!(long.results[0].verse_number, 4);
    }

    #[test]
    fn test_length_filter_eleven_words_is_never_short() {
        let corpus = length_corpus();
        let short = filter_by_length(&corpus, "short", Pagination::default());
        assert!(short.results.iter().all(|r| r.verse_number != 2));
    }

    #[test]
    fn test_length_filter_unknown_bucket_matches_nothing() {
        let corpus = length_corpus();
        let page = filter_by_length(&corpus, "tiny", Pagination::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    // ============================================================
    // PAGINATION TESTS
    // ============================================================

    #[test]
    fn test_pagination_page_count_is_ceiling() {
        let corpus = two_chapter_corpus();
        for (limit, expected_pages) in [(20, 8), (148, 1), (147, 2), (1000, 1)] {
            let page = filter_by_juz(&corpus, 1, Pagination { page: 1, limit });
            assert_eq!(page.total, 148);
            assert_eq!(page.total_pages, expected_pages);
        }
    }

    #[test]
    fn test_pagination_concatenated_pages_reproduce_full_set() {
        let corpus = two_chapter_corpus();
        let full = filter_by_juz(
            &corpus,
            1,
            Pagination {
                page: 1,
                limit: 1000,
            },
        );

        let mut collected = Vec::new();
        for page_number in 1..=8 {
            let page = filter_by_juz(
                &corpus,
                1,
                Pagination {
                    page: page_number,
                    limit: 20,
                },
            );
            collected.extend(page.results);
        }

        assert_eq!(collected.len(), full.total);
        let keys: Vec<(u32, u32)> = collected
            .iter()
            .map(|r| (r.surah_number, r.verse_number))
            .collect();
        let full_keys: Vec<(u32, u32)> = full
            .results
            .iter()
            .map(|r| (r.surah_number, r.verse_number))
            .collect();
        assert_eq!(keys, full_keys, "no duplicates, omissions, or reordering");
    }

    #[test]
    fn test_pagination_page_past_the_end_is_empty() {
        let corpus = two_chapter_corpus();
        let page = filter_by_juz(
            &corpus,
            1,
            Pagination {
                page: 9,
                limit: 20,
            },
        );
        assert!(page.results.is_empty());
        assert_eq!(page.total, 148);
        assert_eq!(page.page, 9);
    }

    // ============================================================
    // PARTITION PROPERTY TESTS
    // ============================================================

    #[test]
    fn test_every_verse_claimed_by_exactly_one_juz_and_manzil() {
        let corpus = two_chapter_corpus();
        for v in corpus.iter_verses() {
            let juz_claims = JUZ_BOUNDARIES
                .iter()
                .filter(|b| b.contains(v.surah_number, v.verse_number))
                .count();
            assert_eq!(
                juz_claims, 1,
                "verse {}:{} must belong to exactly one juz",
                v.surah_number, v.verse_number
            );

            let manzil_claims = MANZIL_RANGES
                .iter()
                .filter(|&&(start, end)| v.surah_number >= start && v.surah_number <= end)
                .count();
            assert_eq!(manzil_claims, 1);
        }
    }

    // ============================================================
    // SAJDAH INDEX TESTS
    // ============================================================

    #[test]
    fn test_sajdah_verses_enriched_with_juz() {
        let corpus = sajdah_corpus();
        let verses = sajdah_verses(&corpus);

        assert_eq!(verses.len(), 1);
        let record = &verses[0];
        assert_eq!(record.surah_number, 32);
        assert_eq!(record.verse_number, 15);
        assert_eq!(record.sajdah_type, Some(SajdahType::Obligatory));
        assert_eq!(record.juz, Some(21));
        assert_eq!(record.surah_name, "Surah 32");
    }

    #[test]
    fn test_sajdah_verses_skip_entries_outside_corpus() {
        let corpus = two_chapter_corpus();
        assert!(sajdah_verses(&corpus).is_empty());
    }

    #[test]
    fn test_sajdah_lookup_agrees_with_listing() {
        let corpus = sajdah_corpus();
        let listed: Vec<(u32, u32)> = sajdah_verses(&corpus)
            .iter()
            .map(|r| (r.surah_number, r.verse_number))
            .collect();

        for v in corpus.iter_verses() {
            let looked_up = sajdah_for_verse(v.surah_number, v.verse_number).is_some();
            let in_listing = listed.contains(&(v.surah_number, v.verse_number));
            assert_eq!(looked_up, in_listing);
        }
    }
}
