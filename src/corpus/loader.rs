//! Startup corpus loading.
//!
//! Reads the corpus JSON data file, parses it into the in-memory model, and
//! validates the structural invariants the rest of the service relies on.
//! Any defect here aborts startup; nothing on the read path re-checks the data.

use super::model::Corpus;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Loads and validates the corpus from a JSON data file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus data file {}", path.display()))?;
    parse_corpus(&raw)
}

/// Parses corpus JSON and enforces the model invariants.
pub fn parse_corpus(raw: &str) -> Result<Corpus> {
    let mut corpus: Corpus =
        serde_json::from_str(raw).context("failed to parse corpus data file")?;
    validate(&mut corpus)?;
    Ok(corpus)
}

fn validate(corpus: &mut Corpus) -> Result<()> {
    if corpus.chapters.is_empty() {
        bail!("corpus contains no chapters");
    }

    for (&surah_number, chapter) in corpus.chapters.iter_mut() {
        if chapter.verses.is_empty() {
            bail!("surah {} has no verses", surah_number);
        }

        // Verse numbers must be contiguous from 1.
        for (position, &verse_number) in chapter.verses.keys().enumerate() {
            let expected = position as u32 + 1;
            if verse_number != expected {
                bail!(
                    "surah {}: expected verse {} but found {}",
                    surah_number,
                    expected,
                    verse_number
                );
            }
        }

        match chapter.total_verses {
            0 => chapter.total_verses = chapter.verses.len(),
            declared if declared != chapter.verses.len() => bail!(
                "surah {}: declares {} verses but contains {}",
                surah_number,
                declared,
                chapter.verses.len()
            ),
            _ => {}
        }
    }

    tracing::debug!(
        chapters = corpus.chapters.len(),
        verses = corpus.verse_count(),
        "corpus validated"
    );
    Ok(())
}
