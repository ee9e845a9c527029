//! Retrieval pipeline: load, chunk, extract keywords, score, rank

use crate::chunker::chunk_text;
use crate::keywords::extract_keywords;
use crate::scorer::score_chunk;
use crate::types::{ScoredChunk, SpecDocument};
use rayon::prelude::*;
use specsift_store::{SpecStore, StoreError};

/// Ranks specification chunks against a free-text query.
///
/// Pure per call: the document is read fresh, chunks and scores are
/// recomputed, nothing is cached between calls.
#[derive(Debug)]
pub struct Retriever<S> {
    store: S,
}

impl<S: SpecStore> Retriever<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Texts of the top `max_results` chunks for a query, best first.
    ///
    /// A query that yields no keywords returns an empty sequence without
    /// scoring any chunk; that is a legitimate no-evidence result, not an
    /// error.
    pub fn relevant_chunks(
        &self,
        subject_id: &str,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<String>, StoreError> {
        let ranked = self.scored_chunks(subject_id, query)?;
        Ok(ranked
            .into_iter()
            .take(max_results)
            .map(|chunk| chunk.text)
            .collect())
    }

    /// Full ranked chunk sequence with scores, best first
    pub fn scored_chunks(
        &self,
        subject_id: &str,
        query: &str,
    ) -> Result<Vec<ScoredChunk>, StoreError> {
        let document = SpecDocument {
            subject_id: subject_id.to_string(),
            text: self.store.load_text(subject_id)?,
        };

        let chunks = chunk_text(&document.text);
        let keywords = extract_keywords(query);
        if keywords.is_empty() {
            tracing::debug!(subject_id, "query yielded no keywords, skipping scoring");
            return Ok(Vec::new());
        }

        // Chunks score independently; the stable sort below is the only
        // point that waits on every score.
        let mut ranked: Vec<ScoredChunk> = chunks
            .into_par_iter()
            .map(|chunk| ScoredChunk {
                index: chunk.index,
                score: score_chunk(&chunk.text, &keywords),
                text: chunk.text,
            })
            .collect();

        // sort_by is stable: equal scores keep ascending index order.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            subject_id,
            chunks = ranked.len(),
            keywords = keywords.len(),
            top_score = ranked.first().map_or(0, |c| c.score),
            "ranked chunks"
        );
        Ok(ranked)
    }
}
