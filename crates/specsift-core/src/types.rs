//! Value types for chunk retrieval

use serde::{Deserialize, Serialize};

/// A subject's specification document, immutable for the duration of a call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecDocument {
    pub subject_id: String,
    pub text: String,
}

/// A contiguous window of the source document.
///
/// `start` and `end` are character offsets, not byte offsets. After the
/// trailing-window merge, `text` can be longer than `end - start` because
/// the appended tail repeats part of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A chunk together with its relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub index: usize,
    pub score: u32,
    pub text: String,
}
