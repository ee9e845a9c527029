//! Specification chunk retrieval: overlapping windows, keyword scoring, ranked passages

mod chunker;
mod keywords;
mod retriever;
mod scorer;
mod types;

pub use chunker::{chunk_text, CHUNK_SIZE, STRIDE};
pub use keywords::extract_keywords;
pub use retriever::Retriever;
pub use scorer::{score_chunk, COMPLETENESS_BONUS, MATCH_SCORE, PROXIMITY_WINDOW};
pub use types::{Chunk, ScoredChunk, SpecDocument};
