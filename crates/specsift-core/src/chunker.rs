//! Fixed-size overlapping window chunker

use crate::types::Chunk;

/// Window size in characters
pub const CHUNK_SIZE: usize = 1024;

/// Start-offset stride between consecutive windows
pub const STRIDE: usize = CHUNK_SIZE / 2;

/// Split document text into overlapping windows of `CHUNK_SIZE` characters,
/// advancing by `STRIDE` per window.
///
/// Offsets count characters so windows never split a multi-byte character.
/// A trailing window shorter than `STRIDE / 2` is appended onto the previous
/// chunk instead of standing alone.
pub fn chunk_text(text: &str) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let length = chars.len();

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut start = 0;
    while start < length {
        let end = (start + CHUNK_SIZE).min(length);
        let window: String = chars[start..end].iter().collect();

        if end == length && end - start < STRIDE / 2 {
            if let Some(previous) = chunks.last_mut() {
                previous.text.push_str(&window);
                previous.end = length;
                start += STRIDE;
                continue;
            }
        }

        chunks.push(Chunk {
            index: chunks.len(),
            start,
            end,
            text: window,
        });
        start += STRIDE;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_no_chunks() {
        assert!(chunk_text("").is_empty());
    }

    #[test]
    fn test_short_document_yields_one_chunk() {
        let text = "a".repeat(300);
        let chunks = chunk_text(&text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].end, 300);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_tiny_document_yields_one_chunk() {
        // Shorter than the merge threshold, but with no previous chunk to
        // merge into it must stand alone.
        let chunks = chunk_text("curriculum");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "curriculum");
    }

    #[test]
    fn test_windows_overlap_by_stride() {
        let text: String = (0..2048).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = chunk_text(&text);

        assert_eq!(chunks.len(), 4);
        assert_eq!((chunks[0].start, chunks[0].end), (0, 1024));
        assert_eq!((chunks[1].start, chunks[1].end), (512, 1536));
        assert_eq!((chunks[2].start, chunks[2].end), (1024, 2048));
        assert_eq!((chunks[3].start, chunks[3].end), (1536, 2048));
        for chunk in &chunks[..3] {
            assert_eq!(chunk.text.chars().count(), CHUNK_SIZE);
        }
        assert_eq!(chunks[3].text.chars().count(), STRIDE);
    }

    #[test]
    fn test_trailing_remainder_merges_into_previous() {
        // Windows: [0, 1024), [512, 1100), then [1024, 1100) is 76 chars,
        // below STRIDE / 2, so it is appended to the second chunk.
        let text = "b".repeat(1100);
        let chunks = chunk_text(&text);

        assert_eq!(chunks.len(), 2);
        assert_eq!((chunks[0].start, chunks[0].end), (0, 1024));
        assert_eq!((chunks[1].start, chunks[1].end), (512, 1100));
        // The appended tail repeats the trailing 76 characters.
        assert_eq!(chunks[1].text.chars().count(), 588 + 76);
    }

    #[test]
    fn test_trailing_window_at_threshold_stands_alone() {
        // Final window [1024, 1280) is exactly STRIDE / 2 chars: no merge.
        let text = "c".repeat(1280);
        let chunks = chunk_text(&text);

        assert_eq!(chunks.len(), 3);
        assert_eq!((chunks[2].start, chunks[2].end), (1024, 1280));
    }

    #[test]
    fn test_offsets_cover_every_character() {
        for len in [1, 255, 256, 1023, 1024, 1100, 1600, 5000] {
            let text = "d".repeat(len);
            let chunks = chunk_text(&text);

            let mut covered = vec![false; len];
            for chunk in &chunks {
                for offset in chunk.start..chunk.end {
                    covered[offset] = true;
                }
            }
            assert!(
                covered.iter().all(|&c| c),
                "length {len} left offsets uncovered"
            );
        }
    }

    #[test]
    fn test_indices_ascend_without_gaps() {
        let text = "e".repeat(4000);
        let chunks = chunk_text(&text);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn test_multibyte_text_chunks_on_char_boundaries() {
        // 1100 three-byte characters; byte-offset slicing would panic.
        let text = "語".repeat(1100);
        let chunks = chunk_text(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text.chars().count(), 1024);
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let text = "f".repeat(3000);
        assert_eq!(chunk_text(&text), chunk_text(&text));
    }
}
