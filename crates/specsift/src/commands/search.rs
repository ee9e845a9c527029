use specsift_core::{Retriever, ScoredChunk};
use specsift_store::FsSpecStore;

pub fn run(subject: &str, query: &str, limit: usize, root: &str) -> anyhow::Result<()> {
    let retriever = Retriever::new(FsSpecStore::new(root));
    let ranked = retriever.scored_chunks(subject, query)?;

    println!("{}", render(subject, query, &ranked, limit));
    Ok(())
}

fn render(subject: &str, query: &str, ranked: &[ScoredChunk], limit: usize) -> String {
    let passages: Vec<_> = ranked
        .iter()
        .take(limit)
        .map(|chunk| {
            serde_json::json!({
                "index": chunk.index,
                "score": chunk.score,
                "text": chunk.text,
            })
        })
        .collect();

    let output = serde_json::json!({
        "subject": subject,
        "query": query,
        "passages": passages,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
