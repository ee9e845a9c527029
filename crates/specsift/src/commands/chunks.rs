use specsift_core::{chunk_text, Chunk};
use specsift_store::{FsSpecStore, SpecStore};

pub fn run(subject: &str, root: &str) -> anyhow::Result<()> {
    let store = FsSpecStore::new(root);
    let text = store.load_text(subject)?;
    let chunks = chunk_text(&text);

    println!("{}", render(subject, &chunks));
    Ok(())
}

fn render(subject: &str, chunks: &[Chunk]) -> String {
    let windows: Vec<_> = chunks
        .iter()
        .map(|chunk| {
            serde_json::json!({
                "index": chunk.index,
                "start": chunk.start,
                "end": chunk.end,
                "chars": chunk.text.chars().count(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "subject": subject,
        "chunks": windows,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
